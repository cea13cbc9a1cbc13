//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Keys that
//! control the program rather than the game (quit, autoplay toggle) have
//! their own predicates.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, is_autoplay_toggle, should_quit};
