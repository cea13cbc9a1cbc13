//! Automated play on top of the core session.
//!
//! [`place::apply_move`] turns a heuristic [`Move`](crate::core::Move) into
//! rotate / shift / hard-drop commands; [`autoplay::autoplay_step`] picks the
//! move and applies it.

pub mod autoplay;
pub mod place;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use autoplay::{autoplay_pieces, autoplay_step};
pub use place::{apply_move, PlaceError};
