//! Terminal rendering for the game.
//!
//! [`GameView`] draws a [`GameSnapshot`](crate::core::GameSnapshot) into a
//! [`FrameBuffer`] without touching the terminal; [`TerminalRenderer`] owns
//! the terminal and flushes frames to it. Each grid cell is two characters
//! wide to keep the playfield roughly square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use game_view::{GameView, PanelStatus, Viewport};
pub use renderer::{encode_full_into, TerminalRenderer};
