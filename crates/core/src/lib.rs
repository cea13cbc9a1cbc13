//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the grid, the piece catalog, collision, line sweeping,
//! scoring and the heuristic move search. It has no dependency on the
//! terminal or on any I/O, so the same code drives the interactive game, the
//! headless autoplay runner and the tests.
//!
//! # Module Structure
//!
//! - [`grid`]: row-major play field with signed, bounds-checked access
//! - [`pieces`]: piece patterns and the seven-piece catalog
//! - [`rotation`]: quarter-turn pattern rotation
//! - [`player`]: the falling piece (pattern plus position)
//! - [`collision`]: overlap test and merging a piece into the grid
//! - [`sweep`]: removal of completed rows
//! - [`scoring`]: line points and the level / fall-interval progression
//! - [`heuristic`]: grid evaluation and best-placement search
//! - [`game_state`]: the play session tying everything together
//!
//! # Rules
//!
//! - Walls and the floor are solid; rows above the top are open, so a piece
//!   may stick out above the grid while it falls.
//! - No wall kicks: a rotation that collides is refused.
//! - A piece that cannot move down is merged immediately (no lock delay).
//! - The level goes up when one lock step clears at least the configured
//!   number of lines.
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameState, SpawnOutcome};
//! use blockfall_core::types::{GameAction, PieceKind, Rotation};
//!
//! let mut game = GameState::with_seed(12345);
//! assert_eq!(game.spawn_piece_of(PieceKind::O, Rotation::North), SpawnOutcome::Spawned);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.grid().get(5, 19), Some(PieceKind::O.value()));
//! ```

pub mod collision;
pub mod config;
pub mod error;
pub mod game_state;
pub mod grid;
pub mod heuristic;
pub mod pieces;
pub mod player;
pub mod rng;
pub mod rotation;
pub mod scoring;
pub mod snapshot;
pub mod sweep;

pub use blockfall_types as types;

pub use collision::{collides, merge};
pub use config::{GameConfig, GameOverPolicy, MAX_GRID_DIMENSION};
pub use error::{CoreError, Result};
pub use game_state::{DropOutcome, GameState, SpawnOutcome};
pub use grid::Grid;
pub use heuristic::{
    evaluate, find_best_move, is_valid_placement, place_piece, resting_position, Move, Weights,
};
pub use pieces::{pattern_for, Pattern};
pub use player::Player;
pub use rng::{PieceSource, SimpleRng};
pub use scoring::{calculate_line_score, drop_interval_ms, next_level};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
pub use sweep::sweep;
