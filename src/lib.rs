//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and holds the pieces
//! of the binary that are worth testing on their own: config loading and
//! log setup.

pub mod config;
pub mod logging;

pub use blockfall_core as core;
pub use blockfall_engine as engine;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
