//! Session configuration
//!
//! Every field has a default, so a config file only needs the keys it
//! changes. Loading the file is left to the binary.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::heuristic::Weights;
use crate::pieces::MAX_PATTERN_SIZE;
use crate::types::{BASE_DROP_MS, DEFAULT_HEIGHT, DEFAULT_WIDTH, LEVEL_LINE_THRESHOLD};

/// Largest accepted grid side; keeps cell coordinates within `i32` and the
/// rendered field within terminal `u16` columns.
pub const MAX_GRID_DIMENSION: usize = 1024;

/// What happens when a freshly spawned piece overlaps the stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameOverPolicy {
    /// Wipe the grid and keep playing with fresh stats
    #[default]
    Reset,
    /// Stop until the session is restarted
    Halt,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub base_drop_ms: f64,
    pub level_line_threshold: u32,
    pub game_over: GameOverPolicy,
    /// RNG seed; the binary picks one from the clock when unset
    pub seed: Option<u32>,
    pub weights: Weights,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            base_drop_ms: BASE_DROP_MS,
            level_line_threshold: LEVEL_LINE_THRESHOLD,
            game_over: GameOverPolicy::default(),
            seed: None,
            weights: Weights::default(),
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<()> {
        // Every catalog piece must fit an empty grid at spawn.
        let side = MAX_PATTERN_SIZE..=MAX_GRID_DIMENSION;
        if !side.contains(&self.width) || !side.contains(&self.height) {
            return Err(CoreError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.base_drop_ms.is_finite() && self.base_drop_ms > 0.0) {
            return Err(CoreError::InvalidConfig(format!(
                "base_drop_ms must be positive, got {}",
                self.base_drop_ms
            )));
        }
        if self.level_line_threshold == 0 {
            return Err(CoreError::InvalidConfig(
                "level_line_threshold must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
