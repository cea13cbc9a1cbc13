//! Read-only views of a session for renderers and headless output

use serde::Serialize;

use crate::player::Player;
use crate::types::{Cell, PieceKind, Rotation};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i32,
    pub y: i32,
    pub pattern: Vec<Vec<Cell>>,
    /// Absolute `[x, y]` of every occupied cell, including rows above the grid
    pub cells: Vec<[i32; 2]>,
}

impl From<Player> for ActiveSnapshot {
    fn from(value: Player) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
            pattern: value.pattern.to_rows(),
            cells: value.cells().map(|(x, y, _)| [x, y]).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    /// Settled cells, top row first
    pub board: Vec<Vec<Cell>>,
    pub active: Option<ActiveSnapshot>,
    pub piece_id: u32,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub drop_interval_ms: f64,
    pub games_played: u32,
    pub paused: bool,
    pub game_over: bool,
    pub seed: u32,
}

impl GameSnapshot {
    /// Cell value at (x, y) with the active piece drawn over the board
    pub fn cell_at(&self, x: usize, y: usize) -> Cell {
        if let Some(active) = &self.active {
            let (px, py) = (x as i32 - active.x, y as i32 - active.y);
            if px >= 0 && py >= 0 {
                let v = active
                    .pattern
                    .get(py as usize)
                    .and_then(|row| row.get(px as usize))
                    .copied()
                    .unwrap_or(0);
                if v != 0 {
                    return v;
                }
            }
        }
        self.board
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(0)
    }
}
