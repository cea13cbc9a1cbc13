//! Heuristic move search
//!
//! Enumerates every rotation and horizontal offset for a piece, drops each
//! candidate to where it would come to rest, and scores the resulting grid
//! with a weighted sum of classic grid features:
//!
//! ```text
//! score = height * aggregate_height + lines * completed_lines + holes * holes
//! ```
//!
//! A candidate is only considered when the piece fits at row 0 at that
//! offset. The grid is scored at the resting row, not the spawn row.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::collision::{collides, merge};
use crate::grid::Grid;
use crate::player::Player;
use crate::types::{PieceKind, Rotation, EMPTY, HEIGHT_WEIGHT, HOLES_WEIGHT, LINES_WEIGHT};

/// Feature weights of the evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    pub height: i32,
    pub lines: i32,
    pub holes: i32,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            height: HEIGHT_WEIGHT,
            lines: LINES_WEIGHT,
            holes: HOLES_WEIGHT,
        }
    }
}

/// A candidate placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    /// Clockwise quarter turns from the catalog layout
    pub rotation: Rotation,
    /// Column of the pattern's left edge (may be negative)
    pub x: i32,
    /// Row the piece comes to rest on
    pub y: i32,
    pub score: i64,
}

/// Stack height of each column: `height - topmost filled row`, 0 when empty
pub fn column_heights(grid: &Grid) -> Vec<u32> {
    let height = grid.height();
    (0..grid.width())
        .map(|x| {
            (0..height)
                .find(|&y| grid.row(y)[x] != EMPTY)
                .map_or(0, |y| (height - y) as u32)
        })
        .collect()
}

/// Sum of all column heights
pub fn aggregate_height(grid: &Grid) -> u32 {
    column_heights(grid).iter().sum()
}

/// Number of rows with every cell filled
pub fn count_completed_lines(grid: &Grid) -> u32 {
    (0..grid.height()).filter(|&y| grid.is_row_full(y)).count() as u32
}

/// Empty cells that have a filled cell somewhere above them in their column
pub fn count_holes(grid: &Grid) -> u32 {
    let mut holes = 0u32;
    for x in 0..grid.width() {
        let mut seen_block = false;
        for row in grid.rows() {
            if row[x] != EMPTY {
                seen_block = true;
            } else if seen_block {
                holes += 1;
            }
        }
    }
    holes
}

/// Weighted score of a grid
pub fn evaluate(grid: &Grid, weights: &Weights) -> i64 {
    weights.height as i64 * aggregate_height(grid) as i64
        + weights.lines as i64 * count_completed_lines(grid) as i64
        + weights.holes as i64 * count_holes(grid) as i64
}

/// The piece fits where it is
pub fn is_valid_placement(grid: &Grid, player: &Player) -> bool {
    !collides(grid, player)
}

/// Copy of `grid` with the piece merged in
pub fn place_piece(grid: &Grid, player: &Player) -> Grid {
    let mut scratch = grid.clone();
    merge(&mut scratch, player);
    scratch
}

/// Drop a piece straight down from its current row
///
/// Returns `None` when the piece already collides where it is, or has no
/// occupied cells and would never land.
pub fn resting_position(grid: &Grid, player: &Player) -> Option<Player> {
    if player.pattern.is_empty() || !is_valid_placement(grid, player) {
        return None;
    }
    let mut rest = *player;
    loop {
        let below = rest.shifted(0, 1);
        if collides(grid, &below) {
            return Some(rest);
        }
        rest = below;
    }
}

/// Find the best placement of `kind` on `grid`
///
/// Tries rotations 0..4 and offsets `-size .. width - 1` in that order and
/// keeps the first candidate with the highest score. Returns `None` when the
/// piece fits nowhere.
pub fn find_best_move(grid: &Grid, kind: PieceKind, weights: &Weights) -> Option<Move> {
    let mut best: Option<Move> = None;

    for index in 0..4 {
        let rotation = Rotation::from_index(index);
        let size = Player::oriented(kind, rotation, 0, 0).pattern.size() as i32;

        for x in -size..grid.width() as i32 {
            let candidate = Player::oriented(kind, rotation, x, 0);
            let Some(rest) = resting_position(grid, &candidate) else {
                continue;
            };

            let score = evaluate(&place_piece(grid, &rest), weights);
            trace!(?kind, ?rotation, x, y = rest.y, score, "candidate");

            if best.map_or(true, |b| score > b.score) {
                best = Some(Move {
                    rotation,
                    x,
                    y: rest.y,
                    score,
                });
            }
        }
    }

    best
}
