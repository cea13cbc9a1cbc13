//! Player module - the falling piece

use crate::pieces::{pattern_for, Pattern};
use crate::rotation::{oriented, rotate};
use crate::types::{PieceKind, Rotation, RotationDir};

/// Active falling piece
///
/// `(x, y)` is the grid position of the pattern's top-left corner. `y` may be
/// negative while the piece is partly above the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Player {
    pub kind: PieceKind,
    pub pattern: Pattern,
    pub rotation: Rotation,
    pub x: i32,
    pub y: i32,
}

impl Player {
    /// Piece of `kind` in catalog orientation at (x, y)
    pub fn new(kind: PieceKind, x: i32, y: i32) -> Self {
        Self {
            kind,
            pattern: pattern_for(kind),
            rotation: Rotation::North,
            x,
            y,
        }
    }

    /// Piece of `kind` turned to `rotation` at (x, y)
    pub fn oriented(kind: PieceKind, rotation: Rotation, x: i32, y: i32) -> Self {
        Self {
            kind,
            pattern: oriented(&pattern_for(kind), rotation),
            rotation,
            x,
            y,
        }
    }

    /// Horizontal spawn offset that centres the pattern over a grid
    pub fn spawn_x(grid_width: usize, pattern_size: usize) -> i32 {
        (grid_width / 2) as i32 - (pattern_size / 2) as i32
    }

    /// Same piece shifted by (dx, dy)
    pub fn shifted(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same piece turned one quarter in `dir`
    pub fn turned(&self, dir: RotationDir) -> Self {
        Self {
            pattern: rotate(&self.pattern, dir),
            rotation: self.rotation.turn(dir),
            ..*self
        }
    }

    /// Absolute grid coordinates `(x, y, value)` of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, u8)> + '_ {
        self.pattern
            .occupied()
            .into_iter()
            .map(move |(r, c, v)| (self.x + c as i32, self.y + r as i32, v))
    }
}
