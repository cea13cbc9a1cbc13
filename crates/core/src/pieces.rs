//! Pieces module - piece patterns and the piece catalog
//!
//! A pattern is a square cell matrix (2x2, 3x3 or 4x4) using the same cell
//! encoding as the grid. The catalog layouts include their empty padding
//! rows and columns: the padding decides where the piece pivots when it is
//! rotated, so it is part of the piece definition.

use arrayvec::ArrayVec;

use crate::error::{CoreError, Result};
use crate::types::{Cell, PieceKind, EMPTY};

/// Largest supported pattern edge
pub const MAX_PATTERN_SIZE: usize = 4;

/// Occupied cells of a pattern as `(row, col, value)`
pub type PatternCells = ArrayVec<(usize, usize, Cell), { MAX_PATTERN_SIZE * MAX_PATTERN_SIZE }>;

/// Square piece pattern, stored inline (no allocation, `Copy`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern {
    size: usize,
    cells: [[Cell; MAX_PATTERN_SIZE]; MAX_PATTERN_SIZE],
}

impl Pattern {
    /// Build a pattern from explicit rows
    ///
    /// Fails with [`CoreError::NonSquarePattern`] unless every row is as long
    /// as there are rows, and with [`CoreError::PatternTooLarge`] above 4x4.
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Result<Self> {
        let size = rows.len();
        if size > MAX_PATTERN_SIZE {
            return Err(CoreError::PatternTooLarge(size));
        }
        let mut cells = [[EMPTY; MAX_PATTERN_SIZE]; MAX_PATTERN_SIZE];
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                return Err(CoreError::NonSquarePattern {
                    rows: size,
                    cols: row.len(),
                });
            }
            cells[r][..size].copy_from_slice(row);
        }
        Ok(Self { size, cells })
    }

    const fn literal<const N: usize>(rows: [[Cell; N]; N]) -> Self {
        let mut cells = [[EMPTY; MAX_PATTERN_SIZE]; MAX_PATTERN_SIZE];
        let mut r = 0;
        while r < N {
            let mut c = 0;
            while c < N {
                cells[r][c] = rows[r][c];
                c += 1;
            }
            r += 1;
        }
        Self { size: N, cells }
    }

    /// Edge length of the pattern (its width and its height)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at (row, col); `EMPTY` outside the pattern
    pub fn get(&self, row: usize, col: usize) -> Cell {
        if row < self.size && col < self.size {
            self.cells[row][col]
        } else {
            EMPTY
        }
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: Cell) {
        self.cells[row][col] = value;
    }

    /// Rows of the pattern, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells[..self.size].iter().map(|row| &row[..self.size])
    }

    /// Every nonzero cell as `(row, col, value)`, row-major
    pub fn occupied(&self) -> PatternCells {
        let mut out = PatternCells::new();
        for (r, row) in self.rows().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if value != EMPTY {
                    out.push((r, c, value));
                }
            }
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.rows().all(|row| row.iter().all(|&c| c == EMPTY))
    }

    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows().map(<[Cell]>::to_vec).collect()
    }
}

const I_PATTERN: Pattern = Pattern::literal([
    [0, 0, 0, 0],
    [1, 1, 1, 1],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
]);

const L_PATTERN: Pattern = Pattern::literal([
    [0, 2, 0],
    [0, 2, 0],
    [0, 2, 2],
]);

const J_PATTERN: Pattern = Pattern::literal([
    [0, 3, 0],
    [0, 3, 0],
    [3, 3, 0],
]);

const O_PATTERN: Pattern = Pattern::literal([
    [4, 4],
    [4, 4],
]);

const Z_PATTERN: Pattern = Pattern::literal([
    [5, 5, 0],
    [0, 5, 5],
    [0, 0, 0],
]);

const S_PATTERN: Pattern = Pattern::literal([
    [0, 6, 6],
    [6, 6, 0],
    [0, 0, 0],
]);

const T_PATTERN: Pattern = Pattern::literal([
    [0, 7, 0],
    [7, 7, 7],
    [0, 0, 0],
]);

/// Canonical pattern of a piece kind
pub fn pattern_for(kind: PieceKind) -> Pattern {
    match kind {
        PieceKind::I => I_PATTERN,
        PieceKind::L => L_PATTERN,
        PieceKind::J => J_PATTERN,
        PieceKind::O => O_PATTERN,
        PieceKind::Z => Z_PATTERN,
        PieceKind::S => S_PATTERN,
        PieceKind::T => T_PATTERN,
    }
}

/// Resolve a piece letter, failing with [`CoreError::UnknownPieceType`]
pub fn kind_for_symbol(symbol: char) -> Result<PieceKind> {
    PieceKind::from_symbol(symbol).ok_or(CoreError::UnknownPieceType(symbol))
}

/// Resolve a nonzero cell value, failing with [`CoreError::UnknownPieceValue`]
pub fn kind_for_value(value: Cell) -> Result<PieceKind> {
    PieceKind::from_value(value).ok_or(CoreError::UnknownPieceValue(value))
}

/// Canonical pattern for a piece letter
pub fn pattern_for_symbol(symbol: char) -> Result<Pattern> {
    kind_for_symbol(symbol).map(pattern_for)
}
