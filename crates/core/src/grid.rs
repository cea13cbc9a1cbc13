//! Grid module - the play field
//!
//! The grid is a `width x height` matrix where each cell is empty (`0`) or
//! holds the cell value of the piece that filled it.
//! Uses a flat vector in row-major order; dimensions never change after
//! construction.
//! Coordinates: (x, y) where x is the column (left to right) and y is the row
//! (top to bottom). Signed coordinates are accepted everywhere and anything
//! outside the grid reads as `None` instead of panicking.

use crate::error::{CoreError, Result};
use crate::types::{Cell, DEFAULT_HEIGHT, DEFAULT_WIDTH, EMPTY};

/// The play field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let max = i32::MAX as usize;
        let len = width.checked_mul(height).filter(|_| width <= max && height <= max);
        match len {
            Some(len) if len > 0 => Ok(Self {
                width,
                height,
                cells: vec![EMPTY; len],
            }),
            _ => Err(CoreError::InvalidDimensions { width, height }),
        }
    }

    /// Build a grid from explicit rows (top row first)
    ///
    /// Every row must have the same nonzero length.
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut grid = Self::new(width, height)?;
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(CoreError::InvalidDimensions {
                    width: row.len(),
                    height,
                });
            }
            grid.row_mut(y).copy_from_slice(row);
        }
        Ok(grid)
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(c) if c != EMPTY)
    }

    /// Cells of row `y`. Panics if `y >= height`.
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    fn row_mut(&mut self, y: usize) -> &mut [Cell] {
        let start = y * self.width;
        &mut self.cells[start..start + self.width]
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height {
            return false;
        }
        self.row(y).iter().all(|&cell| cell != EMPTY)
    }

    /// Remove row `y`, shift every row above it down by one and put an empty
    /// row on top.
    pub(crate) fn remove_row(&mut self, y: usize) {
        if y >= self.height {
            return;
        }
        let width = self.width;
        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..y * width, width);
        self.row_mut(0).fill(EMPTY);
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// Rows as owned vectors (snapshots, debugging)
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows().map(<[Cell]>::to_vec).collect()
    }
}

impl Default for Grid {
    /// Empty 10x20 grid
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cells: vec![EMPTY; DEFAULT_WIDTH * DEFAULT_HEIGHT],
        }
    }
}
