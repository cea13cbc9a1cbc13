//! Collision and merge
//!
//! Walls and the floor are solid. The space above the top row is open:
//! pieces may spawn and rotate partly above the grid.

use crate::grid::Grid;
use crate::player::Player;

/// Check whether a piece overlaps a wall, the floor or a filled cell
pub fn collides(grid: &Grid, player: &Player) -> bool {
    let width = grid.width() as i32;
    let height = grid.height() as i32;

    player.cells().any(|(x, y, _)| {
        if x < 0 || x >= width || y >= height {
            return true;
        }
        // Rows above the top never collide
        y >= 0 && grid.is_occupied(x, y)
    })
}

/// Write a piece into the grid at its current position
///
/// Does not check for collisions; callers merge only positions that passed
/// [`collides`]. Cells above the top row are discarded.
pub fn merge(grid: &mut Grid, player: &Player) {
    for (x, y, value) in player.cells() {
        grid.set(x, y, value);
    }
}
