//! Draw detection for the cube.

use super::super::{Cell, Grid};
use tracing::instrument;

/// Checks if every cell is occupied.
///
/// A full grid with no completed line is a draw.
#[instrument(skip(grid))]
pub fn is_full(grid: &Grid) -> bool {
    grid.cells().iter().all(|c| *c != Cell::Empty)
}

/// Checks if the grid is full and no line was completed.
#[instrument(skip(grid))]
pub fn is_draw(grid: &Grid) -> bool {
    is_full(grid) && super::win::check_winner(grid).is_none()
}
