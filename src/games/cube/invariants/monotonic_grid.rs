//! Monotonic grid invariant: cells never change once set.

use super::super::{Cell, CubeGame, Grid};
use super::Invariant;

/// Invariant: cells only go from empty to occupied, never back or across.
///
/// Checked by replaying the history onto an empty grid and comparing.
pub struct MonotonicGridInvariant;

impl Invariant<CubeGame> for MonotonicGridInvariant {
    fn holds(game: &CubeGame) -> bool {
        let mut reconstructed = Grid::new();

        for mov in game.history() {
            if !reconstructed.is_empty(mov.coord) {
                return false;
            }
            reconstructed.set(mov.coord, Cell::Occupied(mov.marker));
        }

        reconstructed == *game.grid()
    }

    fn description() -> &'static str {
        "Grid cells are monotonic (never overwritten)"
    }
}
