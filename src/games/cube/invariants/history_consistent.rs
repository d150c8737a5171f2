//! History consistency invariant: one history entry per occupied cell.

use super::super::CubeGame;
use super::Invariant;

/// Invariant: history length equals the number of occupied cells.
pub struct HistoryConsistentInvariant;

impl Invariant<CubeGame> for HistoryConsistentInvariant {
    fn holds(game: &CubeGame) -> bool {
        game.history().len() == game.grid().occupied()
    }

    fn description() -> &'static str {
        "History length matches number of occupied cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::cube::{Cell, Coord, Marker};

    #[test]
    fn test_empty_game_holds() {
        assert!(HistoryConsistentInvariant::holds(&CubeGame::new()));
    }

    #[test]
    fn test_placements_hold() {
        let mut game = CubeGame::new();
        for number in [7, 8, 9] {
            game.place_coord(Coord::from_number(number).unwrap()).unwrap();
        }
        assert!(HistoryConsistentInvariant::holds(&game));
        assert_eq!(game.history().len(), 3);
    }

    #[test]
    fn test_unrecorded_marker_violates() {
        let mut game = CubeGame::new();
        game.grid
            .set(Coord::from_number(7).unwrap(), Cell::Occupied(Marker::Circle));
        assert!(!HistoryConsistentInvariant::holds(&game));
    }
}
