//! Contract-based validation for placements.
//!
//! A contract pairs preconditions checked before a move with
//! postconditions checked on the resulting state: `{P} move {Q}`.

use super::action::{Move, MoveError};
use super::game::CubeGame;
use super::invariants::{CubeInvariants, InvariantSet};
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the target cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects moves onto an occupied cell.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &CubeGame) -> Result<(), MoveError> {
        if game.grid().is_empty(mov.coord) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(mov.coord))
        }
    }
}

/// Precondition: it must be the moving side's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects moves by the side not on turn.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &CubeGame) -> Result<(), MoveError> {
        if mov.marker == game.to_move() {
            Ok(())
        } else {
            Err(MoveError::WrongPlayer(mov.marker))
        }
    }
}

/// Composite precondition: empty cell and correct turn.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &CubeGame) -> Result<(), MoveError> {
        CellIsEmpty::check(mov, game)?;
        PlayersTurn::check(mov, game)?;
        Ok(())
    }
}

/// Contract for placements.
///
/// Preconditions: [`LegalMove`]. Postconditions: every invariant in
/// [`CubeInvariants`] holds on the new state.
pub struct MoveContract;

impl Contract<CubeGame, Move> for MoveContract {
    fn pre(game: &CubeGame, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(_before: &CubeGame, after: &CubeGame) -> Result<(), MoveError> {
        CubeInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::cube::{Cell, Coord, Marker};

    fn center() -> Coord {
        Coord::from_number(14).unwrap()
    }

    #[test]
    fn test_precondition_empty_cell() {
        let game = CubeGame::new();
        let action = Move::new(Marker::Circle, center());
        assert!(MoveContract::pre(&game, &action).is_ok());
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let mut game = CubeGame::new();
        game.place_coord(center()).unwrap();
        let action = Move::new(Marker::Cross, center());
        assert_eq!(
            MoveContract::pre(&game, &action),
            Err(MoveError::CellOccupied(center()))
        );
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let game = CubeGame::new();
        let action = Move::new(Marker::Cross, center());
        assert_eq!(
            MoveContract::pre(&game, &action),
            Err(MoveError::WrongPlayer(Marker::Cross))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = CubeGame::new();
        let mut after = before.clone();
        after.place_coord(center()).unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = CubeGame::new();
        let mut after = before.clone();
        after.place_coord(center()).unwrap();
        after
            .grid
            .set(Coord::from_number(1).unwrap(), Cell::Occupied(Marker::Cross));
        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }
}
