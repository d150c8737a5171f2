//! Alternating turn invariant: sides take turns, starting with the first marker.

use super::super::CubeGame;
use super::Invariant;

/// Invariant: markers alternate through the history.
///
/// The first move belongs to the configured first marker, no side plays
/// twice in a row, and the side to move follows from the history length.
pub struct AlternatingTurnInvariant;

impl Invariant<CubeGame> for AlternatingTurnInvariant {
    fn holds(game: &CubeGame) -> bool {
        let first = *game.settings().first_marker();
        let history = game.history();

        if let Some(opening) = history.first()
            && opening.marker != first
        {
            return false;
        }

        if history.windows(2).any(|w| w[0].marker == w[1].marker) {
            return false;
        }

        let expected_next = if history.len() % 2 == 0 {
            first
        } else {
            first.opponent()
        };

        game.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Markers alternate turns starting with the first marker"
    }
}
