//! Serializable snapshot of a game for external renderers.

use super::game::{CubeGame, GameStatus};
use super::rules::{self, Line, Strike};
use super::{Cell, Marker, Move};
use schemars::JsonSchema;
use serde::Serialize;
use tracing::instrument;

/// Everything a renderer needs to draw the current position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct GameReport {
    /// The 27 cells in `[z][y][x]` order.
    pub cells: Vec<Cell>,
    /// Side to move.
    pub to_move: Marker,
    /// Status, including any winning lines and their strikes.
    pub status: GameStatus,
    /// Accepted moves in order.
    pub moves: Vec<Move>,
}

impl GameReport {
    /// Captures the current state of `game`.
    #[instrument(skip(game), fields(moves = game.history().len()))]
    pub fn from_game(game: &CubeGame) -> Self {
        Self {
            cells: game.grid().cells().to_vec(),
            to_move: game.to_move(),
            status: game.status(),
            moves: game.history().to_vec(),
        }
    }
}

/// A candidate line with the strike that would mark it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct LineGeometry {
    /// The line.
    pub line: Line,
    /// Strike drawn when the line is won.
    pub strike: Strike,
}

/// All 27 candidate lines with their strikes.
pub fn line_geometry() -> Vec<LineGeometry> {
    rules::lines()
        .map(|line| LineGeometry {
            line,
            strike: line.strike(),
        })
        .collect()
}
