//! Placements as first-class actions.
//!
//! A move is the intent to put a marker in a cell. It can be validated
//! against a game before anything changes, and replayed later.

use super::offset::Offset;
use super::{Coord, Marker};
use schemars::JsonSchema;
use serde::Serialize;
use tracing::instrument;

/// A marker placed at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, JsonSchema)]
pub struct Move {
    /// Side placing the marker.
    pub marker: Marker,
    /// Target cell.
    pub coord: Coord,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(marker: Marker, coord: Coord) -> Self {
        Self { marker, coord }
    }

    /// Creates a move from a spatial offset.
    #[instrument]
    pub fn at_offset(marker: Marker, offset: Offset) -> Result<Self, MoveError> {
        let coord = Coord::from_offset(offset).ok_or(MoveError::OutOfGrid(offset))?;
        Ok(Self::new(marker, coord))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.marker, self.coord)
    }
}

/// Reasons a placement is rejected.
///
/// A rejected placement leaves the game untouched and does not pass the turn.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The offset does not land on a cell.
    #[display("Offset {} is not on the grid", _0)]
    OutOfGrid(Offset),

    /// The cell already holds a marker.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Coord),

    /// It is the other side's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Marker),

    /// No further placements are accepted.
    #[display("Game is already over")]
    GameOver,

    /// A postcondition failed after applying the move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
