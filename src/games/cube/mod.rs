//! Tic-tac-toe on a 3x3x3 cube.

mod action;
mod contracts;
mod coord;
mod game;
mod invariants;
pub mod offset;
mod report;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use contracts::{CellIsEmpty, Contract, LegalMove, MoveContract, PlayersTurn};
pub use coord::{CellInput, CellInputError, Coord};
pub use game::{CubeGame, GameStatus, Placement};
pub use invariants::{
    AlternatingTurnInvariant, CubeInvariants, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, MonotonicGridInvariant,
};
pub use offset::{Axis, Offset, OffsetParseError, SPACING};
pub use report::{GameReport, LineGeometry, line_geometry};
pub use rules::{Line, Orientation, Strike, WinLine, check_win_conditions, lines};
pub use types::{CELL_COUNT, Cell, Grid, Marker, SIDE};
