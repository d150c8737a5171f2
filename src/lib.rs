//! Tic-tac-toe cube library - board state and win detection
//!
//! A 3x3x3 tic-tac-toe game addressed by spatial offsets, with every
//! completed line reported alongside the strike geometry a renderer needs.
//!
//! # Architecture
//!
//! - **Games**: cube board, offset mapping, win rules, contracts and invariants
//! - **Settings**: TOML-backed game rules
//! - **Session**: line-oriented play loop for terminal front ends
//!
//! # Example
//!
//! ```
//! use tictactoe_cube::{CubeGame, GameStatus, Offset};
//!
//! let mut game = CubeGame::new();
//! for (circle, cross) in [(-24, -24), (0, 0)] {
//!     game.place(Offset::new(circle, 24, 24)).unwrap();
//!     game.place(Offset::new(cross, 0, 24)).unwrap();
//! }
//! let placement = game.place(Offset::new(24, 24, 24)).unwrap();
//! assert!(matches!(placement.status, GameStatus::Won(_)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod games;
mod session;
mod settings;

// Crate-level exports - Settings
pub use settings::{ConfigError, GameSettings};

// Crate-level exports - Session
pub use session::{
    PlaySession, ReplayError, Turn, describe_status, describe_win_line, render_replay,
    replay_inputs,
};

// Crate-level exports - Game types
pub use games::cube::{
    AlternatingTurnInvariant, Axis, CELL_COUNT, Cell, CellInput, CellInputError, CellIsEmpty,
    Contract, Coord, CubeGame,
    CubeInvariants, GameReport, GameStatus, Grid, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, LegalMove, Line, LineGeometry, Marker, MonotonicGridInvariant,
    Move, MoveContract, MoveError, Offset, OffsetParseError, Orientation, Placement, PlayersTurn,
    SIDE, SPACING, Strike, WinLine, check_win_conditions, line_geometry, lines,
};
