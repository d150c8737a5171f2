//! Game rules for the tic-tac-toe cube.
//!
//! Pure functions over a [`Grid`](super::Grid), kept apart from game
//! state so contracts and reports can reuse them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{
    Line, Orientation, STRIKE_LENGTH, STRIKE_THICKNESS, Strike, WinLine, check_win_conditions,
    check_winner, lines,
};
