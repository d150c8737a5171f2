//! Grid coordinates for the cube.

use super::offset::{Axis, Offset};
use super::types::{CELL_COUNT, Grid, SIDE};
use derive_more::{Display, Error};
use schemars::JsonSchema;
use serde::Serialize;
use std::str::FromStr;
use tracing::instrument;

/// A validated cell coordinate, each index in `0..3`.
///
/// `x` indexes columns left to right, `y` rows top to bottom and `z`
/// layers front to back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, JsonSchema)]
pub struct Coord {
    x: usize,
    y: usize,
    z: usize,
}

impl Coord {
    /// Creates a coordinate, or `None` if any index is off the grid.
    pub fn new(x: usize, y: usize, z: usize) -> Option<Self> {
        (x < SIDE && y < SIDE && z < SIDE).then_some(Self { x, y, z })
    }

    /// Creates a coordinate from indices already known to be in range.
    pub(crate) const fn at(x: usize, y: usize, z: usize) -> Self {
        debug_assert!(x < SIDE && y < SIDE && z < SIDE);
        Self { x, y, z }
    }

    /// Column index.
    pub fn x(self) -> usize {
        self.x
    }

    /// Row index.
    pub fn y(self) -> usize {
        self.y
    }

    /// Layer index.
    pub fn z(self) -> usize {
        self.z
    }

    /// Index along `axis`.
    pub fn along(self, axis: Axis) -> usize {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Converts to the flat storage index (0-26).
    pub fn to_index(self) -> usize {
        self.z * SIDE * SIDE + self.y * SIDE + self.x
    }

    /// Creates a coordinate from a flat storage index.
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= CELL_COUNT {
            return None;
        }
        Self::new(index % SIDE, (index / SIDE) % SIDE, index / (SIDE * SIDE))
    }

    /// Cell number shown on an empty cell (1-27).
    pub fn number(self) -> usize {
        self.to_index() + 1
    }

    /// Creates a coordinate from a cell number (1-27).
    pub fn from_number(number: usize) -> Option<Self> {
        number.checked_sub(1).and_then(Self::from_index)
    }

    /// Maps a spatial offset to its cell.
    ///
    /// Returns `None` unless every component is a lattice point.
    #[instrument]
    pub fn from_offset(offset: Offset) -> Option<Self> {
        Self::new(
            Axis::X.index_of(offset.x)?,
            Axis::Y.index_of(offset.y)?,
            Axis::Z.index_of(offset.z)?,
        )
    }

    /// Spatial offset of this cell's centre.
    pub fn to_offset(self) -> Offset {
        Offset::new(
            Axis::X.offset_of(self.x),
            Axis::Y.offset_of(self.y),
            Axis::Z.offset_of(self.z),
        )
    }

    /// All 27 coordinates in storage order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..CELL_COUNT).filter_map(Self::from_index)
    }

    /// Empty cells of `grid`, in storage order.
    #[instrument(skip(grid))]
    pub fn valid_moves(grid: &Grid) -> Vec<Coord> {
        Self::all().filter(|c| grid.is_empty(*c)).collect()
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {}", self.number(), self.to_offset())
    }
}

/// A cell as a player names it.
///
/// Numbers are checked against `1`-`27` when parsed. Offsets are kept as
/// given so that placing one reports [`MoveError::OutOfGrid`](super::MoveError)
/// when it is off the lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellInput {
    /// A cell number, already resolved.
    Number(Coord),
    /// A spatial offset triple.
    Offset(Offset),
}

/// Error parsing a [`CellInput`].
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("'{input}' is not a cell: enter 1-27 or x,y,z")]
pub struct CellInputError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for CellInput {
    type Err = CellInputError;

    /// Parses a cell number (`14`) or an offset triple (`-24,0,24`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let err = || CellInputError {
            input: s.to_string(),
        };
        if let Ok(number) = s.parse::<usize>() {
            return Coord::from_number(number).map(CellInput::Number).ok_or_else(err);
        }
        s.parse::<Offset>()
            .map(CellInput::Offset)
            .map_err(|_| err())
    }
}

impl std::fmt::Display for CellInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellInput::Number(coord) => write!(f, "{}", coord.number()),
            CellInput::Offset(offset) => write!(f, "{}", offset),
        }
    }
}
