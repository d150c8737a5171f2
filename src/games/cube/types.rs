//! Core domain types for the tic-tac-toe cube.

use super::coord::Coord;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of cells along each axis.
pub const SIDE: usize = 3;

/// Total number of cells in the cube.
pub const CELL_COUNT: usize = SIDE * SIDE * SIDE;

/// Marker a player places in a cell.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Marker {
    /// Circle (drawn as a sphere, moves first by default).
    Circle,
    /// Cross (drawn as an asterisk).
    Cross,
}

impl Marker {
    /// Returns the opposing marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::Circle => Marker::Cross,
            Marker::Cross => Marker::Circle,
        }
    }

    /// Single-character symbol used in text output.
    pub fn symbol(self) -> char {
        match self {
            Marker::Circle => 'O',
            Marker::Cross => 'X',
        }
    }
}

/// A cell of the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    /// No marker yet.
    #[default]
    Empty,
    /// Holds a marker.
    Occupied(Marker),
}

impl Cell {
    /// Returns the marker in this cell, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(marker) => Some(marker),
        }
    }
}

/// 3x3x3 grid of cells.
///
/// Cells are stored flat in `[z][y][x]` order, so layer `z = 0` (the
/// front layer, offset `z = 24`) occupies indices 0 through 8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Cell; CELL_COUNT],
}

impl Grid {
    /// Creates an empty grid.
    #[instrument]
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Gets the cell at the given coordinate.
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.to_index()]
    }

    /// Sets the cell at the given coordinate.
    pub fn set(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.to_index()] = cell;
    }

    /// Checks if the cell at the coordinate is empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord) == Cell::Empty
    }

    /// Returns all cells in storage order.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Formats the grid as three layers side by side, front layer first.
    ///
    /// Empty cells show their cell number (1-27).
    pub fn display(&self) -> String {
        let mut lines = vec![String::new(); SIDE + 1];
        for z in 0..SIDE {
            let header = format!("z={:<3}", super::offset::Axis::Z.offset_of(z));
            lines[0].push_str(&format!("{:<14}", header));
            for y in 0..SIDE {
                let mut row = String::new();
                for x in 0..SIDE {
                    let index = z * SIDE * SIDE + y * SIDE + x;
                    let symbol = match self.cells[index] {
                        Cell::Empty => (index + 1).to_string(),
                        Cell::Occupied(marker) => marker.symbol().to_string(),
                    };
                    row.push_str(&format!("{:>3}", symbol));
                    if x < SIDE - 1 {
                        row.push_str(" |");
                    }
                }
                lines[1 + y].push_str(&format!("{:<14}", row));
            }
        }
        lines
            .iter()
            .map(|l| l.trim_end())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new();
        assert_eq!(grid.occupied(), 0);
        assert!(grid.cells().iter().all(|c| *c == Cell::Empty));
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::new();
        let coord = Coord::new(2, 1, 0).unwrap();
        grid.set(coord, Cell::Occupied(Marker::Cross));
        assert_eq!(grid.get(coord), Cell::Occupied(Marker::Cross));
        assert!(!grid.is_empty(coord));
        assert_eq!(grid.occupied(), 1);
    }

    #[test]
    fn test_marker_parses_case_insensitively() {
        assert_eq!("Circle".parse::<Marker>().unwrap(), Marker::Circle);
        assert_eq!("cross".parse::<Marker>().unwrap(), Marker::Cross);
        assert!("sphere".parse::<Marker>().is_err());
    }

    #[test]
    fn test_display_shows_numbers_and_symbols() {
        let mut grid = Grid::new();
        grid.set(Coord::from_number(1).unwrap(), Cell::Occupied(Marker::Circle));
        grid.set(Coord::from_number(27).unwrap(), Cell::Occupied(Marker::Cross));
        let text = grid.display();
        assert!(text.starts_with("z=24"));
        assert!(text.contains('O'));
        assert!(text.contains('X'));
        assert!(text.contains("14"));
        assert!(!text.contains("27"));
    }
}
