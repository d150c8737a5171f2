//! Win detection for the cube.
//!
//! A line is three cells that vary along a single axis: 9 horizontal rows
//! (along X), 9 vertical columns (along Y) and 9 depth lines (along Z).
//! Diagonals do not count.

use super::super::offset::{Axis, Offset};
use super::super::{Coord, Grid, Marker, SIDE};
use schemars::JsonSchema;
use serde::Serialize;
use tracing::{info, instrument};

/// Length of a strike along its line, long enough to cover all three cells.
pub const STRIKE_LENGTH: u32 = 64;

/// Thickness of a strike across its line.
pub const STRIKE_THICKNESS: u32 = 2;

/// Direction a line runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, JsonSchema, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Orientation {
    /// Along the X axis.
    Horizontal,
    /// Along the Y axis.
    Vertical,
    /// Along the Z axis.
    Depth,
}

impl Orientation {
    /// The axis this orientation runs along.
    pub fn axis(self) -> Axis {
        match self {
            Orientation::Horizontal => Axis::X,
            Orientation::Vertical => Axis::Y,
            Orientation::Depth => Axis::Z,
        }
    }

    /// Box size `[x, y, z]` of a strike drawn in this orientation.
    pub fn strike_size(self) -> [u32; 3] {
        let mut size = [STRIKE_THICKNESS; 3];
        let long = match self.axis() {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        };
        size[long] = STRIKE_LENGTH;
        size
    }
}

/// Geometry a renderer needs to draw a strike through a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, JsonSchema)]
pub struct Strike {
    /// Centre of the strike, the middle cell of the line.
    pub center: Offset,
    /// Box size along `[x, y, z]`.
    pub size: [u32; 3],
}

/// Three aligned cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, JsonSchema)]
pub struct Line {
    /// Direction of the line.
    pub orientation: Orientation,
    /// Cells in ascending index order along the line's axis.
    pub cells: [Coord; 3],
}

impl Line {
    fn along(orientation: Orientation, a: usize, b: usize) -> Self {
        let cells = match orientation {
            Orientation::Horizontal => [0, 1, 2].map(|x| Coord::at(x, b, a)),
            Orientation::Vertical => [0, 1, 2].map(|y| Coord::at(b, y, a)),
            Orientation::Depth => [0, 1, 2].map(|z| Coord::at(a, b, z)),
        };
        Self { orientation, cells }
    }

    /// Strike geometry for this line.
    pub fn strike(&self) -> Strike {
        Strike {
            center: self.cells[1].to_offset(),
            size: self.orientation.strike_size(),
        }
    }

    /// Marker shared by all three cells, if any.
    pub fn owner(&self, grid: &Grid) -> Option<Marker> {
        let [a, b, c] = self.cells.map(|coord| grid.get(coord));
        match a.marker() {
            Some(marker) if a == b && b == c => Some(marker),
            _ => None,
        }
    }
}

/// All 27 candidate lines.
///
/// For each `(i, j)` the horizontal row in layer `i`, row `j` comes first,
/// then the depth line through column `i`, row `j`, then the vertical
/// column in layer `i`, column `j`.
pub fn lines() -> impl Iterator<Item = Line> {
    (0..SIDE).flat_map(|i| {
        (0..SIDE).flat_map(move |j| {
            [
                Line::along(Orientation::Horizontal, i, j),
                Line::along(Orientation::Depth, i, j),
                Line::along(Orientation::Vertical, i, j),
            ]
        })
    })
}

/// A completed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, JsonSchema)]
pub struct WinLine {
    /// The line that was completed.
    pub line: Line,
    /// Marker occupying the line.
    pub marker: Marker,
    /// Where to draw the strike.
    pub strike: Strike,
}

/// Returns every completed line on the grid.
///
/// Simultaneous wins are all reported, in [`lines`] order.
#[instrument(skip(grid))]
pub fn check_win_conditions(grid: &Grid) -> Vec<WinLine> {
    let won: Vec<WinLine> = lines()
        .filter_map(|line| {
            line.owner(grid).map(|marker| WinLine {
                line,
                marker,
                strike: line.strike(),
            })
        })
        .collect();
    if !won.is_empty() {
        info!(count = won.len(), "Winning lines detected");
    }
    won
}

/// Returns the owner of the first completed line, if any.
#[instrument(skip(grid))]
pub fn check_winner(grid: &Grid) -> Option<Marker> {
    lines().find_map(|line| line.owner(grid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::cube::Cell;
    use std::collections::HashSet;

    fn fill(grid: &mut Grid, line: &Line, marker: Marker) {
        for coord in line.cells {
            grid.set(coord, Cell::Occupied(marker));
        }
    }

    #[test]
    fn test_twenty_seven_distinct_lines() {
        let all: Vec<_> = lines().collect();
        assert_eq!(all.len(), 27);
        let unique: HashSet<_> = all.iter().map(|l| l.cells).collect();
        assert_eq!(unique.len(), 27);
        for orientation in [Orientation::Horizontal, Orientation::Vertical, Orientation::Depth] {
            assert_eq!(all.iter().filter(|l| l.orientation == orientation).count(), 9);
        }
    }

    #[test]
    fn test_line_cells_vary_along_one_axis() {
        for line in lines() {
            let axis = line.orientation.axis();
            for (i, coord) in line.cells.iter().enumerate() {
                assert_eq!(coord.along(axis), i);
            }
            for other in [Axis::X, Axis::Y, Axis::Z].into_iter().filter(|a| *a != axis) {
                let first = line.cells[0].along(other);
                assert!(line.cells.iter().all(|c| c.along(other) == first));
            }
        }
    }

    #[test]
    fn test_empty_grid_has_no_winner() {
        let grid = Grid::new();
        assert!(check_win_conditions(&grid).is_empty());
        assert_eq!(check_winner(&grid), None);
    }

    #[test]
    fn test_each_line_detected_alone() {
        for line in lines() {
            let mut grid = Grid::new();
            fill(&mut grid, &line, Marker::Cross);
            let won = check_win_conditions(&grid);
            assert_eq!(won.len(), 1, "{:?}", line);
            assert_eq!(won[0].line, line);
            assert_eq!(won[0].marker, Marker::Cross);
        }
    }

    #[test]
    fn test_mixed_markers_do_not_win() {
        let line = lines().next().unwrap();
        let mut grid = Grid::new();
        grid.set(line.cells[0], Cell::Occupied(Marker::Circle));
        grid.set(line.cells[1], Cell::Occupied(Marker::Cross));
        grid.set(line.cells[2], Cell::Occupied(Marker::Circle));
        assert!(check_win_conditions(&grid).is_empty());
    }

    #[test]
    fn test_simultaneous_wins_all_reported() {
        let mut grid = Grid::new();
        let row = Line::along(Orientation::Horizontal, 1, 1);
        let column = Line::along(Orientation::Vertical, 1, 1);
        fill(&mut grid, &row, Marker::Circle);
        fill(&mut grid, &column, Marker::Circle);
        let won = check_win_conditions(&grid);
        assert_eq!(won.len(), 2);
        assert!(won.iter().any(|w| w.line == row));
        assert!(won.iter().any(|w| w.line == column));
    }

    #[test]
    fn test_strike_geometry_matches_orientation() {
        let row = Line::along(Orientation::Horizontal, 0, 0);
        assert_eq!(
            row.strike(),
            Strike {
                center: Offset::new(0, 24, 24),
                size: [64, 2, 2],
            }
        );

        let depth = Line::along(Orientation::Depth, 2, 1);
        assert_eq!(depth.strike().center, Offset::new(24, 0, 0));
        assert_eq!(depth.strike().size, [2, 2, 64]);

        let column = Line::along(Orientation::Vertical, 2, 0);
        assert_eq!(column.strike().center, Offset::new(-24, 0, -24));
        assert_eq!(column.strike().size, [2, 64, 2]);
    }
}
