//! Kani proof harnesses for the offset mapping and line detection.

use crate::games::cube::offset::Axis;
use crate::games::cube::{Cell, Coord, Grid, Marker, SIDE, check_win_conditions, lines};

fn any_axis() -> Axis {
    match kani::any::<u8>() % 3 {
        0 => Axis::X,
        1 => Axis::Y,
        _ => Axis::Z,
    }
}

/// Every grid index maps to an offset that maps back to the same index.
#[kani::proof]
fn verify_axis_mapping_round_trip() {
    let axis = any_axis();
    let index: usize = kani::any();
    kani::assume(index < SIDE);
    assert_eq!(axis.index_of(axis.offset_of(index)), Some(index));
}

/// Offsets off the lattice never map to an index.
#[kani::proof]
fn verify_off_lattice_rejected() {
    let axis = any_axis();
    let offset: i32 = kani::any();
    kani::assume(offset != -24 && offset != 0 && offset != 24);
    assert_eq!(axis.index_of(offset), None);
}

/// A single placement never completes a line.
#[kani::proof]
#[kani::unwind(30)]
fn verify_single_marker_never_wins() {
    let index: usize = kani::any();
    kani::assume(index < SIDE * SIDE * SIDE);
    let mut grid = Grid::new();
    if let Some(coord) = Coord::from_index(index) {
        grid.set(coord, Cell::Occupied(Marker::Circle));
    }
    assert!(check_win_conditions(&grid).is_empty());
    assert!(lines().all(|line| line.owner(&grid).is_none()));
}
