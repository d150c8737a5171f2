//! Spatial offsets and the offset ↔ index mapping.
//!
//! Cells sit on a lattice with spacing [`SPACING`] centred on the origin,
//! so each axis admits exactly the offsets `-24`, `0` and `24`. The X axis
//! runs left to right; Y and Z are inverted so that index 0 is the top row
//! and the front layer.

use super::types::SIDE;
use derive_more::{Display, Error};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Distance between neighbouring cell centres.
pub const SPACING: i32 = 24;

/// One of the three spatial axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Left (-24) to right (24).
    X,
    /// Top (24) to bottom (-24).
    Y,
    /// Front (24) to back (-24).
    Z,
}

impl Axis {
    fn inverted(self) -> bool {
        !matches!(self, Axis::X)
    }

    /// Maps a spatial offset on this axis to a grid index.
    ///
    /// Returns `None` for any offset that is not a lattice point.
    #[instrument]
    pub fn index_of(self, offset: i32) -> Option<usize> {
        if offset % SPACING != 0 || !(-SPACING..=SPACING).contains(&offset) {
            return None;
        }
        let shifted = if self.inverted() {
            SPACING - offset
        } else {
            offset + SPACING
        };
        usize::try_from(shifted / SPACING).ok()
    }

    /// Maps a grid index on this axis to its spatial offset.
    ///
    /// `index` must be below [`SIDE`]; callers pass indices taken from a
    /// [`Coord`](super::Coord).
    pub(crate) fn offset_of(self, index: usize) -> i32 {
        debug_assert!(index < SIDE, "axis index {index} is off the grid");
        let step = index as i32 * SPACING;
        if self.inverted() {
            SPACING - step
        } else {
            step - SPACING
        }
    }
}

/// A point in scene space, as produced by picking or enumeration.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
    derive_new::new,
)]
pub struct Offset {
    /// X component.
    pub x: i32,
    /// Y component.
    pub y: i32,
    /// Z component.
    pub z: i32,
}

impl Offset {
    /// Returns the component along `axis`.
    pub fn along(self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }
}

impl std::fmt::Display for Offset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Error parsing an offset triple.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid offset '{input}': expected three integers like '-24,0,24'")]
pub struct OffsetParseError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for Offset {
    type Err = OffsetParseError;

    /// Parses `x,y,z` or `x y z`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || OffsetParseError {
            input: s.to_string(),
        };
        let parts = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .map(|p| p.parse::<i32>().map_err(|_| err()))
            .collect::<Result<Vec<_>, _>>()?;
        match parts.as_slice() {
            [x, y, z] => Ok(Offset::new(*x, *y, *z)),
            _ => Err(err()),
        }
    }
}
