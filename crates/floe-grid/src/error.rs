//! Error types for grid operations.

use floe_core::{Coord, GridSize};
use std::fmt;

/// Errors arising from grid queries and mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate is outside the bounds of the grid.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// The grid's bounds.
        size: GridSize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoordOutOfBounds { coord, size } => {
                write!(f, "coordinate {coord} out of bounds: {size}")
            }
        }
    }
}

impl std::error::Error for GridError {}
