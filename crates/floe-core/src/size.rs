//! The [`GridSize`] bounds descriptor.

use crate::Coord;
use std::fmt;

/// Extent of a node grid along its three axes.
///
/// A coordinate `c` addresses a node iff `c.x < width && c.y < height &&
/// c.z < depth` — see [`contains`](GridSize::contains).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridSize {
    /// Extent along the x axis.
    pub width: u32,
    /// Extent along the y axis.
    pub height: u32,
    /// Extent along the z axis.
    pub depth: u32,
}

impl GridSize {
    /// Create a size from its three extents.
    pub const fn new(width: u32, height: u32, depth: u32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Whether a coordinate addresses a node inside these bounds.
    pub fn contains(&self, coord: &Coord) -> bool {
        coord.x < self.width && coord.y < self.height && coord.z < self.depth
    }

    /// Total number of nodes in a grid of this size.
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize) * (self.depth as usize)
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {} x {}", self.width, self.height, self.depth)
    }
}
