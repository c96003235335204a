//! Dense row-major node storage.

use crate::error::GridError;
use crate::view::GridView;
use floe_core::{Coord, GridSize, NodeType};

/// Dense 3D grid of [`NodeType`] values.
///
/// Storage is row-major: x varies fastest, then y, then z. All nodes start
/// at the fill value passed to [`new`](NodeLayout::new).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeLayout {
    size: GridSize,
    nodes: Vec<NodeType>,
}

impl NodeLayout {
    /// Create a layout of the given size with every node set to `fill`.
    pub fn new(size: GridSize, fill: NodeType) -> Self {
        Self {
            size,
            nodes: vec![fill; size.cell_count()],
        }
    }

    fn index(&self, coord: &Coord) -> Result<usize, GridError> {
        if !self.size.contains(coord) {
            return Err(GridError::CoordOutOfBounds {
                coord: *coord,
                size: self.size,
            });
        }
        let w = self.size.width as usize;
        let h = self.size.height as usize;
        Ok((coord.z as usize * h + coord.y as usize) * w + coord.x as usize)
    }
}

impl GridView for NodeLayout {
    fn node_type(&self, coord: &Coord) -> Result<NodeType, GridError> {
        self.index(coord).map(|i| self.nodes[i])
    }

    fn set_node_type(&mut self, coord: &Coord, node_type: NodeType) -> Result<(), GridError> {
        let i = self.index(coord)?;
        self.nodes[i] = node_type;
        Ok(())
    }

    fn size(&self) -> GridSize {
        self.size
    }
}
