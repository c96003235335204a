//! The [`GridView`] trait: the bridge's read/write contract with the grid.

use crate::error::GridError;
use floe_core::{Coord, GridSize, NodeType};

/// Narrow contract through which the scripting bridge touches the grid.
///
/// Read/write granularity is the whole [`NodeType`] value. Implementations
/// need not support field-level mutation: callers read the current value,
/// replace one field, and write the whole value back.
///
/// # Object Safety
///
/// The bridge session holds a `&mut dyn GridView`, so the trait stays
/// object-safe.
pub trait GridView {
    /// The node type at a coordinate.
    fn node_type(&self, coord: &Coord) -> Result<NodeType, GridError>;

    /// Replace the node type at a coordinate.
    fn set_node_type(&mut self, coord: &Coord, node_type: NodeType) -> Result<(), GridError>;

    /// The grid's bounds.
    fn size(&self) -> GridSize;
}
