//! The node type taxonomy: base types, placement modifiers, and [`NodeType`].

use std::fmt;

/// Physical classification of a grid node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NodeBaseType {
    /// Impermeable wall node.
    #[default]
    Solid,
    /// Ordinary fluid node.
    Fluid,
    /// Velocity boundary condition node.
    Velocity,
    /// Zero-velocity boundary condition node.
    Velocity0,
    /// Pressure boundary condition node.
    Pressure,
    /// Second-order bounce-back wall node.
    BounceBack2,
}

impl NodeBaseType {
    /// All base types in declaration order.
    pub const ALL: [NodeBaseType; 6] = [
        NodeBaseType::Solid,
        NodeBaseType::Fluid,
        NodeBaseType::Velocity,
        NodeBaseType::Velocity0,
        NodeBaseType::Pressure,
        NodeBaseType::BounceBack2,
    ];

    /// Script-facing name of this base type.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Fluid => "fluid",
            Self::Velocity => "velocity",
            Self::Velocity0 => "velocity_0",
            Self::Pressure => "pressure",
            Self::BounceBack2 => "bounce_back_2",
        }
    }

    /// Parse a script-facing name. Returns `None` for unrecognized names.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }
}

impl fmt::Display for NodeBaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where on a boundary a node sits, refining its base type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PlacementModifier {
    /// No placement refinement.
    #[default]
    None,
    /// Top face of the domain.
    Top,
    /// Bottom face of the domain.
    Bottom,
    /// North face of the domain.
    North,
    /// South face of the domain.
    South,
    /// East face of the domain.
    East,
    /// West face of the domain.
    West,
}

impl PlacementModifier {
    /// All placement modifiers in declaration order.
    pub const ALL: [PlacementModifier; 7] = [
        PlacementModifier::None,
        PlacementModifier::Top,
        PlacementModifier::Bottom,
        PlacementModifier::North,
        PlacementModifier::South,
        PlacementModifier::East,
        PlacementModifier::West,
    ];

    /// Script-facing name of this placement modifier.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        }
    }

    /// Parse a script-facing name. Returns `None` for unrecognized names.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == name)
    }
}

impl fmt::Display for PlacementModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A node's full type: base type plus placement modifier.
///
/// Read/write granularity is the whole value. Callers replacing one field
/// build a new `NodeType` with [`with_base_type`](NodeType::with_base_type)
/// or [`with_placement_modifier`](NodeType::with_placement_modifier) and
/// write the whole value back; the grid storage never mutates a field in
/// place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NodeType {
    base_type: NodeBaseType,
    placement_modifier: PlacementModifier,
}

impl NodeType {
    /// Create a node type from its two fields.
    pub const fn new(base_type: NodeBaseType, placement_modifier: PlacementModifier) -> Self {
        Self {
            base_type,
            placement_modifier,
        }
    }

    /// The node's base type.
    pub const fn base_type(&self) -> NodeBaseType {
        self.base_type
    }

    /// The node's placement modifier.
    pub const fn placement_modifier(&self) -> PlacementModifier {
        self.placement_modifier
    }

    /// Copy of this node type with the base type replaced.
    pub const fn with_base_type(self, base_type: NodeBaseType) -> Self {
        Self { base_type, ..self }
    }

    /// Copy of this node type with the placement modifier replaced.
    pub const fn with_placement_modifier(self, placement_modifier: PlacementModifier) -> Self {
        Self {
            placement_modifier,
            ..self
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base_type, self.placement_modifier)
    }
}
