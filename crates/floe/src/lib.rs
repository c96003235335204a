//! Floe: embedded scripting for 3D simulation node grids.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Floe sub-crates. For most users, adding `floe` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use floe::prelude::*;
//!
//! let engine = ScriptEngine::new();
//! let mut layout = NodeLayout::new(GridSize::new(4, 4, 4), NodeType::default());
//!
//! // Structural writes apply to the grid immediately; physical-field
//! // writes are collected into the returned accumulator.
//! let mods = engine
//!     .modify_node_layout(
//!         &mut layout,
//!         "setNodes(coordinates(1, 1, 1), { baseType = fluid, rhoPhysical = 0.5 })",
//!     )
//!     .unwrap();
//!
//! let node = layout.node_type(&Coord::new(1, 1, 1)).unwrap();
//! assert_eq!(node.base_type(), NodeBaseType::Fluid);
//! assert_eq!(mods.rho_physical.len(), 1);
//! assert_eq!(mods.rho_physical[0].value, 0.5);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `floe-core` | Coordinates, sizes, node types, reporting |
//! | [`grid`] | `floe-grid` | `GridView` contract and `NodeLayout` storage |
//! | [`script`] | `floe-script` | Engine, marshaller, accumulator, errors |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types: coordinates, sizes, node types, reporting.
pub mod types {
    pub use floe_core::*;
}

/// Grid storage and the `GridView` contract.
pub mod grid {
    pub use floe_grid::*;
}

/// The scripting bridge: engine, marshaller, accumulator, errors.
pub mod script {
    pub use floe_script::*;
}

/// The most commonly used items, for glob import.
pub mod prelude {
    pub use floe_core::{
        Coord, GridSize, NodeBaseType, NodeType, PlacementModifier, ReportSink,
    };
    pub use floe_grid::{GridView, NodeLayout};
    pub use floe_script::{ModificationEntry, ModificationRhoU, ScriptEngine, ScriptError};
}
