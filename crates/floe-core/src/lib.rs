//! Core types and traits for the Floe scripting bridge.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! grid coordinate and size value types, the node type taxonomy (base type
//! plus placement modifier), and the [`ReportSink`] trait the bridge uses
//! for warning and error lines.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod node;
pub mod report;
pub mod size;

pub use coord::Coord;
pub use node::{NodeBaseType, NodeType, PlacementModifier};
pub use report::{ReportSink, StderrReporter};
pub use size::GridSize;
