//! Host/script bridge for Floe node grids.
//!
//! Embeds a Lua runtime so user scripts can inspect and mutate a 3D node
//! grid. The bridge reconciles the host's typed grid model with the
//! runtime's dynamic values: it publishes a fixed set of native functions
//! into the script namespace with strict arity validation, marshals
//! script values into host types on demand, and collects deferred
//! physical-field changes into an ordered [`ModificationRhoU`] returned
//! to the caller instead of being applied immediately.
//!
//! Structural writes (`setBaseType`, `setPlacementModifier`) hit the grid
//! immediately; physical-field writes (`setRho*`, `setU*`) defer into the
//! accumulator, because that storage belongs to another subsystem.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod engine;
pub mod error;
pub mod marshal;
pub mod modifications;
mod registry;
mod session;
pub mod value;

pub use engine::ScriptEngine;
pub use error::ScriptError;
pub use marshal::FromScript;
pub use modifications::{ModificationEntry, ModificationRhoU};
pub use value::ScriptValue;
