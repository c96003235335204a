//! Node grid storage for the Floe scripting bridge.
//!
//! This crate defines the [`GridView`] trait — the narrow read/write
//! contract through which scripts inspect and mutate the grid — along with
//! [`NodeLayout`], the dense row-major backend.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod layout;
pub mod view;

pub use error::GridError;
pub use layout::NodeLayout;
pub use view::GridView;
