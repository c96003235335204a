//! Test utilities and mock types for Floe development.
//!
//! Provides grid fixtures and a collecting [`ReportSink`] implementation
//! for asserting on warning and error lines.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cell::RefCell;
use std::rc::Rc;

use floe_core::{GridSize, NodeType, ReportSink};
use floe_grid::NodeLayout;

/// A layout of the given extents with every node solid and unmodified.
pub fn solid_layout(width: u32, height: u32, depth: u32) -> NodeLayout {
    NodeLayout::new(GridSize::new(width, height, depth), NodeType::default())
}

/// Collecting [`ReportSink`] for tests.
///
/// Clones share the same line buffers, so a test can hand one clone to the
/// engine and keep another for assertions.
#[derive(Clone, Default)]
pub struct CollectingReporter {
    warnings: Rc<RefCell<Vec<String>>>,
    errors: Rc<RefCell<Vec<String>>>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All warning lines emitted so far.
    pub fn warnings(&self) -> Vec<String> {
        self.warnings.borrow().clone()
    }

    /// All error lines emitted so far.
    pub fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }
}

impl ReportSink for CollectingReporter {
    fn warning(&mut self, line: &str) {
        self.warnings.borrow_mut().push(line.to_string());
    }

    fn error(&mut self, line: &str) {
        self.errors.borrow_mut().push(line.to_string());
    }
}
