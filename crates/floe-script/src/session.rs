//! The bridge session: scoped grid and accumulator bindings.
//!
//! Native functions reach the grid and the accumulator only through a
//! [`Session`], which exists for the duration of a single
//! `modify_node_layout` call. The session borrows its targets, never owns
//! them. A process-wide lock keeps at most one session in flight, since
//! the script globals a session installs are not scoped per engine
//! instance.

use crate::modifications::ModificationRhoU;
use floe_core::ReportSink;
use floe_grid::GridView;
use std::cell::RefCell;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Bindings visible to native functions during one script run.
///
/// `'a` is the lifetime of the borrows the session holds (the body of one
/// `modify_node_layout` call); `'g` is the lifetime of the grid reference
/// the caller lent in, which outlives `'a`. Keeping them distinct lets the
/// locally-created `RefCell`s be borrowed for the shorter `'a` while the
/// grid reference inside still carries the caller's `'g`.
#[derive(Clone, Copy)]
pub(crate) struct Session<'a, 'g> {
    /// The grid under modification.
    pub(crate) grid: &'a RefCell<&'g mut dyn GridView>,
    /// The accumulator collecting deferred changes.
    pub(crate) mods: &'a RefCell<ModificationRhoU>,
    /// Sink for warning and error lines.
    pub(crate) reporter: &'a RefCell<Box<dyn ReportSink>>,
}

static SESSION_LOCK: Mutex<()> = Mutex::new(());

/// Holds the process-wide session lock for the duration of one
/// `modify_node_layout` call.
///
/// A second caller blocks until the first session ends. Poisoning is
/// absorbed: the guard protects no data, only mutual exclusion.
pub(crate) struct SessionGuard {
    _lock: MutexGuard<'static, ()>,
}

impl SessionGuard {
    pub(crate) fn acquire() -> Self {
        let lock = SESSION_LOCK
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Self { _lock: lock }
    }
}
