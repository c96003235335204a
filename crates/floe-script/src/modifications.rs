//! The per-run accumulator of deferred physical-field changes.

use floe_core::Coord;

/// One deferred change: a coordinate and the value requested for it.
#[derive(Clone, Debug, PartialEq)]
pub struct ModificationEntry<T> {
    /// Grid coordinate the change targets.
    pub coordinate: Coord,
    /// Requested value.
    pub value: T,
}

/// Ordered record of deferred density and velocity changes collected
/// during one script run.
///
/// Physical-field values belong to a storage the bridge has no write
/// access to; scripts request changes and the accumulator is the hand-off
/// contract to the subsystem that applies them. Entries appear in script
/// call order. Duplicate coordinates are kept as separate entries — the
/// consuming subsystem decides precedence. The accumulator owns no
/// reference back to the grid or the script runtime.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModificationRhoU {
    /// Deferred density values.
    pub rho_physical: Vec<ModificationEntry<f64>>,
    /// Deferred boundary density values.
    pub rho_boundary_physical: Vec<ModificationEntry<f64>>,
    /// Deferred velocity vectors.
    pub u_physical: Vec<ModificationEntry<[f64; 3]>>,
    /// Deferred boundary velocity vectors.
    pub u_boundary_physical: Vec<ModificationEntry<[f64; 3]>>,
}

impl ModificationRhoU {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no changes were recorded.
    pub fn is_empty(&self) -> bool {
        self.rho_physical.is_empty()
            && self.rho_boundary_physical.is_empty()
            && self.u_physical.is_empty()
            && self.u_boundary_physical.is_empty()
    }

    pub(crate) fn add_rho_physical(&mut self, coordinate: Coord, value: f64) {
        self.rho_physical.push(ModificationEntry { coordinate, value });
    }

    pub(crate) fn add_rho_boundary_physical(&mut self, coordinate: Coord, value: f64) {
        self.rho_boundary_physical
            .push(ModificationEntry { coordinate, value });
    }

    pub(crate) fn add_u_physical(&mut self, coordinate: Coord, value: [f64; 3]) {
        self.u_physical.push(ModificationEntry { coordinate, value });
    }

    pub(crate) fn add_u_boundary_physical(&mut self, coordinate: Coord, value: [f64; 3]) {
        self.u_boundary_physical
            .push(ModificationEntry { coordinate, value });
    }
}
