//! Type-safe wrapper for gate identifiers.
//!
//! This module provides a newtype wrapper that enforces compile-time
//! distinction between gate ids and ordinary integers (mask values, leaf
//! ordinals, table indices), preventing common mix-ups in circuit code.

use std::fmt;

/// A gate identifier (1-indexed).
///
/// Gates are numbered 1..=N in the order they are added to the circuit.
/// The gate with the highest id is the output gate.
///
/// # Invariants
///
/// - Gate ids must be >= 1 (0 is reserved for internal use)
/// - Within a circuit, every predecessor id is strictly below the
///   referencing gate's own id
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct GateId(u32);

impl GateId {
    /// Creates a new gate id.
    ///
    /// # Panics
    ///
    /// Panics if `id == 0`. Gate ids must be 1-indexed.
    pub fn new(id: u32) -> Self {
        assert_ne!(id, 0, "Gate ids must be >= 1");
        GateId(id)
    }

    /// Returns the raw gate id as a `u32`.
    pub fn id(self) -> u32 {
        self.0
    }

    /// Returns the id widened to `usize`, for direct storage indexing.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for GateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "g{}", self.0)
    }
}

impl From<GateId> for u32 {
    fn from(id: GateId) -> Self {
        id.0
    }
}

impl From<GateId> for usize {
    fn from(id: GateId) -> Self {
        id.index()
    }
}
