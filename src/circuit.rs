use std::collections::{HashSet, VecDeque};
use std::fmt::{self, Debug};

use log::debug;

use crate::error::CircuitError;
use crate::gate::Gate;
use crate::types::GateId;

/// Maximum number of leaves (primary inputs) a circuit may have.
///
/// The output truth table holds one entry per leaf assignment, `2^k` in
/// total, so the cap keeps the enumeration space materializable.
pub const MAX_LEAVES: usize = 30;

/// Maximum fan-in of a single gate. A gate with `m` predecessors carries
/// `2^m` table entries.
pub const MAX_FAN_IN: usize = 20;

/// An immutable combinational circuit.
///
/// Gates are stored densely and indexed by [`GateId`] (1-based, slot 0 is
/// reserved). Every predecessor id is strictly below the id of the gate
/// listing it, so a single ascending pass visits each gate after all of
/// its predecessors. The gate with the highest id is the output gate.
///
/// Circuits are created through [`CircuitBuilder`] or parsed from the text
/// format (see [`crate::io`]); once built they never change.
pub struct Circuit {
    gates: Vec<Gate>,
    leaves: Vec<GateId>,
}

impl Debug for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Circuit")
            .field("num_gates", &self.num_gates())
            .field("num_leaves", &self.num_leaves())
            .finish()
    }
}

impl Circuit {
    pub fn num_gates(&self) -> usize {
        self.gates.len() - 1
    }

    pub fn num_leaves(&self) -> usize {
        self.leaves.len()
    }

    /// The gate stored under `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a gate of this circuit.
    pub fn gate(&self, id: GateId) -> &Gate {
        &self.gates[id.index()]
    }

    /// Leaf ids in ascending discovery order. Leaf `j` of an
    /// [`Assignment`](crate::assignment::Assignment) refers to position
    /// `j` in this list.
    pub fn leaves(&self) -> &[GateId] {
        &self.leaves
    }

    /// The output gate (the gate with the highest id).
    pub fn output(&self) -> GateId {
        GateId::new(self.num_gates() as u32)
    }

    /// All gate ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = GateId> {
        (1..=self.num_gates() as u32).map(GateId::new)
    }

    /// The set of gates `root` transitively depends on, including itself.
    ///
    /// Gates outside the output cone are legal; they are evaluated but do
    /// not influence the output.
    pub fn cone(&self, root: GateId) -> HashSet<GateId> {
        let mut visited = HashSet::new();
        let mut queue = VecDeque::from([root]);

        while let Some(id) = queue.pop_front() {
            if visited.insert(id) {
                for &p in self.gate(id).predecessors() {
                    queue.push_back(p);
                }
            }
        }

        visited
    }
}

/// Builds a [`Circuit`] gate by gate, validating the ordering invariant
/// and the construction caps as it goes.
///
/// Ids are assigned sequentially from 1 in insertion order, so the output
/// gate is simply the last gate added.
#[derive(Debug)]
pub struct CircuitBuilder {
    gates: Vec<Gate>,
    leaves: Vec<GateId>,
}

impl Default for CircuitBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CircuitBuilder {
    pub fn new() -> Self {
        // Slot 0 is reserved so gate ids index the storage directly.
        CircuitBuilder { gates: vec![Gate::leaf()], leaves: Vec::new() }
    }

    fn next_id(&self) -> GateId {
        GateId::new(self.gates.len() as u32)
    }

    /// Adds a leaf (primary input) and returns its id.
    pub fn add_leaf(&mut self) -> GateId {
        let id = self.next_id();
        self.gates.push(Gate::leaf());
        self.leaves.push(id);
        debug!("add_leaf() -> {}", id);
        id
    }

    /// Adds a non-leaf gate and returns its id.
    ///
    /// Fails with [`CircuitError::OrderViolation`] if any predecessor id
    /// is not strictly below the new gate's id (self-reference, forward
    /// reference, or cycle), and with [`CircuitError::TooLarge`] if the
    /// fan-in exceeds [`MAX_FAN_IN`].
    ///
    /// # Panics
    ///
    /// Panics if `gate` is a leaf. Use [`CircuitBuilder::add_leaf`].
    pub fn add_gate(&mut self, gate: Gate) -> Result<GateId, CircuitError> {
        assert!(!gate.is_leaf(), "Use add_leaf() for leaves");
        let id = self.next_id();
        if gate.fan_in() > MAX_FAN_IN {
            return Err(CircuitError::TooLarge(format!(
                "gate {} has fan-in {}, the maximum is {}",
                id,
                gate.fan_in(),
                MAX_FAN_IN
            )));
        }
        for &p in gate.predecessors() {
            if p >= id {
                return Err(CircuitError::OrderViolation { gate: id, pred: p });
            }
        }
        debug!("add_gate(m = {}) -> {}", gate.fan_in(), id);
        self.gates.push(gate);
        Ok(id)
    }

    /// Finalizes the circuit.
    ///
    /// Fails if no gates were added or if the leaf count exceeds
    /// [`MAX_LEAVES`].
    pub fn build(self) -> Result<Circuit, CircuitError> {
        if self.gates.len() == 1 {
            return Err(CircuitError::Malformed("circuit has no gates".into()));
        }
        if self.leaves.len() > MAX_LEAVES {
            return Err(CircuitError::TooLarge(format!(
                "{} leaves, the maximum is {}",
                self.leaves.len(),
                MAX_LEAVES
            )));
        }
        let circuit = Circuit { gates: self.gates, leaves: self.leaves };
        debug!("built {:?}", circuit);
        Ok(circuit)
    }
}
