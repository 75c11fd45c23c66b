use log::trace;

use crate::assignment::Assignment;
use crate::circuit::Circuit;
use crate::types::GateId;

/// Evaluates a circuit one assignment at a time.
///
/// The evaluator owns a value buffer indexed by gate id and overwrites it
/// on every [`eval`](Evaluator::eval) call, so tabulating a circuit costs
/// one buffer allocation in total. The buffer is private; to shard an
/// enumeration across threads, give each thread its own evaluator over
/// the shared circuit.
pub struct Evaluator<'a> {
    circuit: &'a Circuit,
    values: Vec<bool>,
}

impl<'a> Evaluator<'a> {
    pub fn new(circuit: &'a Circuit) -> Self {
        Evaluator { circuit, values: vec![false; circuit.num_gates() + 1] }
    }

    /// Propagates `assignment` through every gate in ascending id order
    /// and returns the output gate's value.
    ///
    /// # Panics
    ///
    /// Panics if the assignment's width differs from the circuit's leaf
    /// count.
    pub fn eval(&mut self, assignment: Assignment) -> bool {
        assert_eq!(
            assignment.num_leaves(),
            self.circuit.num_leaves(),
            "Assignment width must match the leaf count"
        );
        for (j, &leaf) in self.circuit.leaves().iter().enumerate() {
            self.values[leaf.index()] = assignment.leaf(j);
        }
        for id in self.circuit.ids() {
            let gate = self.circuit.gate(id);
            if gate.is_leaf() {
                continue;
            }
            // Predecessor ids are strictly below `id`, so their values are
            // already computed; the first predecessor lands in the most
            // significant bit of the table index.
            let mut index = 0usize;
            for &p in gate.predecessors() {
                index = (index << 1) | self.values[p.index()] as usize;
            }
            self.values[id.index()] = gate.table()[index];
        }
        let out = self.values[self.circuit.output().index()];
        trace!("eval({}) = {}", assignment, out as u8);
        out
    }

    /// The value `id` took in the most recent [`eval`](Evaluator::eval)
    /// call (false before the first call).
    pub fn value(&self, id: GateId) -> bool {
        self.values[id.index()]
    }
}

impl Circuit {
    /// Evaluates the circuit under one assignment.
    ///
    /// Allocates a fresh value buffer per call; use an [`Evaluator`] to
    /// reuse the buffer across an enumeration.
    pub fn eval(&self, assignment: Assignment) -> bool {
        Evaluator::new(self).eval(assignment)
    }
}
