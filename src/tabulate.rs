//! Full truth-table construction.
//!
//! Tabulation drives the assignment enumerator through the evaluator and
//! collects one output bit per mask, preserving mask order.

use std::fmt;

use log::debug;

use crate::circuit::Circuit;
use crate::eval::Evaluator;

/// The output column of a circuit's truth table: one bit per leaf
/// assignment, in ascending mask order.
///
/// `Display` renders the conventional `2^k`-character '0'/'1' string.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TruthTable {
    bits: Vec<bool>,
    num_leaves: usize,
}

impl TruthTable {
    /// Number of rows, always exactly `2^k`.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn num_leaves(&self) -> usize {
        self.num_leaves
    }

    /// The output bit for `mask`.
    ///
    /// # Panics
    ///
    /// Panics if `mask >= 2^k`.
    pub fn bit(&self, mask: u64) -> bool {
        self.bits[mask as usize]
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Number of assignments on which the output is 1.
    pub fn ones(&self) -> u64 {
        self.bits.iter().filter(|&&b| b).count() as u64
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            write!(f, "{}", bit as u8)?;
        }
        Ok(())
    }
}

impl Circuit {
    /// Tabulates the output gate over every leaf assignment.
    ///
    /// Runs the evaluator once per mask, `2^k` times in total. The caps
    /// enforced at construction keep the result materializable, so
    /// tabulation itself cannot fail.
    pub fn tabulate(&self) -> TruthTable {
        let mut evaluator = Evaluator::new(self);
        let assignments = self.assignments();
        let mut bits = Vec::with_capacity(assignments.len());
        for assignment in assignments {
            bits.push(evaluator.eval(assignment));
        }
        let table = TruthTable { bits, num_leaves: self.num_leaves() };
        debug!("tabulate: {} rows, {} ones", table.len(), table.ones());
        table
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use crate::circuit::CircuitBuilder;
    use crate::gate::Gate;

    #[test]
    fn test_identity_table() {
        let mut builder = CircuitBuilder::new();
        let a = builder.add_leaf();
        builder.add_gate(Gate::buf(a)).unwrap();
        let circuit = builder.build().unwrap();
        assert_eq!(circuit.tabulate().to_string(), "01");
    }

    #[test]
    fn test_leaf_as_output_table() {
        let mut builder = CircuitBuilder::new();
        builder.add_leaf();
        let circuit = builder.build().unwrap();
        assert_eq!(circuit.tabulate().to_string(), "01");
    }

    #[test]
    fn test_and_table() {
        let mut builder = CircuitBuilder::new();
        let a = builder.add_leaf();
        let b = builder.add_leaf();
        builder.add_gate(Gate::and(a, b)).unwrap();
        let circuit = builder.build().unwrap();

        let table = circuit.tabulate();
        assert_eq!(table.to_string(), "0001");
        assert_eq!(table.ones(), 1);
        assert!(!table.bit(0b10));
        assert!(table.bit(0b11));
    }

    #[test]
    fn test_or_table() {
        let mut builder = CircuitBuilder::new();
        let a = builder.add_leaf();
        let b = builder.add_leaf();
        builder.add_gate(Gate::or(a, b)).unwrap();
        let circuit = builder.build().unwrap();
        assert_eq!(circuit.tabulate().to_string(), "0111");
    }

    #[test]
    fn test_xor_tree_parity_table() {
        let mut builder = CircuitBuilder::new();
        let a = builder.add_leaf();
        let b = builder.add_leaf();
        let c = builder.add_leaf();
        let ab = builder.add_gate(Gate::xor(a, b)).unwrap();
        builder.add_gate(Gate::xor(ab, c)).unwrap();
        let circuit = builder.build().unwrap();

        let table = circuit.tabulate();
        assert_eq!(table.to_string(), "01101001");
        assert_eq!(table.ones(), 4);
    }

    #[test]
    fn test_table_len_is_two_to_the_k() {
        for k in 1..=6 {
            let mut builder = CircuitBuilder::new();
            let leaves: Vec<_> = (0..k).map(|_| builder.add_leaf()).collect();
            builder.add_gate(Gate::or_n(&leaves)).unwrap();
            let circuit = builder.build().unwrap();
            assert_eq!(circuit.tabulate().len(), 1 << k);
        }
    }

    #[test]
    fn test_tabulate_is_deterministic() {
        let mut builder = CircuitBuilder::new();
        let a = builder.add_leaf();
        let b = builder.add_leaf();
        let g = builder.add_gate(Gate::nor(a, b)).unwrap();
        builder.add_gate(Gate::xnor(g, a)).unwrap();
        let circuit = builder.build().unwrap();

        assert_eq!(circuit.tabulate(), circuit.tabulate());
    }
}
