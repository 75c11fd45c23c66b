//! Logical depth of gates.
//!
//! The depth of a leaf is 0; the depth of any other gate is one more than
//! its deepest predecessor. The circuit's reported depth is the depth of
//! the output gate, i.e. the length of the longest leaf-to-output chain.

use log::debug;

use crate::circuit::Circuit;

impl Circuit {
    /// Computes the depth of every gate in one ascending pass.
    ///
    /// The returned table is indexed by gate id (slot 0 is unused).
    pub fn depths(&self) -> Vec<u32> {
        let mut depth = vec![0u32; self.num_gates() + 1];
        for id in self.ids() {
            let gate = self.gate(id);
            if gate.is_leaf() {
                continue;
            }
            // Predecessor ids are strictly below `id`, so their depths are final.
            let deepest = gate.predecessors().iter().map(|&p| depth[p.index()]).max().unwrap();
            depth[id.index()] = deepest + 1;
        }
        debug!("depths: output {} at depth {}", self.output(), depth[self.output().index()]);
        depth
    }

    /// The depth of the output gate.
    pub fn depth(&self) -> u32 {
        self.depths()[self.output().index()]
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use crate::circuit::CircuitBuilder;
    use crate::gate::Gate;

    #[test]
    fn test_leaf_depth_is_zero() {
        let mut builder = CircuitBuilder::new();
        builder.add_leaf();
        let circuit = builder.build().unwrap();
        assert_eq!(circuit.depth(), 0);
    }

    #[test]
    fn test_single_gate_depth() {
        let mut builder = CircuitBuilder::new();
        let a = builder.add_leaf();
        let b = builder.add_leaf();
        builder.add_gate(Gate::and(a, b)).unwrap();
        let circuit = builder.build().unwrap();
        assert_eq!(circuit.depth(), 1);
    }

    #[test]
    fn test_xor_tree_depth() {
        let mut builder = CircuitBuilder::new();
        let a = builder.add_leaf();
        let b = builder.add_leaf();
        let c = builder.add_leaf();
        let ab = builder.add_gate(Gate::xor(a, b)).unwrap();
        builder.add_gate(Gate::xor(ab, c)).unwrap();
        let circuit = builder.build().unwrap();
        assert_eq!(circuit.depth(), 2);
    }

    #[test]
    fn test_not_chain_depth() {
        let mut builder = CircuitBuilder::new();
        let mut last = builder.add_leaf();
        for _ in 0..5 {
            last = builder.add_gate(Gate::not(last)).unwrap();
        }
        let circuit = builder.build().unwrap();
        assert_eq!(circuit.depth(), 5);
    }

    #[test]
    fn test_depth_takes_longest_chain() {
        let mut builder = CircuitBuilder::new();
        let a = builder.add_leaf();
        let b = builder.add_leaf();
        let g1 = builder.add_gate(Gate::and(a, b)).unwrap();
        let g2 = builder.add_gate(Gate::not(g1)).unwrap();
        // One predecessor at depth 2, one at depth 0.
        builder.add_gate(Gate::or(g2, a)).unwrap();
        let circuit = builder.build().unwrap();
        assert_eq!(circuit.depth(), 3);
    }

    #[test]
    fn test_depths_table_recurrence() {
        let mut builder = CircuitBuilder::new();
        let a = builder.add_leaf();
        let b = builder.add_leaf();
        let c = builder.add_leaf();
        let g1 = builder.add_gate(Gate::or(a, b)).unwrap();
        let g2 = builder.add_gate(Gate::xor(g1, c)).unwrap();
        builder.add_gate(Gate::nand(g1, g2)).unwrap();
        let circuit = builder.build().unwrap();

        let depths = circuit.depths();
        for id in circuit.ids() {
            let gate = circuit.gate(id);
            let expected = if gate.is_leaf() {
                0
            } else {
                1 + gate.predecessors().iter().map(|&p| depths[p.index()]).max().unwrap()
            };
            assert_eq!(depths[id.index()], expected, "depth mismatch at {}", id);
        }
        assert_eq!(depths[circuit.output().index()], 3);
    }
}
