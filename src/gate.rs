use crate::types::GateId;

/// A single gate: a leaf (primary input) or a lookup table over the values
/// of its predecessors.
///
/// Leaves have an empty predecessor list and an empty table. A non-leaf
/// gate with `m` predecessors carries exactly `2^m` table entries, indexed
/// by the number formed from the predecessor values in declared order with
/// the first predecessor as the most significant bit.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Gate {
    predecessors: Vec<GateId>,
    table: Vec<bool>,
}

// Constructors
impl Gate {
    pub fn leaf() -> Gate {
        Gate { predecessors: Vec::new(), table: Vec::new() }
    }

    /// Creates a gate from an explicit predecessor list and truth table.
    ///
    /// # Panics
    ///
    /// Panics if `predecessors` is empty (use [`Gate::leaf`] for inputs)
    /// or if `table.len()` is not exactly `2^m` for `m` predecessors.
    pub fn new(predecessors: Vec<GateId>, table: Vec<bool>) -> Gate {
        let m = predecessors.len();
        assert!(m >= 1, "Non-leaf gates must have at least one predecessor");
        assert!(m < usize::BITS as usize, "Fan-in too large to index a table");
        assert_eq!(table.len(), 1usize << m, "Table length must be exactly 2^m");
        Gate { predecessors, table }
    }

    pub fn buf(a: GateId) -> Gate {
        Gate::new(vec![a], vec![false, true])
    }

    pub fn not(a: GateId) -> Gate {
        Gate::new(vec![a], vec![true, false])
    }

    pub fn and(a: GateId, b: GateId) -> Gate {
        Gate::new(vec![a, b], vec![false, false, false, true])
    }

    pub fn or(a: GateId, b: GateId) -> Gate {
        Gate::new(vec![a, b], vec![false, true, true, true])
    }

    pub fn xor(a: GateId, b: GateId) -> Gate {
        Gate::new(vec![a, b], vec![false, true, true, false])
    }

    pub fn nand(a: GateId, b: GateId) -> Gate {
        Gate::new(vec![a, b], vec![true, true, true, false])
    }

    pub fn nor(a: GateId, b: GateId) -> Gate {
        Gate::new(vec![a, b], vec![true, false, false, false])
    }

    pub fn xnor(a: GateId, b: GateId) -> Gate {
        Gate::new(vec![a, b], vec![true, false, false, true])
    }

    pub fn and_n(predecessors: &[GateId]) -> Gate {
        let m = predecessors.len();
        let table = (0..(1usize << m)).map(|idx| idx == (1 << m) - 1).collect();
        Gate::new(predecessors.to_vec(), table)
    }

    pub fn or_n(predecessors: &[GateId]) -> Gate {
        let m = predecessors.len();
        let table = (0..(1usize << m)).map(|idx| idx != 0).collect();
        Gate::new(predecessors.to_vec(), table)
    }

    pub fn xor_n(predecessors: &[GateId]) -> Gate {
        let m = predecessors.len();
        let table = (0..(1usize << m)).map(|idx: usize| idx.count_ones() % 2 == 1).collect();
        Gate::new(predecessors.to_vec(), table)
    }
}

// Getters
impl Gate {
    pub fn predecessors(&self) -> &[GateId] {
        &self.predecessors
    }

    pub fn table(&self) -> &[bool] {
        &self.table
    }

    pub fn is_leaf(&self) -> bool {
        self.predecessors.is_empty()
    }

    pub fn fan_in(&self) -> usize {
        self.predecessors.len()
    }
}
