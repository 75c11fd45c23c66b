//! Circuit to DOT (Graphviz) conversion.
//!
//! Renders a circuit as a directed graph that can be visualized with
//! Graphviz tools like `dot` or online viewers.
//!
//! # DOT Format
//!
//! The generated output follows these conventions:
//! - **Leaves** are rendered as boxes on the bottom rank
//! - **Inner gates** are ellipses labelled with their id and table bits
//! - **The output gate** gets a double border
//! - **Edges** run from predecessor to gate; gates of equal depth share a
//!   rank, so the drawing reads bottom-up from inputs to the output

use std::collections::BTreeMap;

use crate::circuit::Circuit;
use crate::types::GateId;

impl Circuit {
    /// Converts the circuit to DOT (Graphviz) format.
    ///
    /// # Examples
    ///
    /// ```
    /// use lutnet_rs::circuit::CircuitBuilder;
    /// use lutnet_rs::gate::Gate;
    ///
    /// let mut builder = CircuitBuilder::new();
    /// let a = builder.add_leaf();
    /// let b = builder.add_leaf();
    /// builder.add_gate(Gate::and(a, b)).unwrap();
    /// let circuit = builder.build().unwrap();
    ///
    /// let dot = circuit.to_dot().unwrap();
    /// println!("{}", dot);
    ///
    /// // To render the graph:
    /// // std::fs::write("circuit.dot", dot).unwrap();
    /// // Then run: dot -Tpng circuit.dot -o circuit.png
    /// ```
    pub fn to_dot(&self) -> Result<String, std::fmt::Error> {
        use std::fmt::Write as _;

        let mut dot = String::new();
        writeln!(dot, "digraph circuit {{")?;
        writeln!(dot, "rankdir=BT;")?;
        writeln!(dot, "node [shape=ellipse];")?;

        // Group gates by depth so equal-depth gates share a rank.
        let depths = self.depths();
        let mut ranks = BTreeMap::<u32, Vec<GateId>>::new();
        for id in self.ids() {
            ranks.entry(depths[id.index()]).or_default().push(id);
        }

        for ids in ranks.values() {
            writeln!(dot, "{{ rank=same")?;
            for &id in ids {
                let gate = self.gate(id);
                if gate.is_leaf() {
                    writeln!(dot, "{} [shape=box, label=\"{}\"];", id.id(), id)?;
                } else {
                    let bits: String =
                        gate.table().iter().map(|&b| if b { '1' } else { '0' }).collect();
                    writeln!(dot, "{} [label=\"{}\\n{}\"];", id.id(), id, bits)?;
                }
            }
            writeln!(dot, "}}")?;
        }

        writeln!(dot, "{} [peripheries=2];", self.output().id())?;

        for id in self.ids() {
            for &p in self.gate(id).predecessors() {
                writeln!(dot, "{} -> {};", p.id(), id.id())?;
            }
        }

        writeln!(dot, "}}")?;
        Ok(dot)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use crate::circuit::CircuitBuilder;
    use crate::gate::Gate;

    #[test]
    fn test_dot_structure() {
        let mut builder = CircuitBuilder::new();
        let a = builder.add_leaf();
        let b = builder.add_leaf();
        builder.add_gate(Gate::and(a, b)).unwrap();
        let circuit = builder.build().unwrap();

        let dot = circuit.to_dot().unwrap();
        assert!(dot.starts_with("digraph circuit {"));
        assert!(dot.contains("1 [shape=box, label=\"g1\"];"));
        assert!(dot.contains("3 [label=\"g3\\n0001\"];"));
        assert!(dot.contains("1 -> 3;"));
        assert!(dot.contains("2 -> 3;"));
        assert!(dot.contains("3 [peripheries=2];"));
        assert!(dot.trim_end().ends_with('}'));
    }

    #[test]
    fn test_dot_ranks_follow_depth() {
        let mut builder = CircuitBuilder::new();
        let a = builder.add_leaf();
        let g1 = builder.add_gate(Gate::not(a)).unwrap();
        builder.add_gate(Gate::not(g1)).unwrap();
        let circuit = builder.build().unwrap();

        let dot = circuit.to_dot().unwrap();
        // Three depth levels, three rank groups.
        assert_eq!(dot.matches("rank=same").count(), 3);
    }
}
