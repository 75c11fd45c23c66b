//! Reading and writing circuits in the token text format.
//!
//! # Circuit File Format
//!
//! ```text
//! N                                  # gate count
//! 0                                  # a gate with m = 0 is a leaf
//! m p_1 .. p_m  t_0 .. t_{2^m - 1}   # fan-in, predecessors, table
//! ```
//!
//! Gates appear in id order 1..=N and gate N is the output gate. A
//! non-leaf record lists the fan-in `m`, the `m` predecessor ids, then
//! the `2^m` table entries (each 0 or 1), indexed with the first
//! predecessor as the most significant bit. The format is a plain token
//! stream: any whitespace separates tokens and line breaks carry no
//! meaning.

use std::fmt::Write;
use std::fs;
use std::path::Path;
use std::str::SplitWhitespace;

use crate::circuit::{Circuit, CircuitBuilder, MAX_FAN_IN};
use crate::error::CircuitError;
use crate::gate::Gate;
use crate::types::GateId;

fn next_token<'a>(tokens: &mut SplitWhitespace<'a>, what: &str) -> Result<&'a str, CircuitError> {
    tokens
        .next()
        .ok_or_else(|| CircuitError::Malformed(format!("Unexpected end of input, expected {}", what)))
}

fn next_number(tokens: &mut SplitWhitespace<'_>, what: &str) -> Result<u64, CircuitError> {
    let token = next_token(tokens, what)?;
    token
        .parse()
        .map_err(|_| CircuitError::Malformed(format!("Invalid {}: '{}'", what, token)))
}

impl Circuit {
    /// Reads a circuit from a file in the token text format.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CircuitError> {
        let content = fs::read_to_string(path)?;
        Self::from_circuit_string(&content)
    }

    /// Parses a circuit from the token text format.
    ///
    /// All validation happens here: malformed tokens, wrong table
    /// lengths, out-of-range predecessors, ordering violations, and the
    /// construction caps are reported before any evaluation can begin.
    pub fn from_circuit_string(content: &str) -> Result<Self, CircuitError> {
        let mut tokens = content.split_whitespace();

        let n = next_number(&mut tokens, "gate count")?;
        if n > u32::MAX as u64 {
            return Err(CircuitError::TooLarge(format!("{} gates, ids are 32-bit", n)));
        }

        let mut builder = CircuitBuilder::new();
        for i in 1..=n {
            let m = next_number(&mut tokens, &format!("fan-in of gate {}", i))?;
            if m == 0 {
                builder.add_leaf();
                continue;
            }
            if m > MAX_FAN_IN as u64 {
                return Err(CircuitError::TooLarge(format!(
                    "gate {} has fan-in {}, the maximum is {}",
                    i, m, MAX_FAN_IN
                )));
            }
            let m = m as usize;

            let mut predecessors = Vec::with_capacity(m);
            for _ in 0..m {
                let p = next_number(&mut tokens, &format!("predecessor of gate {}", i))?;
                if p == 0 || p > n {
                    return Err(CircuitError::Malformed(format!(
                        "Gate {}: predecessor {} is outside 1..={}",
                        i, p, n
                    )));
                }
                predecessors.push(GateId::new(p as u32));
            }

            let mut table = Vec::with_capacity(1 << m);
            for row in 0..(1usize << m) {
                let token = next_token(&mut tokens, &format!("table entry {} of gate {}", row, i))?;
                match token {
                    "0" => table.push(false),
                    "1" => table.push(true),
                    _ => {
                        return Err(CircuitError::Malformed(format!(
                            "Gate {}: table entry must be 0 or 1, got '{}'",
                            i, token
                        )))
                    }
                }
            }

            builder.add_gate(Gate::new(predecessors, table))?;
        }

        if let Some(extra) = tokens.next() {
            return Err(CircuitError::Malformed(format!(
                "Trailing input after gate {}: '{}'",
                n, extra
            )));
        }

        builder.build()
    }

    /// Saves the circuit to a file in the token text format.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), CircuitError> {
        fs::write(path, self.to_circuit_string())?;
        Ok(())
    }

    /// Renders the circuit in the token text format, one gate per line.
    pub fn to_circuit_string(&self) -> String {
        let mut output = String::new();
        writeln!(output, "{}", self.num_gates()).unwrap();
        for id in self.ids() {
            let gate = self.gate(id);
            write!(output, "{}", gate.fan_in()).unwrap();
            for &p in gate.predecessors() {
                write!(output, " {}", p.id()).unwrap();
            }
            for &bit in gate.table() {
                write!(output, " {}", bit as u8).unwrap();
            }
            writeln!(output).unwrap();
        }
        output
    }
}
