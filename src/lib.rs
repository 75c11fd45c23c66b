//! # lutnet-rs: Table-Driven Boolean Circuits in Rust
//!
//! **`lutnet-rs`** is a small, safe library for evaluating **combinational boolean circuits**
//! whose gates are explicit lookup tables. It computes the logical depth of a circuit and
//! tabulates its complete output truth table over all input assignments.
//!
//! ## What is a table-driven circuit?
//!
//! A circuit is a directed acyclic graph of gates. A gate is either a **leaf** (a primary
//! input) or a function of its predecessor gates given by a dense truth table with one entry
//! per combination of predecessor values. Because every gate's function is an explicit table,
//! the model covers arbitrary fan-in and arbitrary boolean functions, not just the named
//! connectives.
//!
//! ## Key Features
//!
//! - **Validated Construction**: Circuits are immutable once built. The builder and the
//!   parser reject malformed tables, dangling references, and ordering violations up front,
//!   so depth analysis, evaluation, and tabulation can never fail.
//! - **1-Based Indexing**: Gates are 1-indexed (reserving 0 for internal use) and every
//!   predecessor id is strictly below the gate that lists it, so one ascending pass
//!   evaluates the whole circuit.
//! - **Lazy Enumeration**: Input assignments are enumerated as an exact-size iterator over
//!   ascending bitmasks; nothing is materialized until you tabulate.
//! - **Reusable Evaluation Buffer**: The [`Evaluator`][crate::eval::Evaluator] owns one
//!   per-gate value buffer and reuses it across all `2^k` assignments.
//! - **Plain Text + Graphviz**: Circuits parse from and render to a whitespace token format,
//!   and export to DOT for visualization.
//!
//! ## Quick Start
//!
//! Add `lutnet-rs` to your `Cargo.toml` and start building circuits:
//!
//! ```toml
//! [dependencies]
//! lutnet-rs = "0.1"
//! ```
//!
//! ## Basic Usage
//!
//! ```rust
//! use lutnet_rs::circuit::{Circuit, CircuitBuilder};
//! use lutnet_rs::gate::Gate;
//!
//! // 1. Build a circuit: three inputs feeding a tree of XOR gates
//! let mut builder = CircuitBuilder::new();
//! let a = builder.add_leaf();
//! let b = builder.add_leaf();
//! let c = builder.add_leaf();
//! let ab = builder.add_gate(Gate::xor(a, b)).unwrap();
//! builder.add_gate(Gate::xor(ab, c)).unwrap();
//! let circuit = builder.build().unwrap();
//!
//! // 2. The longest input-to-output chain
//! assert_eq!(circuit.depth(), 2);
//!
//! // 3. The full output truth table, one bit per assignment mask
//! let table = circuit.tabulate();
//! assert_eq!(table.to_string(), "01101001");
//! assert_eq!(table.ones(), 4);
//!
//! // 4. The same circuit, parsed from its text form
//! let parsed = Circuit::from_circuit_string("5 0 0 0 2 1 2 0 1 1 0 2 4 3 0 1 1 0").unwrap();
//! assert_eq!(parsed.tabulate(), table);
//! ```
//!
//! ## Core Components
//!
//! - **[`circuit`]**: The heart of the library. Contains the [`Circuit`][crate::circuit::Circuit]
//!   model and the validating [`CircuitBuilder`][crate::circuit::CircuitBuilder].
//! - **[`eval`]**: Single-assignment evaluation with a reusable value buffer.
//! - **[`tabulate`]**: Drives the enumerator and the evaluator into a complete truth table.
//! - **[`io`]**: The whitespace token text format (parse and write).
//! - **[`dot`]**: Utilities for visualizing circuits using Graphviz.
//!
//! For the evaluation-order invariant the whole crate rests on, check the [`circuit`] module
//! documentation.

pub mod assignment;
pub mod circuit;
pub mod depth;
pub mod dot;
pub mod error;
pub mod eval;
pub mod gate;
pub mod io;
pub mod tabulate;
pub mod types;
