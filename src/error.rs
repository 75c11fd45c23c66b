//! Error type for circuit construction and I/O.

use std::fmt;
use std::io;

use crate::types::GateId;

/// Error type for circuit construction, validation, and I/O.
///
/// Every variant is produced while a circuit is being parsed or built.
/// Once a [`Circuit`](crate::circuit::Circuit) exists, depth analysis,
/// evaluation, and tabulation cannot fail.
#[derive(Debug)]
pub enum CircuitError {
    /// File I/O error.
    Io(io::Error),
    /// Malformed circuit description: token count/type mismatch, wrong
    /// table length, or a predecessor id outside [1, N].
    Malformed(String),
    /// A gate lists a predecessor whose id is not strictly below its own.
    /// This covers self-references, forward references, and cycles, all of
    /// which would leave the predecessor's value undefined during the
    /// ascending evaluation pass.
    OrderViolation { gate: GateId, pred: GateId },
    /// The circuit exceeds a construction cap and its truth table could
    /// not be materialized.
    TooLarge(String),
}

impl From<io::Error> for CircuitError {
    fn from(e: io::Error) -> Self {
        CircuitError::Io(e)
    }
}

impl fmt::Display for CircuitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CircuitError::Io(e) => write!(f, "I/O error: {}", e),
            CircuitError::Malformed(msg) => write!(f, "Malformed circuit: {}", msg),
            CircuitError::OrderViolation { gate, pred } => {
                write!(f, "Gate {} lists predecessor {} with an id not below its own", gate, pred)
            }
            CircuitError::TooLarge(msg) => write!(f, "Circuit too large: {}", msg),
        }
    }
}

impl std::error::Error for CircuitError {}
