//! Error types for diagram construction and simulation.

use thiserror::Error;

/// Result type for diagram operations.
pub type SimResult<T> = Result<T, SimError>;

/// Errors that can occur building or running a diagram.
///
/// Wiring problems are reported at construction, not discovered
/// mid-simulation, so callers can tell bad wiring apart from bad numeric
/// parameters.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    /// A consumer references a signal no input, sum, or block produces.
    #[error("Unknown signal '{signal}' referenced by {referenced_by}")]
    UnknownSignal {
        signal: String,
        referenced_by: String,
    },

    /// Two producers (inputs, sums, or block outputs) write the same signal.
    #[error("Signal '{signal}' has more than one producer")]
    DuplicateProducer { signal: String },

    /// A sum operand string is not of the form `"+name"` or `"-name"`.
    #[error("Malformed sum operand '{operand}': expected \"+name\" or \"-name\"")]
    MalformedOperand { operand: String },

    /// Invalid argument provided to a simulation function.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
