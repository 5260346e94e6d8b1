//! Error types for block construction.

use thiserror::Error;

/// Result type for block construction.
pub type BlockResult<T> = Result<T, BlockError>;

/// Errors that can occur constructing a block.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BlockError {
    /// Dead time must be zero or positive.
    #[error("Delay must be non-negative, got {value}")]
    NegativeDelay { value: f64 },

    /// Discrete blocks need a positive sampling period.
    #[error("Sample period must be positive, got {value}")]
    NonPositiveSamplePeriod { value: f64 },

    /// The recurrence divides by the most-recent denominator coefficient
    /// every sample, so it must be nonzero.
    #[error("Most-recent denominator coefficient must be nonzero")]
    ZeroLeadingCoefficient,

    /// A coefficient sequence was empty where one is required.
    #[error("Empty coefficient sequence: {what}")]
    EmptyCoefficients { what: &'static str },

    /// A parameter was NaN or infinite.
    #[error("Non-finite value for {what}")]
    NonFinite { what: &'static str },

    /// Underlying transfer-function or realization error.
    #[error(transparent)]
    Lti(#[from] bf_lti::LtiError),
}
