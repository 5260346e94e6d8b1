//! Error types for linear-system operations.

use thiserror::Error;

/// Result type for linear-system operations.
pub type LtiResult<T> = Result<T, LtiError>;

/// Errors that can occur constructing or manipulating linear systems.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LtiError {
    /// A coefficient sequence was empty where one is required.
    #[error("Empty coefficient sequence: {what}")]
    EmptyCoefficients { what: &'static str },

    /// The denominator has no nonzero coefficient.
    #[error("Denominator has no nonzero coefficient")]
    ZeroDenominator,

    /// Numerator degree exceeds denominator degree.
    #[error("Improper transfer function: numerator degree {num_degree} > denominator degree {den_degree}")]
    Improper {
        num_degree: usize,
        den_degree: usize,
    },

    /// A parameter that must be strictly positive was not.
    #[error("{what} must be positive, got {value}")]
    NonPositive { what: &'static str, value: f64 },

    /// A coefficient or parameter was NaN or infinite.
    #[error("Non-finite value for {what}")]
    NonFinite { what: &'static str },

    /// Model reduction only supports first and second order targets.
    #[error("Approximation order {requested} is not supported (only 1 and 2 are)")]
    UnsupportedOrder { requested: usize },

    /// Model reduction cannot produce more time constants than the system has.
    #[error("Approximation order {requested} exceeds the {available} available time constants")]
    OrderExceedsSystem { requested: usize, available: usize },

    /// Reduction rules assume stable (positive) denominator time constants.
    #[error("Unstable denominator time constant: {value}")]
    UnstableTimeConstant { value: f64 },
}
