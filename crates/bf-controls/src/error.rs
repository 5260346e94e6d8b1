//! Error types for controller construction and tuning.

use thiserror::Error;

/// Result type for controller operations.
pub type ControlResult<T> = Result<T, ControlError>;

/// Errors that can occur constructing or tuning a controller.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ControlError {
    /// Invalid argument provided to a controller function.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Underlying transfer-function or realization error.
    #[error(transparent)]
    Lti(#[from] bf_lti::LtiError),
}
