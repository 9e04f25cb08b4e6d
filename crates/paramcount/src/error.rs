//! Error types for parameter counting.

use thiserror::Error;

/// Errors that can occur while validating hyperparameters, counting
/// parameters, or formatting counts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParamCountError {
    /// A hyperparameter is missing, non-positive, or inconsistent with
    /// the rest of the record
    #[error("invalid hyperparameter `{field}`: {reason}")]
    InvalidHyperparameter { field: &'static str, reason: String },

    /// A component product exceeded the 64-bit count range
    #[error("parameter count overflow while computing {component}")]
    CountOverflow { component: &'static str },

    /// The formatter was called with a negative or non-finite value
    #[error("cannot format parameter count {value}: must be a non-negative finite number")]
    FormatDomain { value: f64 },
}

impl ParamCountError {
    /// Create an `InvalidHyperparameter` error
    pub fn invalid_hyperparameter(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidHyperparameter {
            field,
            reason: reason.into(),
        }
    }
}

/// Result type for parameter counting operations
pub type Result<T> = std::result::Result<T, ParamCountError>;
