//! Custom error types for the common library
//!
//! This module defines the errors raised while validating payloads that
//! cross the frontend/backend boundary.

use thiserror::Error;

/// Error raised when a payload does not match its declared shape
#[derive(Error, Debug)]
pub enum ValidationError {
    /// The JSON document could not be deserialized into the expected type
    #[error("Malformed payload: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A required text field was present but blank
    #[error("The field {0} was empty")]
    EmptyField(&'static str),

    /// A serving range whose lower bound exceeds its upper bound
    #[error("Invalid serving range: {from} is greater than {to}")]
    InvalidServings { from: u16, to: u16 },

    /// An ingredient amount that is negative or not a finite number
    #[error("Invalid amount {0} for ingredient {1}")]
    InvalidAmount(f64, String),
}

/// Type alias for Result with ValidationError
pub type ValidationResult<T> = Result<T, ValidationError>;
