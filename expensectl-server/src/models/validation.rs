//! Validation error types

use std::fmt;

/// Validation error for inbound requests
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Body could not be decoded into the expected shape
    Malformed { reason: String },

    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Numeric field is zero when it must not be
    Zero { field: &'static str },

    /// Route id is not an integer
    InvalidId { value: String },
}

impl ValidationError {
    /// True for failures where the body decoded but a field was rejected.
    pub fn is_invalid_field(&self) -> bool {
        matches!(self, Self::Empty { .. } | Self::Zero { .. })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed { reason } => write!(f, "malformed request body: {}", reason),
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::Zero { field } => write!(f, "{} must be non-zero", field),
            Self::InvalidId { value } => write!(f, "invalid expense id: '{}'", value),
        }
    }
}

impl std::error::Error for ValidationError {}
