//! Rule engine error types
//!
//! Error codes:
//! - URE_INVALID_CONFIG

use thiserror::Error;

/// Result type for engine construction
pub type UreResult<T> = Result<T, UreError>;

/// Engine errors. Chaining itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UreError {
    #[error("Invalid engine configuration: {0}")]
    InvalidConfig(String),
}

impl UreError {
    pub fn code(&self) -> &'static str {
        match self {
            UreError::InvalidConfig(_) => "URE_INVALID_CONFIG",
        }
    }
}
