//! CLI-specific error types

use std::fmt;
use std::io;

use crate::atomspace::AtomSpaceError;
use crate::ure::UreError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file missing, unreadable or invalid
    ConfigError,
    /// Knowledge-base file missing, unreadable or inconsistent
    KnowledgeBaseError,
    /// I/O error (stdin/stdout)
    IoError,
    /// Config file already present
    AlreadyInitialized,
    /// Store refused an operation
    StoreError,
    /// Engine refused its configuration
    EngineError,
}

impl CliErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "CLI_CONFIG_ERROR",
            Self::KnowledgeBaseError => "CLI_KNOWLEDGE_BASE_ERROR",
            Self::IoError => "CLI_IO_ERROR",
            Self::AlreadyInitialized => "CLI_ALREADY_INITIALIZED",
            Self::StoreError => "CLI_STORE_ERROR",
            Self::EngineError => "CLI_ENGINE_ERROR",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    pub fn knowledge_base_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::KnowledgeBaseError, msg)
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    pub fn already_initialized(path: impl fmt::Display) -> Self {
        Self::new(
            CliErrorCode::AlreadyInitialized,
            format!("Config file already exists: {}", path),
        )
    }

    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<AtomSpaceError> for CliError {
    fn from(e: AtomSpaceError) -> Self {
        Self::new(CliErrorCode::StoreError, format!("{} ({})", e, e.code()))
    }
}

impl From<UreError> for CliError {
    fn from(e: UreError) -> Self {
        Self::new(CliErrorCode::EngineError, format!("{} ({})", e, e.code()))
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_has_code() {
        let err = CliError::config_error("bad");
        assert_eq!(format!("{}", err), "CLI_CONFIG_ERROR: bad");
    }

    #[test]
    fn test_from_store_error() {
        let err: CliError = AtomSpaceError::Full { capacity: 3 }.into();
        assert_eq!(err.code(), &CliErrorCode::StoreError);
        assert!(err.message().contains("ATOMSPACE_FULL"));
    }
}
