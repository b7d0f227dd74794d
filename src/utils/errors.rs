//! Error handling for the EventHive client
//!
//! This module defines the main error types used throughout the crate
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for EventHive client operations
#[derive(Error, Debug)]
pub enum EventHiveError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected API response: HTTP {status}: {detail}")]
    Api { status: u16, detail: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias for EventHive client operations
pub type Result<T> = std::result::Result<T, EventHiveError>;

impl EventHiveError {
    /// Check if the error is recoverable by retrying or re-prompting
    pub fn is_recoverable(&self) -> bool {
        match self {
            EventHiveError::Validation(_) => true,
            EventHiveError::Auth(_) => false,
            EventHiveError::Conflict(_) => false,
            EventHiveError::NotFound(_) => false,
            EventHiveError::Transport(_) => true,
            EventHiveError::Api { .. } => true,
            EventHiveError::Config(_) => false,
            EventHiveError::Serialization(_) => false,
            EventHiveError::Io(_) => true,
            EventHiveError::UrlParse(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            EventHiveError::Config(_) => ErrorSeverity::Critical,
            EventHiveError::Auth(_) => ErrorSeverity::Warning,
            EventHiveError::NotFound(_) => ErrorSeverity::Warning,
            EventHiveError::Validation(_) => ErrorSeverity::Info,
            EventHiveError::Conflict(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverability() {
        assert!(EventHiveError::Validation("empty name".to_string()).is_recoverable());
        assert!(!EventHiveError::Auth("bad credentials".to_string()).is_recoverable());
        assert!(!EventHiveError::Conflict("duplicate registration".to_string()).is_recoverable());
        assert!(!EventHiveError::Config("bad base URL".to_string()).is_recoverable());
    }

    #[test]
    fn test_severity() {
        assert_eq!(
            EventHiveError::Config("missing base URL".to_string()).severity(),
            ErrorSeverity::Critical
        );
        assert_eq!(
            EventHiveError::Auth("expired token".to_string()).severity(),
            ErrorSeverity::Warning
        );
        assert_eq!(
            EventHiveError::Validation("bad email".to_string()).severity(),
            ErrorSeverity::Info
        );
    }

    #[test]
    fn test_api_error_display() {
        let err = EventHiveError::Api {
            status: 503,
            detail: "maintenance".to_string(),
        };
        assert_eq!(err.to_string(), "Unexpected API response: HTTP 503: maintenance");
    }
}
