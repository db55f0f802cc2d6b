//! Error types shared by the composer, the output handle and the config loader
//!
//! Failures raised by a wrapped target never pass through this type: a target
//! returning `Result<T, E>` has that value handed back unchanged.

use thiserror::Error;

/// Errors raised by callwrap itself
#[derive(Error, Debug)]
pub enum CallWrapError {
    /// Ambiguous or unrecognized wrapper construction
    #[error("Invalid composition: {0}")]
    InvalidComposition(String),

    /// Output redirection toggled out of order
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Configuration file could not be parsed
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for callwrap operations
pub type Result<T> = std::result::Result<T, CallWrapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CallWrapError::InvalidComposition("both target and options".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid composition: both target and options"
        );

        let err = CallWrapError::InvalidState("redirection is not enabled".to_string());
        assert_eq!(err.to_string(), "Invalid state: redirection is not enabled");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "log.txt");
        let err: CallWrapError = io.into();
        assert!(matches!(err, CallWrapError::Io(_)));
        assert!(err.to_string().contains("log.txt"));
    }
}
