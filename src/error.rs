//! Error types and handling for the certificate verification server

use serde::Serialize;
use std::fmt;

/// Application error types surfaced through both the CLI and JSON-RPC layers
#[derive(Debug, Serialize)]
pub enum AppError {
    InvalidInput(String),
    SourceFetchFailed(String),
    SourceParseFailed(String),
    NotFound(String),
    Timeout(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AppError::SourceFetchFailed(msg) => write!(f, "Record source fetch failed: {}", msg),
            AppError::SourceParseFailed(msg) => write!(f, "Record source parse failed: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Timeout(msg) => write!(f, "Timeout: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// Get the error code for JSON-RPC responses
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "invalid_input",
            AppError::SourceFetchFailed(_) => "source_fetch_failed",
            AppError::SourceParseFailed(_) => "source_parse_failed",
            AppError::NotFound(_) => "not_found",
            AppError::Timeout(_) => "timeout",
            AppError::Internal(_) => "internal_error",
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Convert anyhow::Error to AppError
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Convert reqwest::Error to AppError
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Timeout(err.to_string())
        } else if err.is_connect() || err.is_request() {
            AppError::SourceFetchFailed(err.to_string())
        } else {
            AppError::Internal(err.to_string())
        }
    }
}

/// Convert serde_json::Error to AppError
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SourceParseFailed(err.to_string())
    }
}

/// Convert std::io::Error to AppError
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::SourceFetchFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(
            AppError::InvalidInput("x".into()).error_code(),
            "invalid_input"
        );
        assert_eq!(AppError::NotFound("x".into()).error_code(), "not_found");
        assert_eq!(AppError::Timeout("x".into()).error_code(), "timeout");
        assert_eq!(
            AppError::SourceFetchFailed("x".into()).error_code(),
            "source_fetch_failed"
        );
    }

    #[test]
    fn test_display_includes_cause() {
        let err = AppError::SourceParseFailed("unexpected token".into());
        assert!(err.message().contains("unexpected token"));
    }
}
