//! Typed error handling for salescope
//!
//! The error hierarchy mirrors how failures surface over HTTP:
//!
//! - [`ValidationError`]: malformed request parameters, rejected before a
//!   predicate is built (4xx)
//! - [`StoreError`]: failures of the storage collaborator, never retried by
//!   the engine (5xx)
//! - [`ConfigError`]: configuration loading and parsing failures

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// The main error type for salescope
#[derive(Debug)]
pub enum ScopeError {
    /// Request validation errors
    Validation(ValidationError),

    /// Storage backend errors
    Store(StoreError),

    /// Configuration errors
    Config(ConfigError),

    /// Internal errors (should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for ScopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScopeError::Validation(e) => write!(f, "{}", e),
            ScopeError::Store(e) => write!(f, "{}", e),
            ScopeError::Config(e) => write!(f, "{}", e),
            ScopeError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ScopeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScopeError::Validation(e) => Some(e),
            ScopeError::Store(e) => Some(e),
            ScopeError::Config(e) => Some(e),
            ScopeError::Internal(_) => None,
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ScopeError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ScopeError::Validation(_) => StatusCode::BAD_REQUEST,
            ScopeError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ScopeError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ScopeError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ScopeError::Validation(e) => e.error_code(),
            ScopeError::Store(_) => "STORE_ERROR",
            ScopeError::Config(_) => "CONFIG_ERROR",
            ScopeError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response body
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
        }
    }
}

impl IntoResponse for ScopeError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to request parameter validation
#[derive(Debug)]
pub enum ValidationError {
    /// A date parameter could not be parsed
    InvalidDate { field: String, value: String },

    /// A numeric parameter was supplied but is not a number
    InvalidNumber { field: String, value: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidDate { field, value } => {
                write!(f, "Invalid date '{}' for parameter '{}'", value, field)
            }
            ValidationError::InvalidNumber { field, value } => {
                write!(f, "Invalid number '{}' for parameter '{}'", value, field)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::InvalidDate { .. } => "INVALID_DATE",
            ValidationError::InvalidNumber { .. } => "INVALID_NUMBER",
        }
    }
}

impl From<ValidationError> for ScopeError {
    fn from(err: ValidationError) -> Self {
        ScopeError::Validation(err)
    }
}

// =============================================================================
// Store Errors
// =============================================================================

/// Errors raised by the storage collaborator
#[derive(Debug)]
pub enum StoreError {
    /// A scan, count, distinct or aggregation primitive failed
    QueryFailed { backend: String, message: String },

    /// Loading the dataset into the store failed
    LoadFailed { path: String, message: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::QueryFailed { backend, message } => {
                write!(f, "{} query error: {}", backend, message)
            }
            StoreError::LoadFailed { path, message } => {
                write!(f, "Failed to load dataset '{}': {}", path, message)
            }
        }
    }
}

impl std::error::Error for StoreError {}

impl From<StoreError> for ScopeError {
    fn from(err: StoreError) -> Self {
        ScopeError::Store(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to parse a configuration file
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Invalid value in configuration
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    /// IO error while reading configuration
    IoError { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError { file, message } => {
                if let Some(file) = file {
                    write!(f, "Failed to parse config file '{}': {}", file, message)
                } else {
                    write!(f, "Failed to parse config: {}", message)
                }
            }
            ConfigError::InvalidValue {
                field,
                value,
                message,
            } => {
                write!(
                    f,
                    "Invalid value '{}' for field '{}': {}",
                    value, field, message
                )
            }
            ConfigError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for ScopeError {
    fn from(err: ConfigError) -> Self {
        ScopeError::Config(err)
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<std::io::Error> for ScopeError {
    fn from(err: std::io::Error) -> Self {
        ScopeError::Config(ConfigError::IoError {
            message: err.to_string(),
        })
    }
}

impl From<serde_yaml::Error> for ScopeError {
    fn from(err: serde_yaml::Error) -> Self {
        ScopeError::Config(ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        })
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for salescope operations
pub type ScopeResult<T> = Result<T, ScopeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::InvalidDate {
            field: "startDate".to_string(),
            value: "not-a-date".to_string(),
        };
        assert!(err.to_string().contains("startDate"));
        assert!(err.to_string().contains("not-a-date"));
    }

    #[test]
    fn test_validation_error_status_code() {
        let err: ScopeError = ValidationError::InvalidNumber {
            field: "ageMin".to_string(),
            value: "abc".to_string(),
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "INVALID_NUMBER");
    }

    #[test]
    fn test_store_error_status_code() {
        let err: ScopeError = StoreError::QueryFailed {
            backend: "in-memory".to_string(),
            message: "scan aborted".to_string(),
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_code(), "STORE_ERROR");
    }

    #[test]
    fn test_error_response_body() {
        let err: ScopeError = ValidationError::InvalidDate {
            field: "endDate".to_string(),
            value: "2024-13-99".to_string(),
        }
        .into();
        let response = err.to_response();
        assert_eq!(response.code, "INVALID_DATE");
        assert!(response.message.contains("endDate"));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidValue {
            field: "PORT".to_string(),
            value: "nope".to_string(),
            message: "expected a port number".to_string(),
        };
        assert!(err.to_string().contains("PORT"));
    }
}
