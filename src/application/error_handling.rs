// src/application/error_handling.rs
//
// Error Handling for Commands
//
// ARCHITECTURE:
// - Maps internal errors → user-friendly responses
// - Provides consistent error format for the front end
// - Never exposes storage internals
// - Logs unexpected errors for debugging

use serde::{Deserialize, Serialize};
use crate::error::AppError;

/// Standard error response for the front end
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories for the front end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Invalid input (400)
    Validation,

    /// Same title and year already stored (409)
    Duplicate,

    /// Resource not found (404)
    NotFound,

    /// A create is already running (429)
    Busy,

    /// Database/persistence error (500)
    Database,

    /// Other/unknown error (500)
    Internal,
}

impl ErrorResponse {
    fn new(error_type: ErrorType, message: String, details: Option<String>) -> Self {
        Self {
            success: false,
            error_type,
            message,
            details,
        }
    }

    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::Validation(domain_error) => Self::new(
                ErrorType::Validation,
                domain_error.to_string(),
                Some(domain_error.field().to_string()),
            ),

            AppError::Duplicate { .. } => Self::new(ErrorType::Duplicate, error.to_string(), None),

            AppError::NotFound(_) => Self::new(ErrorType::NotFound, error.to_string(), None),

            AppError::SubmissionInProgress => {
                Self::new(ErrorType::Busy, error.to_string(), None)
            }

            AppError::Database(_) | AppError::Pool(_) | AppError::ConstraintViolation(_) => {
                log::error!("storage failure: {}", error);
                Self::new(
                    ErrorType::Database,
                    "Database operation failed".to_string(),
                    Some("Check logs for details".to_string()),
                )
            }

            AppError::Serialization(_) | AppError::Io(_) | AppError::Other(_) => {
                log::error!("internal failure: {}", error);
                Self::new(ErrorType::Internal, error.to_string(), None)
            }
        }
    }

    /// Create validation error
    pub fn validation(message: String) -> Self {
        Self::new(ErrorType::Validation, message, None)
    }
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self::from_app_error(error)
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.details {
            Some(details) => write!(f, "{} ({})", self.message, details),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for ErrorResponse {}

/// Result type returned by every command
pub type CommandResult<T> = Result<T, ErrorResponse>;
