//! Unified error handling for Traycraft Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Traycraft Core operations.
#[derive(Debug, Error, Clone)]
pub enum TraycraftError {
    /// Errors from the domain layer (invalid specification, bad bundle).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (I/O, decoding, serialization).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl TraycraftError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in Traycraft".into(),
                "Please report this issue at: https://github.com/traycraft/traycraft/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type TraycraftResult<T> = Result<T, TraycraftError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn missing_icon_is_not_found() {
        let err: TraycraftError = ApplicationError::ResourceNotFound {
            path: PathBuf::from(".traycraft/icon.png"),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.suggestions().iter().any(|s| s.contains("icon.png")));
    }

    #[test]
    fn invalid_name_is_validation() {
        let err: TraycraftError = DomainError::InvalidName {
            name: "Bad Name".into(),
            reason: "contains whitespace".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn decode_failure_is_internal() {
        let err: TraycraftError = ApplicationError::DecodeFailed {
            reason: "not an image".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Internal);
    }
}
