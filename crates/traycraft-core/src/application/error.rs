//! Application layer errors.
//!
//! These errors represent failures in orchestration and in the collaborators
//! behind the ports, not specification problems. Those are `DomainError`
//! from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during generation.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A referenced input file does not exist.
    #[error("Resource not found: {path}")]
    ResourceNotFound { path: PathBuf },

    /// The source icon could not be decoded or re-encoded.
    #[error("Icon decoding failed: {reason}")]
    DecodeFailed { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A deriver produced or received a structurally invalid tree.
    #[error("Serialization of {artifact} failed: {reason}")]
    SerializationFailed { artifact: String, reason: String },

    /// Template rendering failed.
    #[error("Template rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// The formatting post-processor failed.
    #[error("Formatting failed: {reason}")]
    FormattingFailed { reason: String },

    /// A port lock was poisoned.
    #[error("Adapter lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ResourceNotFound { path } => vec![
                format!("File not found: {}", path.display()),
                "Icon paths are relative to the .traycraft directory".into(),
            ],
            Self::DecodeFailed { reason } => vec![
                format!("The icon could not be read as an image: {}", reason),
                "Use a PNG or JPEG source icon, ideally 512x512 or larger".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::SerializationFailed { artifact, .. } => vec![
                format!("Could not produce {}", artifact),
                "If package.json exists, make sure it holds a JSON object".into(),
            ],
            Self::FormattingFailed { .. } => vec![
                "Ensure rustfmt is installed: rustup component add rustfmt".into(),
                "Or disable it: unset format.rustfmt / drop --rustfmt".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ResourceNotFound { .. } => ErrorCategory::NotFound,
            Self::SerializationFailed { .. } => ErrorCategory::Validation,
            Self::DecodeFailed { .. }
            | Self::FilesystemError { .. }
            | Self::RenderingFailed { .. }
            | Self::FormattingFailed { .. }
            | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
