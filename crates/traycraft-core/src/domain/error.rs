// ============================================================================
// domain/error.rs - SPECIFICATION & BUNDLE ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Specification Errors
    // ========================================================================
    #[error("Invalid package name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Invalid version '{version}': {reason}")]
    InvalidVersion { version: String, reason: String },

    #[error("Unknown license '{license}'")]
    UnknownLicense { license: String },

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("Icon path '{path}' must stay inside {config_dir}")]
    IconOutsideConfigDir {
        path: String,
        config_dir: &'static str,
    },

    #[error("Invalid window dimension for {field}: {value}")]
    InvalidDimension { field: &'static str, value: u32 },

    // ========================================================================
    // Bundle Errors
    // ========================================================================
    #[error("Duplicate path in output bundle: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Generated artifact '{path}' is empty")]
    EmptyArtifact { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { name, reason } => vec![
                format!("Package name '{}' is invalid: {}", name, reason),
                "Use lowercase letters, digits, '-', '_' and '.'".into(),
                "Examples: my-tray-app, clipboard_bar".into(),
            ],
            Self::InvalidVersion { version, .. } => vec![
                format!("'{}' is not a semantic version", version),
                "Use MAJOR.MINOR.PATCH, e.g. 0.1.0".into(),
            ],
            Self::UnknownLicense { .. } => vec![
                "Supported licenses:".into(),
                format!("  {}", crate::domain::License::ALL.map(|l| l.as_str()).join(", ")),
            ],
            Self::MissingRequiredField { field } => vec![
                format!("Add '{}' to your specification file", field),
                "Run: traycraft init to write a complete sample".into(),
            ],
            Self::IconOutsideConfigDir { config_dir, .. } => vec![
                format!("Put the icon inside {}", config_dir),
                "Use a relative path without '..', e.g. icon.png".into(),
            ],
            Self::InvalidDimension { field, .. } => vec![
                format!("'{}' must be a positive pixel count", field),
                "Omit it to use the default window size (600x800)".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. }
            | Self::InvalidVersion { .. }
            | Self::UnknownLicense { .. }
            | Self::MissingRequiredField { .. }
            | Self::IconOutsideConfigDir { .. }
            | Self::InvalidDimension { .. } => ErrorCategory::Validation,
            _ => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
