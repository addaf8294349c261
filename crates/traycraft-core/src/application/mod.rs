//! Application layer for Traycraft.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerateService)
//! - **Derivers**: One pure function per generated artifact
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. Those live in `crate::domain`.

pub mod derivers;
pub mod error;
pub mod ports;
pub mod services;

pub use services::GenerateService;

// Re-export port traits (for adapter implementation)
pub use ports::{
    Filesystem, IconResizer, LicenseHolder, LicenseProvider, SourceFormatter, TemplateRenderer,
};

pub use derivers::{ARTIFACTS, ArtifactInfo};

pub use error::ApplicationError;
