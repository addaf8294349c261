//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `traycraft-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::License;
use crate::error::TraycraftResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `traycraft_adapters::filesystem::LocalFilesystem` (production)
/// - `traycraft_adapters::filesystem::MemoryFilesystem` (tests)
///
/// ## Design Notes
///
/// - Paths are already resolved against the project root by the caller
/// - `Send + Sync` so icon writes can fan out across threads
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> TraycraftResult<()>;

    /// Write text content to a file.
    fn write_file(&self, path: &Path, content: &str) -> TraycraftResult<()>;

    /// Write binary content to a file.
    fn write_bytes(&self, path: &Path, content: &[u8]) -> TraycraftResult<()>;

    /// Read a whole file. Missing files are `ResourceNotFound`.
    fn read_file(&self, path: &Path) -> TraycraftResult<Vec<u8>>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for raster icon work.
///
/// Implemented by:
/// - `traycraft_adapters::icons::RasterResizer` (`image` crate)
#[cfg_attr(test, mockall::automock)]
pub trait IconResizer: Send + Sync {
    /// Decode `source` and report its pixel dimensions.
    fn probe(&self, source: &[u8]) -> TraycraftResult<(u32, u32)>;

    /// Resize `source` to exactly `width` x `height`, re-encoded in the
    /// source's own format.
    fn resize(&self, source: &[u8], width: u32, height: u32) -> TraycraftResult<Vec<u8>>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `traycraft_adapters::renderer::HandlebarsRenderer`
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render `template` against `data`.
    fn render(&self, template: &str, data: &serde_json::Value) -> TraycraftResult<String>;
}

/// Who the license text names, and when.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseHolder {
    /// Copyright holder.
    pub name: String,
    /// Copyright year.
    pub year: i32,
    /// Program name, used by the GPL notices.
    pub program: String,
}

/// Port for license texts.
///
/// Implemented by:
/// - `traycraft_adapters::licenses::BuiltinLicenses`
#[cfg_attr(test, mockall::automock)]
pub trait LicenseProvider: Send + Sync {
    /// Full license text with holder and year filled in.
    fn license_text(&self, license: License, holder: &LicenseHolder) -> TraycraftResult<String>;
}

/// Port for the formatting post-processors.
///
/// Implemented by:
/// - `traycraft_adapters::formatter::PlainFormatter` (default)
/// - `traycraft_adapters::formatter::RustfmtFormatter` (shells out to rustfmt)
#[cfg_attr(test, mockall::automock)]
pub trait SourceFormatter: Send + Sync {
    fn format_rust(&self, source: &str) -> TraycraftResult<String>;

    fn format_markdown(&self, source: &str) -> TraycraftResult<String>;
}
