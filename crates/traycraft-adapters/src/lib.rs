//! Infrastructure adapters for Traycraft.
//!
//! This crate implements the ports defined in `traycraft-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod formatter;
pub mod icons;
pub mod licenses;
pub mod renderer;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use formatter::{PlainFormatter, RustfmtFormatter};
pub use icons::RasterResizer;
pub use licenses::BuiltinLicenses;
pub use renderer::HandlebarsRenderer;
