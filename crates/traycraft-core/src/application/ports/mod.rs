//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `traycraft-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `IconResizer`: Raster decode/resize/encode
//!   - `TemplateRenderer`: Handlebars-style rendering
//!   - `LicenseProvider`: Canonical license texts
//!   - `SourceFormatter`: Rust/markdown post-processing
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{
    Filesystem, IconResizer, LicenseHolder, LicenseProvider, SourceFormatter, TemplateRenderer,
};

#[cfg(test)]
pub use output::{
    MockFilesystem, MockIconResizer, MockLicenseProvider, MockSourceFormatter,
    MockTemplateRenderer,
};
