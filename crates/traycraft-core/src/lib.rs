//! Traycraft Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Traycraft
//! menu-bar app generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          traycraft-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (GenerateService + derivers)         │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, IconResizer, Renderer,     │
//! │  LicenseProvider, SourceFormatter)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    traycraft-adapters (Infrastructure)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (Specification, License, OutputBundle)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use traycraft_core::{application::GenerateService, domain::Specification};
//!
//! let spec: Specification = serde_json::from_str(spec_json).unwrap();
//!
//! // Adapters come from traycraft-adapters.
//! let service = GenerateService::new(filesystem, resizer, renderer, licenses, formatter);
//! let bundle = service.generate(&spec).unwrap();
//! service.write_bundle(&bundle).unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateService,
        ports::{Filesystem, IconResizer, LicenseProvider, SourceFormatter, TemplateRenderer},
    };
    pub use crate::domain::{
        AppSpec, Author, GeneratedFile, License, OutputBundle, RelativePath, Specification,
    };
    pub use crate::error::{TraycraftError, TraycraftResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
