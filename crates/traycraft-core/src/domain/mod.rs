// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Traycraft.
//!
//! This module contains the specification model and the output bundle. All
//! I/O, templating, image work and formatting are handled via ports (traits)
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//!
pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

pub use entities::{
    bundle::{GeneratedFile, OutputBundle},
    common::RelativePath,
    icon::{ICON_DIR, ICON_SIZES, IconTarget},
    specification::{
        AppSpec, Author, CONFIG_DIR, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, Specification,
    },
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::License;

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn license_parses_correctly() {
        assert_eq!(License::from_str("MIT").unwrap(), License::Mit);
        assert_eq!(License::from_str("apache-2.0").unwrap(), License::Apache2);
        assert_eq!(License::from_str("GPL-3.0").unwrap(), License::Gpl3Only);
        assert!(License::from_str("WTFPL").is_err());
    }

    #[test]
    fn license_round_trips_spdx_identifier() {
        for license in License::ALL {
            assert_eq!(License::from_str(license.as_str()).unwrap(), license);
        }
    }

    // ========================================================================
    // Relative Path Tests
    // ========================================================================

    #[test]
    fn relative_path_rejects_absolute() {
        assert!(RelativePath::try_new("/etc/passwd").is_err());
    }

    #[test]
    fn relative_path_rejects_parent_escape() {
        assert!(RelativePath::try_new("../outside").is_err());
        assert!(RelativePath::try_new("src/../../outside").is_err());
    }

    #[test]
    fn relative_path_normalizes_separators() {
        let p = RelativePath::new("src-tauri\\src\\main.rs");
        assert_eq!(p.as_str(), "src-tauri/src/main.rs");
        assert_eq!(p.parent().unwrap().as_str(), "src-tauri/src");
    }

    #[test]
    #[should_panic]
    fn relative_path_new_panics_on_absolute() {
        RelativePath::new("/abs");
    }

    // ========================================================================
    // Icon Table Tests
    // ========================================================================

    #[test]
    fn icon_table_declares_four_sizes() {
        let sizes: Vec<_> = ICON_SIZES.iter().map(|t| (t.width, t.height)).collect();
        assert_eq!(sizes, vec![(32, 32), (128, 128), (256, 256), (128, 128)]);
    }

    #[test]
    fn icon_paths_live_under_icon_dir() {
        for target in ICON_SIZES {
            assert!(target.path().as_str().starts_with("src-tauri/icons/"));
        }
    }

    // ========================================================================
    // Output Bundle Tests
    // ========================================================================

    #[test]
    fn bundle_builds_correctly() {
        let bundle = OutputBundle::new()
            .with_file("README.md", "# app\n".into())
            .with_file("LICENSE", "MIT\n".into());

        assert_eq!(bundle.len(), 2);
        assert_eq!(bundle.get("LICENSE"), Some("MIT\n"));
        assert!(bundle.validate().is_ok());
    }

    #[test]
    fn bundle_rejects_duplicates() {
        let bundle = OutputBundle::new()
            .with_file("README.md", "a".into())
            .with_file("README.md", "b".into());

        assert!(matches!(
            bundle.validate(),
            Err(DomainError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn bundle_rejects_empty_artifacts() {
        let bundle = OutputBundle::new().with_file(".gitignore", "\n".into());
        assert!(matches!(
            bundle.validate(),
            Err(DomainError::EmptyArtifact { .. })
        ));
    }
}
