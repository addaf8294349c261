//! Artifact derivers.
//!
//! Each deriver turns the specification into the finished text of one
//! artifact. They are pure: the only inputs are the specification and, for
//! `package.json`, the manifest already on disk. Rendering and formatting
//! are applied by the service through the ports.

pub mod cargo_manifest;
pub mod editor;
pub mod entry_point;
pub mod gitignore;
pub mod license;
pub mod package_manifest;
pub mod readme;
pub mod tauri_conf;

use serde::Serialize;

use crate::{application::ApplicationError, error::TraycraftResult};

pub const EXTENSIONS_JSON: &str = ".vscode/extensions.json";
pub const MAIN_RS: &str = "src-tauri/src/main.rs";
pub const CARGO_TOML: &str = "src-tauri/Cargo.toml";
pub const BUILD_RS: &str = "src-tauri/build.rs";
pub const TAURI_CONF_JSON: &str = "src-tauri/tauri.conf.json";
pub const GITIGNORE: &str = ".gitignore";
pub const LICENSE: &str = "LICENSE";
pub const PACKAGE_JSON: &str = "package.json";
pub const README_MD: &str = "README.md";

/// Declared artifact with its role, in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtifactInfo {
    pub path: &'static str,
    pub role: &'static str,
}

/// Every text artifact a run produces.
pub const ARTIFACTS: [ArtifactInfo; 9] = [
    ArtifactInfo {
        path: EXTENSIONS_JSON,
        role: "editor recommendation list",
    },
    ArtifactInfo {
        path: MAIN_RS,
        role: "native entry-point source stub",
    },
    ArtifactInfo {
        path: CARGO_TOML,
        role: "native package manifest",
    },
    ArtifactInfo {
        path: BUILD_RS,
        role: "native build-script stub",
    },
    ArtifactInfo {
        path: TAURI_CONF_JSON,
        role: "application bundle/window/tray configuration",
    },
    ArtifactInfo {
        path: GITIGNORE,
        role: "static ignore patterns",
    },
    ArtifactInfo {
        path: LICENSE,
        role: "full license text",
    },
    ArtifactInfo {
        path: PACKAGE_JSON,
        role: "top-level package manifest",
    },
    ArtifactInfo {
        path: README_MD,
        role: "rendered project readme",
    },
];

/// Pretty JSON, two-space indent, trailing newline.
pub(crate) fn to_json(artifact: &str, value: &impl Serialize) -> TraycraftResult<String> {
    let mut text =
        serde_json::to_string_pretty(value).map_err(|e| ApplicationError::SerializationFailed {
            artifact: artifact.to_string(),
            reason: e.to_string(),
        })?;
    text.push('\n');
    Ok(text)
}
