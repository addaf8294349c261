//! `src-tauri/Cargo.toml`

use std::collections::BTreeMap;

use serde::Serialize;

use super::CARGO_TOML;
use crate::{application::ApplicationError, domain::Specification, error::TraycraftResult};

const EDITION: &str = "2021";
const RUST_VERSION: &str = "1.57";

#[derive(Debug, Serialize)]
struct Manifest<'a> {
    package: Package<'a>,
    #[serde(rename = "build-dependencies")]
    build_dependencies: BTreeMap<&'static str, Dependency>,
    dependencies: BTreeMap<&'static str, Dependency>,
    features: BTreeMap<&'static str, Vec<&'static str>>,
}

#[derive(Debug, Serialize)]
struct Package<'a> {
    name: &'a str,
    version: &'a str,
    description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    authors: Option<Vec<&'a str>>,
    license: &'static str,
    repository: &'a str,
    edition: &'static str,
    #[serde(rename = "rust-version")]
    rust_version: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Dependency {
    Version(&'static str),
    Detailed {
        features: Vec<&'static str>,
        version: &'static str,
    },
}

impl Dependency {
    fn detailed(version: &'static str, features: &[&'static str]) -> Self {
        Self::Detailed {
            features: features.to_vec(),
            version,
        }
    }
}

pub fn derive(spec: &Specification) -> TraycraftResult<String> {
    toml::to_string(&manifest(spec)).map_err(|e| {
        ApplicationError::SerializationFailed {
            artifact: CARGO_TOML.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

fn manifest(spec: &Specification) -> Manifest<'_> {
    let build_dependencies = BTreeMap::from([("tauri-build", Dependency::detailed("1.2", &[]))]);

    let dependencies = BTreeMap::from([
        ("serde_json", Dependency::Version("1.0")),
        ("serde", Dependency::detailed("1.0", &["derive"])),
        (
            "tauri",
            Dependency::detailed("1.2", &["macos-private-api", "shell-open", "system-tray"]),
        ),
        (
            "tauri-plugin-positioner",
            Dependency::detailed("1.0.4", &["system-tray"]),
        ),
    ]);

    let features = BTreeMap::from([
        ("custom-protocol", vec!["tauri/custom-protocol"]),
        ("default", vec!["custom-protocol"]),
    ]);

    Manifest {
        package: Package {
            name: &spec.name,
            version: &spec.version,
            description: &spec.description,
            authors: spec.author_name().map(|name| vec![name]),
            license: spec.license.as_str(),
            repository: &spec.repository,
            edition: EDITION,
            rust_version: RUST_VERSION,
        },
        build_dependencies,
        dependencies,
        features,
    }
}
