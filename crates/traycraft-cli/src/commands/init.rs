//! `traycraft init`: write a sample specification.

use std::path::{Path, PathBuf};

use traycraft_core::domain::{AppSpec, Author, CONFIG_DIR, License, Specification};

use crate::{
    cli::InitArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Write `<root>/.traycraft/spec.json`.
pub fn execute(args: InitArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let spec_path = spec_path(&config.generate.root);

    if spec_path.exists() && !args.force {
        output.warning(&format!(
            "Specification already exists at {}  (use --force to overwrite)",
            spec_path.display(),
        ))?;
        return Ok(());
    }

    let sample = sample_spec(&config.generate.root);
    let mut text = serde_json::to_string_pretty(&sample).map_err(|e| CliError::InvalidInput {
        message: format!("failed to serialise sample specification: {e}"),
    })?;
    text.push('\n');

    if let Some(parent) = spec_path.parent() {
        std::fs::create_dir_all(parent)
            .with_cli_context(|| format!("failed to create '{}'", parent.display()))?;
    }
    std::fs::write(&spec_path, text)
        .with_cli_context(|| format!("failed to write '{}'", spec_path.display()))?;

    output.success(&format!("Specification created at {}", spec_path.display()))?;
    output.info(&format!(
        "Place your icon at {} before running 'traycraft generate'",
        Path::new(CONFIG_DIR).join(&sample.app.icon).display()
    ))?;

    Ok(())
}

fn spec_path(root: &Path) -> PathBuf {
    root.join(CONFIG_DIR).join("spec.json")
}

/// Sample named after the root directory when that is a valid package name.
fn sample_spec(root: &Path) -> Specification {
    let dir_name = root
        .canonicalize()
        .ok()
        .and_then(|p| p.file_name().and_then(|n| n.to_str()).map(str::to_lowercase));

    let mut spec = Specification {
        name: "my-tray-app".into(),
        title: Some("My Tray App".into()),
        version: "0.1.0".into(),
        license: License::Mit,
        repository: String::new(),
        description: "A menu bar app built with Tauri".into(),
        author: Some(Author {
            name: Some("Your Name".into()),
            email: None,
            url: None,
        }),
        app: AppSpec {
            icon: "icon.png".into(),
            url: "http://localhost:5173".into(),
            width: None,
            height: None,
        },
    };

    if let Some(name) = dir_name {
        let candidate = Specification {
            name,
            ..spec.clone()
        };
        if candidate.validate().is_ok() {
            spec = candidate;
        }
    }
    spec
}
