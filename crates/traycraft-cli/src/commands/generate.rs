//! Implementation of the `traycraft generate` command.
//!
//! Responsibility: locate and parse the specification, wire the adapters
//! into the core service, guard against overwriting, and report results.
//! No generation logic lives here.

use std::path::{Path, PathBuf};

use serde_json::json;
use tracing::{debug, info, instrument};

use traycraft_adapters::{
    BuiltinLicenses, HandlebarsRenderer, LocalFilesystem, PlainFormatter, RasterResizer,
    RustfmtFormatter,
};
use traycraft_core::{
    application::{GenerateService, ports::SourceFormatter},
    domain::{CONFIG_DIR, ICON_SIZES, OutputBundle, RelativePath, Specification},
};

use crate::{
    cli::{GenerateArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Specification file names searched under `<root>/.traycraft/`, in order.
pub const SPEC_FILES: [&str; 2] = ["spec.json", "spec.toml"];

/// Execute the `traycraft generate` command.
///
/// 1. Resolve the root and the specification file
/// 2. Parse the specification (JSON or TOML by extension)
/// 3. Preview: validate, decode the icon, derive every artifact
/// 4. Early-exit on `--dry-run`
/// 5. Confirm before overwriting unless `-y` / `--force`
/// 6. Generate and write
#[instrument(skip_all)]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let root = args
        .root
        .clone()
        .unwrap_or_else(|| config.generate.root.clone());
    let spec_path = resolve_spec_path(
        args.spec.as_deref(),
        config.generate.spec_path.as_deref(),
        &root,
    )?;
    let spec = load_spec(&spec_path)?;
    debug!(path = %spec_path.display(), name = %spec.name, "Specification loaded");

    let rustfmt = args.rustfmt || config.format.rustfmt;
    let service = build_service(&root, rustfmt);

    let plan = service.preview(&spec)?;

    if args.dry_run {
        return report(&output, &root, &plan, true);
    }

    let existing = service.existing_outputs(&plan);
    if !existing.is_empty() && !(args.yes || args.force) {
        confirm_overwrite(&existing, &global, &output)?;
    }

    info!(root = %root.display(), rustfmt, "Generation started");
    let spinner = output.spinner("Generating icons and artifacts...");
    let result = service
        .generate(&spec)
        .and_then(|bundle| service.write_bundle(&bundle).map(|()| bundle));
    spinner.finish_and_clear();
    let bundle = result?;
    info!(files = bundle.len(), "Generation completed");

    report(&output, &root, &bundle, false)
}

// ── Specification lookup ──────────────────────────────────────────────────────

/// `--spec` wins, then `generate.spec_path`, then the first of
/// [`SPEC_FILES`] found under `<root>/.traycraft/`.
pub fn resolve_spec_path(
    explicit: Option<&Path>,
    configured: Option<&Path>,
    root: &Path,
) -> CliResult<PathBuf> {
    if let Some(path) = explicit.or(configured) {
        return if path.is_file() {
            Ok(path.to_path_buf())
        } else {
            Err(CliError::SpecNotFound {
                searched: vec![path.to_path_buf()],
            })
        };
    }

    let candidates: Vec<PathBuf> = SPEC_FILES
        .iter()
        .map(|name| root.join(CONFIG_DIR).join(name))
        .collect();

    if let Some(found) = candidates.iter().find(|p| p.is_file()).cloned() {
        return Ok(found);
    }
    Err(CliError::SpecNotFound {
        searched: candidates,
    })
}

/// Parse a specification file, choosing the syntax by extension.
pub fn load_spec(path: &Path) -> CliResult<Specification> {
    let text = std::fs::read_to_string(path)
        .with_cli_context(|| format!("failed to read {}", path.display()))?;

    let invalid = |reason: String| CliError::InvalidSpec {
        path: path.to_path_buf(),
        reason,
    };

    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(&text).map_err(|e| invalid(e.to_string())),
        Some("toml") => toml::from_str(&text).map_err(|e| invalid(e.to_string())),
        _ => Err(CliError::InvalidInput {
            message: format!(
                "unsupported specification format '{}' (use .json or .toml)",
                path.display()
            ),
        }),
    }
}

// ── Wiring ────────────────────────────────────────────────────────────────────

fn build_service(root: &Path, rustfmt: bool) -> GenerateService {
    let formatter: Box<dyn SourceFormatter> = if rustfmt {
        Box::new(RustfmtFormatter::new())
    } else {
        Box::new(PlainFormatter::new())
    };

    GenerateService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(RasterResizer::new()),
        Box::new(HandlebarsRenderer::new()),
        Box::new(BuiltinLicenses::new()),
        formatter,
    )
    .with_root(root)
}

// ── UI helpers ────────────────────────────────────────────────────────────────

#[cfg(feature = "interactive")]
fn confirm_overwrite(
    existing: &[RelativePath],
    global: &GlobalArgs,
    output: &OutputManager,
) -> CliResult<()> {
    use std::io::IsTerminal;

    if global.quiet || !std::io::stdin().is_terminal() {
        return Err(outputs_exist(existing));
    }

    output.warning(&format!("{} output file(s) already exist:", existing.len()))?;
    for path in existing {
        output.print(&format!("  {path}"))?;
    }

    let proceed = dialoguer::Confirm::new()
        .with_prompt("Overwrite them?")
        .default(false)
        .interact()
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation".into(),
            source: std::io::Error::other(e),
        })?;

    if proceed {
        Ok(())
    } else {
        Err(CliError::Cancelled)
    }
}

#[cfg(not(feature = "interactive"))]
fn confirm_overwrite(
    existing: &[RelativePath],
    _global: &GlobalArgs,
    _output: &OutputManager,
) -> CliResult<()> {
    Err(outputs_exist(existing))
}

fn outputs_exist(existing: &[RelativePath]) -> CliError {
    CliError::OutputsExist {
        paths: existing.iter().map(ToString::to_string).collect(),
    }
}

fn report(
    output: &OutputManager,
    root: &Path,
    bundle: &OutputBundle,
    dry_run: bool,
) -> CliResult<()> {
    let icons: Vec<RelativePath> = ICON_SIZES.iter().map(|t| t.path()).collect();

    if output.format() == OutputFormat::Json {
        let files: Vec<_> = bundle
            .files()
            .map(|f| json!({ "path": f.path.as_str(), "bytes": f.size() }))
            .collect();
        let icons: Vec<_> = ICON_SIZES
            .iter()
            .map(|t| json!({ "path": t.path().as_str(), "width": t.width, "height": t.height }))
            .collect();
        output.json(&json!({
            "root": root.display().to_string(),
            "dryRun": dry_run,
            "files": files,
            "icons": icons,
        }))?;
        return Ok(());
    }

    if dry_run {
        output.info(&format!(
            "Dry run: would write {} files and {} icons under {}",
            bundle.len(),
            icons.len(),
            root.display()
        ))?;
    } else {
        output.header(&format!("Generated under {}", root.display()))?;
    }

    for file in bundle.files() {
        output.print(&format!("  {:<28} {:>6} bytes", file.path.as_str(), file.size()))?;
    }
    for (icon, target) in icons.iter().zip(ICON_SIZES.iter()) {
        output.print(&format!(
            "  {:<28} {:>3}x{}",
            icon.as_str(),
            target.width,
            target.height
        ))?;
    }

    if !dry_run {
        output.success(&format!(
            "Wrote {} files and {} icons",
            bundle.len(),
            icons.len()
        ))?;
        output.print("")?;
        output.print("Next steps:")?;
        if root != Path::new(".") {
            output.print(&format!("  cd {}", root.display()))?;
        }
        output.print("  pnpm install")?;
        output.print("  pnpm tauri dev")?;
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
