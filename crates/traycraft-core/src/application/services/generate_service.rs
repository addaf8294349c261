//! Generate Service - main application orchestrator.
//!
//! This service coordinates the entire generation workflow:
//! 1. Validate the specification
//! 2. Derive the icon set (written directly, fanned out across threads)
//! 3. Derive the text artifacts
//! 4. Hand the bundle back; `write_bundle` materializes it
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::PathBuf;
use std::thread;

use chrono::Datelike;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        derivers,
        ports::{Filesystem, IconResizer, LicenseProvider, SourceFormatter, TemplateRenderer},
    },
    domain::{
        CONFIG_DIR, DomainValidator as validator, ICON_DIR, ICON_SIZES, IconTarget, OutputBundle,
        RelativePath, Specification,
    },
    error::{TraycraftError, TraycraftResult},
};

/// Main generation service.
pub struct GenerateService {
    root: PathBuf,
    year: i32,
    filesystem: Box<dyn Filesystem>,
    resizer: Box<dyn IconResizer>,
    renderer: Box<dyn TemplateRenderer>,
    licenses: Box<dyn LicenseProvider>,
    formatter: Box<dyn SourceFormatter>,
}

impl GenerateService {
    /// Create a new service rooted at the current directory, stamping
    /// licenses with the current year.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use traycraft_core::application::GenerateService;
    ///
    /// let service = GenerateService::new(
    ///     filesystem, // impl Filesystem
    ///     resizer,    // impl IconResizer
    ///     renderer,   // impl TemplateRenderer
    ///     licenses,   // impl LicenseProvider
    ///     formatter,  // impl SourceFormatter
    /// )
    /// .with_root("./my-tray-app");
    /// ```
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        resizer: Box<dyn IconResizer>,
        renderer: Box<dyn TemplateRenderer>,
        licenses: Box<dyn LicenseProvider>,
        formatter: Box<dyn SourceFormatter>,
    ) -> Self {
        Self {
            root: PathBuf::from("."),
            year: chrono::Local::now().year(),
            filesystem,
            resizer,
            renderer,
            licenses,
            formatter,
        }
    }

    /// Project root every output path is resolved against.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Copyright year written into the license text.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Generate a project: write the icon set and return the text bundle.
    ///
    /// Nothing textual is written here; pass the bundle to
    /// [`Self::write_bundle`].
    #[instrument(skip_all, fields(project = %spec.name, root = %self.root.display()))]
    pub fn generate(&self, spec: &Specification) -> TraycraftResult<OutputBundle> {
        info!(license = %spec.license, "Generating tray application");

        validator::validate_specification(spec).map_err(TraycraftError::Domain)?;

        let icons = self.derive_icons(spec)?;
        info!(count = icons.len(), "Icons written");

        let bundle = self.render_bundle(spec)?;
        info!(files = bundle.len(), "Artifacts derived");

        Ok(bundle)
    }

    /// Validate without side effects: check the specification, decode the
    /// source icon, derive the text bundle.
    #[instrument(skip_all, fields(project = %spec.name))]
    pub fn preview(&self, spec: &Specification) -> TraycraftResult<OutputBundle> {
        validator::validate_specification(spec).map_err(TraycraftError::Domain)?;

        let source = self.read_icon(spec)?;
        let (width, height) = self.resizer.probe(&source)?;
        debug!(width, height, "Source icon decoded");

        self.render_bundle(spec)
    }

    /// Resize the source icon to every entry of [`ICON_SIZES`] and write
    /// the results under [`ICON_DIR`].
    ///
    /// The source is decoded once up front, so an undecodable icon writes
    /// nothing. The jobs run concurrently; the first failure in table order
    /// is returned once all of them have finished.
    pub fn derive_icons(&self, spec: &Specification) -> TraycraftResult<Vec<RelativePath>> {
        let source = self.read_icon(spec)?;
        let (width, height) = self.resizer.probe(&source)?;
        debug!(width, height, "Source icon decoded");

        let icon_dir = self.root.join(ICON_DIR);
        if !self.filesystem.exists(&icon_dir) {
            self.filesystem.create_dir_all(&icon_dir)?;
        }

        let results: Vec<TraycraftResult<RelativePath>> = thread::scope(|scope| {
            let handles: Vec<_> = ICON_SIZES
                .iter()
                .map(|target| {
                    let source = source.as_slice();
                    scope.spawn(move || self.write_icon(source, target))
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| {
                    handle.join().unwrap_or_else(|_| {
                        Err(TraycraftError::Internal {
                            message: "icon worker panicked".into(),
                        })
                    })
                })
                .collect()
        });

        results.into_iter().collect()
    }

    /// Derive every text artifact. Pure apart from reading an existing
    /// `package.json` under the root.
    pub fn render_bundle(&self, spec: &Specification) -> TraycraftResult<OutputBundle> {
        let existing_manifest = self.read_existing_manifest()?;

        let readme = self
            .renderer
            .render(derivers::readme::TEMPLATE, &derivers::readme::context(spec)?)?;
        let holder = derivers::license::holder(spec, self.year);

        let bundle = OutputBundle::new()
            .with_file(derivers::EXTENSIONS_JSON, derivers::editor::derive()?)
            .with_file(
                derivers::MAIN_RS,
                self.formatter
                    .format_rust(derivers::entry_point::main_source())?,
            )
            .with_file(derivers::CARGO_TOML, derivers::cargo_manifest::derive(spec)?)
            .with_file(
                derivers::BUILD_RS,
                self.formatter
                    .format_rust(derivers::entry_point::build_source())?,
            )
            .with_file(derivers::TAURI_CONF_JSON, derivers::tauri_conf::derive(spec)?)
            .with_file(derivers::GITIGNORE, derivers::gitignore::derive())
            .with_file(
                derivers::LICENSE,
                self.licenses.license_text(spec.license, &holder)?,
            )
            .with_file(
                derivers::PACKAGE_JSON,
                derivers::package_manifest::derive(spec, existing_manifest.as_deref())?,
            )
            .with_file(derivers::README_MD, self.formatter.format_markdown(&readme)?);

        for file in bundle.files() {
            debug!(path = %file.path, bytes = file.size(), "Artifact derived");
        }

        validator::validate_bundle(&bundle).map_err(TraycraftError::Domain)?;
        Ok(bundle)
    }

    /// Write each artifact under the root, creating parent directories.
    #[instrument(skip_all, fields(files = bundle.len()))]
    pub fn write_bundle(&self, bundle: &OutputBundle) -> TraycraftResult<()> {
        for file in bundle.files() {
            let path = file.path.under(&self.root);
            if let Some(parent) = file.path.parent() {
                self.filesystem.create_dir_all(&parent.under(&self.root))?;
            }
            self.filesystem.write_file(&path, &file.content)?;
            debug!(path = %file.path, "Artifact written");
        }

        info!("Successfully wrote all files");
        Ok(())
    }

    /// Outputs of a run (artifacts of `bundle` plus the icon set) that
    /// already exist under the root.
    pub fn existing_outputs(&self, bundle: &OutputBundle) -> Vec<RelativePath> {
        bundle
            .files()
            .map(|f| f.path.clone())
            .chain(ICON_SIZES.iter().map(IconTarget::path))
            .filter(|p| self.filesystem.exists(&p.under(&self.root)))
            .collect()
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn read_icon(&self, spec: &Specification) -> TraycraftResult<Vec<u8>> {
        let path = self.root.join(CONFIG_DIR).join(&spec.app.icon);
        if !self.filesystem.exists(&path) {
            return Err(ApplicationError::ResourceNotFound { path }.into());
        }
        self.filesystem.read_file(&path)
    }

    fn write_icon(&self, source: &[u8], target: &IconTarget) -> TraycraftResult<RelativePath> {
        let resized = self.resizer.resize(source, target.width, target.height)?;
        let path = target.path();
        self.filesystem.write_bytes(&path.under(&self.root), &resized)?;
        debug!(path = %path, width = target.width, height = target.height, "Icon written");
        Ok(path)
    }

    fn read_existing_manifest(&self) -> TraycraftResult<Option<String>> {
        let path = self.root.join(derivers::PACKAGE_JSON);
        if !self.filesystem.exists(&path) {
            return Ok(None);
        }

        let bytes = self.filesystem.read_file(&path)?;
        String::from_utf8(bytes).map(Some).map_err(|e| {
            ApplicationError::SerializationFailed {
                artifact: derivers::PACKAGE_JSON.to_string(),
                reason: format!("existing package.json is not UTF-8: {e}"),
            }
            .into()
        })
    }
}
