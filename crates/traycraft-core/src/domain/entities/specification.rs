use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::common::RelativePath, error::DomainError, value_objects::License,
};

/// Directory holding the specification file and the source icon.
pub const CONFIG_DIR: &str = ".traycraft";

/// Window width used when the specification does not set one.
pub const DEFAULT_WINDOW_WIDTH: u32 = 600;

/// Window height used when the specification does not set one.
pub const DEFAULT_WINDOW_HEIGHT: u32 = 800;

const MAX_NAME_LEN: usize = 214;

/// The description of the project to scaffold.
///
/// Read once per run and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specification {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub version: String,
    pub license: License,
    #[serde(default)]
    pub repository: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    #[serde(default)]
    pub app: AppSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// The tray application itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSpec {
    /// Source icon, relative to [`CONFIG_DIR`].
    #[serde(default)]
    pub icon: String,
    /// URL the window loads during development.
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl Specification {
    /// Check every field the derivers rely on.
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_package_name(&self.name)?;

        semver::Version::parse(&self.version).map_err(|e| DomainError::InvalidVersion {
            version: self.version.clone(),
            reason: e.to_string(),
        })?;

        if self.app.icon.trim().is_empty() {
            return Err(DomainError::MissingRequiredField { field: "app.icon" });
        }
        RelativePath::try_new(self.app.icon.as_str()).map_err(|_| {
            DomainError::IconOutsideConfigDir {
                path: self.app.icon.clone(),
                config_dir: CONFIG_DIR,
            }
        })?;
        if self.app.url.trim().is_empty() {
            return Err(DomainError::MissingRequiredField { field: "app.url" });
        }
        if let Some(0) = self.app.width {
            return Err(DomainError::InvalidDimension {
                field: "app.width",
                value: 0,
            });
        }
        if let Some(0) = self.app.height {
            return Err(DomainError::InvalidDimension {
                field: "app.height",
                value: 0,
            });
        }
        Ok(())
    }

    /// Display name of the bundled product.
    pub fn product_name(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(&self.name)
    }

    /// Reverse-DNS bundle identifier derived from the package name, so
    /// each generated app gets its own rather than one fixed identifier.
    pub fn bundle_identifier(&self) -> String {
        format!("dev.traycraft.{}", self.name.replace('_', "-"))
    }

    /// Author name, if one was given and is not blank.
    pub fn author_name(&self) -> Option<&str> {
        self.author
            .as_ref()
            .and_then(|a| a.name.as_deref())
            .filter(|n| !n.trim().is_empty())
    }

    /// Copyright holder for the license text.
    ///
    /// Author name, then the owner segment of the repository URL, then the
    /// package name.
    pub fn license_holder(&self) -> String {
        if let Some(name) = self.author_name() {
            return name.to_string();
        }
        repository_owner(&self.repository)
            .map(str::to_string)
            .unwrap_or_else(|| self.name.clone())
    }
}

impl AppSpec {
    pub fn window_width(&self) -> u32 {
        self.width.unwrap_or(DEFAULT_WINDOW_WIDTH)
    }

    pub fn window_height(&self) -> u32 {
        self.height.unwrap_or(DEFAULT_WINDOW_HEIGHT)
    }
}

/// npm-compatible package identifier rules.
fn validate_package_name(name: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.is_empty() {
        return Err(DomainError::MissingRequiredField { field: "name" });
    }
    if name.len() > MAX_NAME_LEN {
        return Err(invalid("name is longer than 214 characters"));
    }
    if name.starts_with('.') || name.starts_with('_') {
        return Err(invalid("name cannot start with '.' or '_'"));
    }
    if let Some(c) = name
        .chars()
        .find(|&c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '_' | '.')))
    {
        return Err(invalid(&format!("character '{c}' is not allowed")));
    }
    Ok(())
}

/// `https://github.com/owner/repo` → `owner`.
fn repository_owner(repository: &str) -> Option<&str> {
    let rest = repository
        .split_once("://")
        .map_or(repository, |(_, rest)| rest);
    let rest = rest.strip_prefix("git@").unwrap_or(rest);

    let mut segments = rest.split(['/', ':']).filter(|s| !s.is_empty());
    let host = segments.next()?;
    if !host.contains('.') {
        return None;
    }
    segments.next()
}
