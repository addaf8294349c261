//! Domain value objects: License.
//!
//! Pure value types: `Copy`, equality-by-value, no identity. The license
//! texts themselves live behind the `LicenseProvider` port; this file only
//! defines the identifiers, their string forms and their parsers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── License ──────────────────────────────────────────────────────────────────

/// A license the generated project can be published under.
///
/// Serialized as its SPDX identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum License {
    Apache2,
    Gpl2Only,
    Gpl3Only,
    Isc,
    Mit,
}

impl License {
    /// Every supported license, in SPDX order.
    pub const ALL: [License; 5] = [
        Self::Apache2,
        Self::Gpl2Only,
        Self::Gpl3Only,
        Self::Isc,
        Self::Mit,
    ];

    /// SPDX identifier.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Apache2 => "Apache-2.0",
            Self::Gpl2Only => "GPL-2.0-only",
            Self::Gpl3Only => "GPL-3.0-only",
            Self::Isc => "ISC",
            Self::Mit => "MIT",
        }
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for License {
    type Err = DomainError;

    /// Case-insensitive; the bare `GPL-2.0` / `GPL-3.0` forms are accepted
    /// as their `-only` variants.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "apache-2.0" | "apache2" => Ok(Self::Apache2),
            "gpl-2.0-only" | "gpl-2.0" => Ok(Self::Gpl2Only),
            "gpl-3.0-only" | "gpl-3.0" => Ok(Self::Gpl3Only),
            "isc" => Ok(Self::Isc),
            "mit" => Ok(Self::Mit),
            _ => Err(DomainError::UnknownLicense {
                license: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for License {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<License> for String {
    fn from(license: License) -> Self {
        license.as_str().to_string()
    }
}
