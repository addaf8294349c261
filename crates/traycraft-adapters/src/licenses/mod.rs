//! Built-in license texts.
//!
//! Texts are compiled in from `licenses/*.txt`; each keeps the placeholder
//! markers of its upstream copy, filled from the [`LicenseHolder`].

use tracing::debug;
use traycraft_core::{
    application::ports::{LicenseHolder, LicenseProvider},
    domain::License,
    error::TraycraftResult,
};

const APACHE_2: &str = include_str!("../../licenses/apache-2.0.txt");
const GPL_2: &str = include_str!("../../licenses/gpl-2.0.txt");
const GPL_3: &str = include_str!("../../licenses/gpl-3.0.txt");
const ISC: &str = include_str!("../../licenses/isc.txt");
const MIT: &str = include_str!("../../licenses/mit.txt");

const GPL_PROGRAM_LINE: &str =
    "<one line to give the program's name and a brief idea of what it does.>";

/// License provider backed by the texts shipped with the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinLicenses;

impl BuiltinLicenses {
    pub fn new() -> Self {
        Self
    }

    /// Raw text with placeholders intact.
    pub fn template(license: License) -> &'static str {
        match license {
            License::Apache2 => APACHE_2,
            License::Gpl2Only => GPL_2,
            License::Gpl3Only => GPL_3,
            License::Isc => ISC,
            License::Mit => MIT,
        }
    }
}

impl LicenseProvider for BuiltinLicenses {
    fn license_text(&self, license: License, holder: &LicenseHolder) -> TraycraftResult<String> {
        let year = holder.year.to_string();
        let text = Self::template(license).trim_start_matches('\n');

        let filled = match license {
            License::Apache2 => text
                .replace("[yyyy]", &year)
                .replace("[name of copyright owner]", &holder.name),
            License::Gpl2Only | License::Gpl3Only => text
                .replace(GPL_PROGRAM_LINE, &holder.program)
                .replace("<program>", &holder.program)
                .replace("<year>", &year)
                .replace("<name of author>", &holder.name),
            License::Isc | License::Mit => text
                .replace("<year>", &year)
                .replace("<name of author>", &holder.name),
        };

        debug!(%license, holder = %holder.name, "License text filled");
        Ok(filled)
    }
}
