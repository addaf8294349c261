//! `LICENSE`

use crate::{application::ports::LicenseHolder, domain::Specification};

pub fn holder(spec: &Specification, year: i32) -> LicenseHolder {
    LicenseHolder {
        name: spec.license_holder(),
        year,
        program: spec.product_name().to_string(),
    }
}
