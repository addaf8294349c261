//! `README.md`

use serde_json::Value;

use super::README_MD;
use crate::{application::ApplicationError, domain::Specification, error::TraycraftResult};

/// Handlebars source rendered against [`context`].
pub const TEMPLATE: &str = include_str!("../../../templates/readme.md.hbs");

/// Template data: the specification as written, plus the product name.
pub fn context(spec: &Specification) -> TraycraftResult<Value> {
    let mut value = serde_json::to_value(spec).map_err(|e| ApplicationError::SerializationFailed {
        artifact: README_MD.to_string(),
        reason: e.to_string(),
    })?;

    if let Value::Object(map) = &mut value {
        map.insert("productName".into(), Value::String(spec.product_name().into()));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AppSpec, License};

    #[test]
    fn context_carries_spec_and_product_name() {
        let spec = Specification {
            name: "clip-bar".into(),
            title: None,
            version: "0.1.0".into(),
            license: License::Isc,
            repository: String::new(),
            description: "History".into(),
            author: None,
            app: AppSpec::default(),
        };
        let ctx = context(&spec).unwrap();
        assert_eq!(ctx["name"], "clip-bar");
        assert_eq!(ctx["description"], "History");
        assert_eq!(ctx["license"], "ISC");
        assert_eq!(ctx["productName"], "clip-bar");
    }

    #[test]
    fn template_guards_optional_description() {
        assert!(TEMPLATE.contains("{{#if description}}"));
        assert!(TEMPLATE.contains("pnpm tauri dev"));
        assert!(!TEMPLATE.contains("repository"));
    }
}
