//! `package.json`
//!
//! The manifest on disk may hold anything, so it is treated as an ordered
//! JSON map. Keys owned by the specification are overwritten in place,
//! unrelated keys keep their position, new keys are appended.

use serde_json::{Map, Value};

use super::{PACKAGE_JSON, to_json};
use crate::{
    application::ApplicationError,
    domain::{Author, Specification},
    error::TraycraftResult,
};

const SCRIPTS: [(&str, &str); 1] = [("tauri", "tauri dev")];
const DEPENDENCIES: [(&str, &str); 1] = [("@tauri-apps/api", "^1.2.0")];
const DEV_DEPENDENCIES: [(&str, &str); 3] = [
    ("@tauri-apps/cli", "^1.2.2"),
    ("@types/node", "^18.7.10"),
    ("typescript", "^4.6.4"),
];

/// Merge the specification into `existing` (the current `package.json`
/// text, if any) and serialize the result.
pub fn derive(spec: &Specification, existing: Option<&str>) -> TraycraftResult<String> {
    let mut manifest = parse_existing(existing)?;

    manifest.insert("name".into(), Value::String(spec.name.clone()));
    manifest.insert("version".into(), Value::String(spec.version.clone()));
    manifest.insert("description".into(), Value::String(spec.description.clone()));
    manifest.insert("license".into(), Value::String(spec.license.to_string()));
    match &spec.author {
        Some(author) => {
            manifest.insert("author".into(), author_value(author));
        }
        None => {
            manifest.shift_remove("author");
        }
    }

    merge_entries(&mut manifest, "scripts", &SCRIPTS)?;
    merge_entries(&mut manifest, "dependencies", &DEPENDENCIES)?;
    merge_entries(&mut manifest, "devDependencies", &DEV_DEPENDENCIES)?;

    to_json(PACKAGE_JSON, &Value::Object(manifest))
}

fn parse_existing(existing: Option<&str>) -> TraycraftResult<Map<String, Value>> {
    let Some(text) = existing.filter(|t| !t.trim().is_empty()) else {
        return Ok(Map::new());
    };

    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(invalid("existing package.json is not a JSON object")),
        Err(e) => Err(invalid(&format!("existing package.json is not valid JSON: {e}"))),
    }
}

/// Only the sub-fields that were supplied.
fn author_value(author: &Author) -> Value {
    let mut map = Map::new();
    for (key, value) in [
        ("name", &author.name),
        ("email", &author.email),
        ("url", &author.url),
    ] {
        if let Some(value) = value {
            map.insert(key.into(), Value::String(value.clone()));
        }
    }
    Value::Object(map)
}

fn merge_entries(
    manifest: &mut Map<String, Value>,
    key: &str,
    entries: &[(&str, &str)],
) -> TraycraftResult<()> {
    let section = manifest
        .entry(key)
        .or_insert_with(|| Value::Object(Map::new()));

    let Value::Object(section) = section else {
        return Err(invalid(&format!("'{key}' in package.json is not an object")));
    };
    for (name, version) in entries {
        section.insert((*name).into(), Value::String((*version).into()));
    }
    Ok(())
}

fn invalid(reason: &str) -> crate::error::TraycraftError {
    ApplicationError::SerializationFailed {
        artifact: PACKAGE_JSON.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AppSpec, License};

    fn spec(author: Option<Author>) -> Specification {
        Specification {
            name: "clip-bar".into(),
            title: None,
            version: "0.2.0".into(),
            license: License::Mit,
            repository: String::new(),
            description: "Clipboard history".into(),
            author,
            app: AppSpec::default(),
        }
    }

    fn parsed(text: &str) -> Value {
        serde_json::from_str(text).unwrap()
    }

    #[test]
    fn missing_manifest_is_empty_base() {
        let pkg = parsed(&derive(&spec(None), None).unwrap());
        assert_eq!(pkg["name"], "clip-bar");
        assert_eq!(pkg["scripts"]["tauri"], "tauri dev");
        assert_eq!(pkg["dependencies"]["@tauri-apps/api"], "^1.2.0");
        assert_eq!(pkg["devDependencies"]["@tauri-apps/cli"], "^1.2.2");
        assert!(pkg.get("author").is_none());
    }

    #[test]
    fn preserves_unrelated_entries() {
        let existing = r#"{
            "private": true,
            "name": "old-name",
            "version": "9.9.9",
            "scripts": { "build": "vite build" },
            "dependencies": { "left-pad": "^1.3.0" },
            "devDependencies": { "vite": "^4.0.0" }
        }"#;
        let pkg = parsed(&derive(&spec(None), Some(existing)).unwrap());

        assert_eq!(pkg["private"], true);
        assert_eq!(pkg["name"], "clip-bar");
        assert_eq!(pkg["version"], "0.2.0");
        assert_eq!(pkg["scripts"]["build"], "vite build");
        assert_eq!(pkg["scripts"]["tauri"], "tauri dev");
        assert_eq!(pkg["dependencies"]["left-pad"], "^1.3.0");
        assert_eq!(pkg["dependencies"]["@tauri-apps/api"], "^1.2.0");
        assert_eq!(pkg["devDependencies"]["vite"], "^4.0.0");
        assert_eq!(pkg["devDependencies"]["@types/node"], "^18.7.10");
        assert_eq!(pkg["devDependencies"]["typescript"], "^4.6.4");
    }

    #[test]
    fn overridden_keys_keep_their_position() {
        let existing = r#"{ "private": true, "version": "9.9.9", "type": "module" }"#;
        let pkg = parsed(&derive(&spec(None), Some(existing)).unwrap());
        let keys: Vec<_> = pkg.as_object().unwrap().keys().cloned().collect();
        assert_eq!(&keys[..3], ["private", "version", "type"]);
        assert_eq!(keys[3], "name");
    }

    #[test]
    fn author_carries_supplied_fields_only() {
        let author = Author {
            name: Some("Ada".into()),
            email: None,
            url: Some("https://ada.dev".into()),
        };
        let pkg = parsed(&derive(&spec(Some(author)), None).unwrap());
        assert_eq!(pkg["author"]["name"], "Ada");
        assert_eq!(pkg["author"]["url"], "https://ada.dev");
        assert!(pkg["author"].get("email").is_none());
    }

    #[test]
    fn existing_author_removed_without_spec_author() {
        let existing = r#"{ "author": "Someone Else" }"#;
        let pkg = parsed(&derive(&spec(None), Some(existing)).unwrap());
        assert!(pkg.get("author").is_none());
    }

    #[test]
    fn non_object_manifest_is_rejected() {
        let err = derive(&spec(None), Some("[1, 2]")).unwrap_err();
        assert!(err.to_string().contains("not a JSON object"));
    }

    #[test]
    fn non_object_scripts_is_rejected() {
        let err = derive(&spec(None), Some(r#"{ "scripts": "make" }"#)).unwrap_err();
        assert!(err.to_string().contains("scripts"));
    }
}
