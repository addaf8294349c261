//! `src-tauri/tauri.conf.json`, the bundle descriptor.
//!
//! The window is a borderless, transparent, initially hidden panel that the
//! entry point shows under the tray icon. Only the dev URL, product name,
//! identifier and window size come from the specification.

use serde_json::{Value, json};

use super::{TAURI_CONF_JSON, to_json};
use crate::{domain::Specification, error::TraycraftResult};

const BUNDLE_ICONS: [&str; 5] = [
    "icons/32x32.png",
    "icons/128x128.png",
    "icons/128x128@2x.png",
    "icons/icon.icns",
    "icons/icon.ico",
];

pub fn derive(spec: &Specification) -> TraycraftResult<String> {
    to_json(TAURI_CONF_JSON, &descriptor(spec))
}

fn descriptor(spec: &Specification) -> Value {
    json!({
        "build": {
            "devPath": spec.app.url,
            "distDir": "../dist",
            "withGlobalTauri": false
        },
        "package": {
            "productName": spec.product_name(),
            "version": "0.0.0"
        },
        "tauri": {
            "allowlist": {
                "all": false,
                "shell": {
                    "all": false,
                    "open": true
                }
            },
            "bundle": {
                "active": true,
                "category": "DeveloperTool",
                "copyright": "",
                "deb": {
                    "depends": []
                },
                "externalBin": [],
                "icon": BUNDLE_ICONS,
                "identifier": spec.bundle_identifier(),
                "longDescription": "",
                "macOS": {
                    "entitlements": null,
                    "exceptionDomain": "",
                    "frameworks": [],
                    "providerShortName": null,
                    "signingIdentity": null
                },
                "resources": [],
                "shortDescription": "",
                "targets": "all",
                "windows": {
                    "certificateThumbprint": null,
                    "digestAlgorithm": "sha256",
                    "timestampUrl": ""
                }
            },
            "security": {
                "csp": null
            },
            "updater": {
                "active": false
            },
            "macOSPrivateApi": true,
            "windows": [window(spec)],
            "systemTray": {
                "iconPath": "icons/icon.png",
                "iconAsTemplate": true,
                "menuOnLeftClick": false
            }
        }
    })
}

fn window(spec: &Specification) -> Value {
    json!({
        "fullscreen": false,
        "height": spec.app.window_height(),
        "resizable": false,
        "title": "menubar",
        "width": spec.app.window_width(),
        "visible": false,
        "hiddenTitle": true,
        "decorations": false,
        "focus": false,
        "transparent": true,
        "skipTaskbar": true,
        "alwaysOnTop": true
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AppSpec, License};

    fn spec(width: Option<u32>, height: Option<u32>) -> Specification {
        Specification {
            name: "clip-bar".into(),
            title: Some("Clip Bar".into()),
            version: "1.2.3".into(),
            license: License::Mit,
            repository: String::new(),
            description: String::new(),
            author: None,
            app: AppSpec {
                icon: "icon.png".into(),
                url: "http://localhost:1420".into(),
                width,
                height,
            },
        }
    }

    fn parsed(spec: &Specification) -> Value {
        serde_json::from_str(&derive(spec).unwrap()).unwrap()
    }

    #[test]
    fn window_geometry_defaults() {
        let conf = parsed(&spec(None, None));
        let window = &conf["tauri"]["windows"][0];
        assert_eq!(window["width"], 600);
        assert_eq!(window["height"], 800);
    }

    #[test]
    fn explicit_geometry_is_verbatim() {
        let conf = parsed(&spec(Some(420), Some(360)));
        let window = &conf["tauri"]["windows"][0];
        assert_eq!(window["width"], 420);
        assert_eq!(window["height"], 360);
    }

    #[test]
    fn required_shape_is_present() {
        let conf = parsed(&spec(None, None));
        for key in ["build", "package", "tauri"] {
            assert!(conf.get(key).is_some(), "missing top-level {key}");
        }
        for key in [
            "allowlist",
            "bundle",
            "security",
            "updater",
            "macOSPrivateApi",
            "windows",
            "systemTray",
        ] {
            assert!(conf["tauri"].get(key).is_some(), "missing tauri.{key}");
        }
        assert_eq!(conf["tauri"]["windows"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn spec_fields_flow_through() {
        let conf = parsed(&spec(None, None));
        assert_eq!(conf["build"]["devPath"], "http://localhost:1420");
        assert_eq!(conf["package"]["productName"], "Clip Bar");
        assert_eq!(conf["tauri"]["bundle"]["identifier"], "dev.traycraft.clip-bar");
    }

    #[test]
    fn top_level_keys_keep_declaration_order() {
        let conf = parsed(&spec(None, None));
        let keys: Vec<_> = conf.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["build", "package", "tauri"]);
    }
}
