#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;
use image::{Rgba, RgbaImage};

pub const SPEC_JSON: &str = r#"{
  "name": "clip-bar",
  "title": "Clip Bar",
  "version": "0.1.0",
  "license": "MIT",
  "repository": "https://github.com/ada/clip-bar",
  "description": "Clipboard history in the menu bar",
  "author": { "name": "Ada" },
  "app": { "icon": "icon.png", "url": "http://localhost:5173" }
}
"#;

/// A command isolated from the caller's config and environment.
pub fn traycraft(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("traycraft").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".xdg"))
        .env_remove("RUST_LOG")
        .env_remove("TRAYCRAFT_GENERATE__ROOT")
        .env_remove("TRAYCRAFT_GENERATE__SPEC_PATH")
        .env_remove("TRAYCRAFT_FORMAT__RUSTFMT")
        .env_remove("TRAYCRAFT_OUTPUT__FORMAT")
        .env_remove("TRAYCRAFT_OUTPUT__NO_COLOR");
    cmd
}

pub fn write_spec(root: &Path, text: &str) {
    let dir = root.join(".traycraft");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("spec.json"), text).unwrap();
}

pub fn write_icon(root: &Path) {
    let dir = root.join(".traycraft");
    std::fs::create_dir_all(&dir).unwrap();
    RgbaImage::from_pixel(64, 64, Rgba([200, 40, 90, 255]))
        .save(dir.join("icon.png"))
        .unwrap();
}

pub fn project(root: &Path) {
    write_spec(root, SPEC_JSON);
    write_icon(root);
}
