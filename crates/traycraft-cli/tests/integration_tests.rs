//! End-to-end runs of the `traycraft` binary.

mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use common::{project, traycraft};

const TEXT_OUTPUTS: [&str; 9] = [
    ".vscode/extensions.json",
    "src-tauri/src/main.rs",
    "src-tauri/Cargo.toml",
    "src-tauri/build.rs",
    "src-tauri/tauri.conf.json",
    ".gitignore",
    "LICENSE",
    "package.json",
    "README.md",
];

const ICON_OUTPUTS: [(&str, u32); 4] = [
    ("src-tauri/icons/32x32.png", 32),
    ("src-tauri/icons/128x128.png", 128),
    ("src-tauri/icons/128x128@2x.png", 256),
    ("src-tauri/icons/icon.png", 128),
];

#[test]
fn help_lists_commands() {
    Command::cargo_bin("traycraft")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn version_flag_prints_version() {
    Command::cargo_bin("traycraft")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn generate_writes_every_artifact() {
    let dir = TempDir::new().unwrap();
    project(dir.path());

    traycraft(dir.path())
        .args(["generate", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pnpm tauri dev"));

    for path in TEXT_OUTPUTS {
        assert!(dir.path().join(path).is_file(), "missing {path}");
    }
    for (path, size) in ICON_OUTPUTS {
        let dims = image::image_dimensions(dir.path().join(path)).unwrap();
        assert_eq!(dims, (size, size), "{path}");
    }

    let license = std::fs::read_to_string(dir.path().join("LICENSE")).unwrap();
    assert!(license.contains("Ada"));

    let pkg: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("package.json")).unwrap())
            .unwrap();
    assert_eq!(pkg["name"], "clip-bar");
    assert_eq!(pkg["scripts"]["tauri"], "tauri dev");
}

#[test]
fn generate_twice_is_stable() {
    let dir = TempDir::new().unwrap();
    project(dir.path());

    traycraft(dir.path()).args(["generate", "-y"]).assert().success();
    let first: Vec<_> = TEXT_OUTPUTS
        .iter()
        .map(|p| std::fs::read(dir.path().join(p)).unwrap())
        .collect();

    traycraft(dir.path()).args(["generate", "-y"]).assert().success();
    let second: Vec<_> = TEXT_OUTPUTS
        .iter()
        .map(|p| std::fs::read(dir.path().join(p)).unwrap())
        .collect();

    assert_eq!(first, second);
}

#[test]
fn dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    project(dir.path());

    traycraft(dir.path())
        .args(["generate", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("package.json"));

    assert!(!dir.path().join("package.json").exists());
    assert!(!dir.path().join("src-tauri").exists());
}

#[test]
fn json_output_lists_files_and_icons() {
    let dir = TempDir::new().unwrap();
    project(dir.path());

    let out = traycraft(dir.path())
        .args(["--output-format", "json", "generate", "-y"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["dryRun"], false);
    assert_eq!(report["files"].as_array().unwrap().len(), 9);
    assert_eq!(report["icons"].as_array().unwrap().len(), 4);
}

#[test]
fn root_flag_targets_another_directory() {
    let cwd = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    project(target.path());

    traycraft(cwd.path())
        .args(["generate", "-y", "--root"])
        .arg(target.path())
        .assert()
        .success();

    assert!(target.path().join("README.md").is_file());
    assert!(!cwd.path().join("README.md").exists());
}

#[test]
fn toml_spec_is_accepted() {
    let dir = TempDir::new().unwrap();
    common::write_icon(dir.path());
    std::fs::write(
        dir.path().join(".traycraft/spec.toml"),
        r#"
name = "clip-bar"
version = "0.1.0"
license = "ISC"

[app]
icon = "icon.png"
url = "http://localhost:5173"
"#,
    )
    .unwrap();

    traycraft(dir.path()).args(["generate", "-y"]).assert().success();

    let license = std::fs::read_to_string(dir.path().join("LICENSE")).unwrap();
    assert!(license.starts_with("ISC License"));
}

#[test]
fn init_then_generate() {
    let dir = TempDir::new().unwrap();

    traycraft(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("icon.png"));
    assert!(dir.path().join(".traycraft/spec.json").is_file());

    common::write_icon(dir.path());
    traycraft(dir.path()).args(["generate", "-y"]).assert().success();
    assert!(dir.path().join("src-tauri/tauri.conf.json").is_file());
}

#[test]
fn init_keeps_existing_spec_without_force() {
    let dir = TempDir::new().unwrap();
    common::write_spec(dir.path(), common::SPEC_JSON);

    traycraft(dir.path()).arg("init").assert().success();

    let text = std::fs::read_to_string(dir.path().join(".traycraft/spec.json")).unwrap();
    assert_eq!(text, common::SPEC_JSON);
}

#[test]
fn list_json_names_artifacts() {
    let dir = TempDir::new().unwrap();
    let out = traycraft(dir.path())
        .args(["list", "--format", "json"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let listing: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(listing["artifacts"].as_array().unwrap().len(), 9);
    assert_eq!(listing["icons"][2]["width"], 256);
}

#[test]
fn config_get_reads_environment() {
    let dir = TempDir::new().unwrap();
    traycraft(dir.path())
        .env("TRAYCRAFT_FORMAT__RUSTFMT", "true")
        .args(["config", "get", "format.rustfmt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("format.rustfmt = true"));
}

#[test]
fn completions_for_bash() {
    let dir = TempDir::new().unwrap();
    traycraft(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("traycraft"));
}
