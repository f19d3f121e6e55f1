/// End-to-end tests for config file loading, CLI option merging, and the
/// embedded-store variant.
///
/// These tests exercise the full flow from config file on disk through CLI
/// invocation to correct output, using `assert_cmd` and `tempfile` for
/// isolated test environments.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

/// Create a minimal package.json for testing.
fn write_manifest(dir: &Path) {
    fs::write(
        dir.join("package.json"),
        r#"{ "dependencies": { "left-pad": "^1.0.0" } }"#,
    )
    .unwrap();
}

/// Write a config file at the specified path.
fn write_config(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

// ============================================================================
// Config discovery
// ============================================================================

#[test]
fn test_discovered_config_sets_store_path() {
    let dir = TempDir::new().unwrap();
    write_manifest(dir.path());
    write_config(
        &dir.path().join("explainer.config.toml"),
        "store = \"docs/why.json\"\n",
    );
    fs::create_dir(dir.path().join("docs")).unwrap();

    cargo_bin_cmd!("explainer")
        .current_dir(dir.path())
        .args(["add", "left-pad"])
        .write_stdin("string padding\n")
        .assert()
        .code(0);

    assert!(dir.path().join("docs/why.json").exists());
    assert!(!dir.path().join("explainer.json").exists());
    let store: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("docs/why.json")).unwrap())
            .unwrap();
    assert_eq!(store["left-pad"], "string padding");
}

#[test]
fn test_explicit_config_path() {
    let dir = TempDir::new().unwrap();
    write_manifest(dir.path());
    write_config(
        &dir.path().join("tooling.toml"),
        "store = \"why.json\"\n",
    );

    cargo_bin_cmd!("explainer")
        .current_dir(dir.path())
        .args(["--config", "tooling.toml", "update"])
        .assert()
        .code(0);

    assert!(dir.path().join("why.json").exists());
}

#[test]
fn test_explicit_config_path_missing_file() {
    let dir = TempDir::new().unwrap();
    write_manifest(dir.path());

    cargo_bin_cmd!("explainer")
        .current_dir(dir.path())
        .args(["--config", "no-such.toml", "list"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn test_invalid_location_value_is_fatal() {
    let dir = TempDir::new().unwrap();
    write_manifest(dir.path());
    write_config(
        &dir.path().join("explainer.config.toml"),
        "location = \"sideways\"\n",
    );

    cargo_bin_cmd!("explainer")
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("location must be"));
}

#[test]
fn test_unknown_config_field_warns_but_runs() {
    let dir = TempDir::new().unwrap();
    write_manifest(dir.path());
    write_config(
        &dir.path().join("explainer.config.toml"),
        "store = \"why.json\"\nsurprise = true\n",
    );

    cargo_bin_cmd!("explainer")
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .code(0)
        .stderr(predicate::str::contains("Unknown config field 'surprise'"));
}

// ============================================================================
// Config-file options
// ============================================================================

#[test]
fn test_include_peer_dependencies_option() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("package.json"),
        r#"
{
  "dependencies": { "left-pad": "^1.0.0" },
  "peerDependencies": { "react": ">=17" }
}
"#,
    )
    .unwrap();
    write_config(
        &dir.path().join("explainer.config.toml"),
        "include_peer_dependencies = true\n",
    );

    cargo_bin_cmd!("explainer")
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("react@>=17"))
        .stdout(predicate::str::contains("Unexplained dependencies: 2"));
}

#[test]
fn test_config_manifest_path() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("frontend");
    fs::create_dir(&nested).unwrap();
    write_manifest(&nested);
    write_config(
        &dir.path().join("explainer.config.toml"),
        "manifest = \"frontend/package.json\"\n",
    );

    cargo_bin_cmd!("explainer")
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("left-pad@^1.0.0"));
}

// ============================================================================
// Embedded-store variant
// ============================================================================

#[test]
fn test_embedded_location_stores_in_manifest() {
    let dir = TempDir::new().unwrap();
    write_manifest(dir.path());
    write_config(
        &dir.path().join("explainer.config.toml"),
        "location = \"manifest\"\n",
    );

    cargo_bin_cmd!("explainer")
        .current_dir(dir.path())
        .args(["add", "left-pad"])
        .write_stdin("string padding\n")
        .assert()
        .code(0);

    // The justification landed inside the manifest, not a side file.
    assert!(!dir.path().join("explainer.json").exists());
    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("package.json")).unwrap())
            .unwrap();
    assert_eq!(manifest["dependencies"]["left-pad"], "^1.0.0");
    assert_eq!(manifest["explainer"]["left-pad"], "string padding");

    cargo_bin_cmd!("explainer")
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Unexplained dependencies: 0"));
}

#[test]
fn test_embedded_location_list_does_not_rewrite_manifest() {
    let dir = TempDir::new().unwrap();
    write_manifest(dir.path());
    write_config(
        &dir.path().join("explainer.config.toml"),
        "location = \"manifest\"\n",
    );
    let before = fs::read_to_string(dir.path().join("package.json")).unwrap();

    cargo_bin_cmd!("explainer")
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Unexplained dependencies: 1"));

    assert_eq!(
        fs::read_to_string(dir.path().join("package.json")).unwrap(),
        before
    );
    assert!(!dir.path().join("explainer.json").exists());
}

#[test]
fn test_cli_store_option_overrides_embedded_location() {
    let dir = TempDir::new().unwrap();
    write_manifest(dir.path());
    write_config(
        &dir.path().join("explainer.config.toml"),
        "location = \"manifest\"\n",
    );
    let before = fs::read_to_string(dir.path().join("package.json")).unwrap();

    cargo_bin_cmd!("explainer")
        .current_dir(dir.path())
        .args(["--store", "why.json", "update"])
        .assert()
        .code(0);

    assert!(dir.path().join("why.json").exists());
    assert_eq!(
        fs::read_to_string(dir.path().join("package.json")).unwrap(),
        before
    );
}
