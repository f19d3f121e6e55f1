//! Configuration file support for explainer.
//!
//! Provides TOML-based configuration through `explainer.config.toml` files,
//! including data structures, file loading, validation, and the resolved
//! settings that drive command wiring.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::shared::Result;

const CONFIG_FILENAME: &str = "explainer.config.toml";

/// Default manifest path, relative to the working directory.
pub const DEFAULT_MANIFEST: &str = "package.json";

/// Default store path for the separate-file variant.
pub const DEFAULT_STORE: &str = "explainer.json";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub manifest: Option<String>,
    pub store: Option<String>,
    pub location: Option<String>,
    pub include_peer_dependencies: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, toml::Value>,
}

/// Where the justification store lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreLocation {
    /// A standalone JSON file next to the manifest (the default)
    Separate,
    /// An `explainer` object embedded in the manifest itself
    Manifest,
}

/// Resolved settings for one invocation.
///
/// Built once in `main` from CLI options, an optional config file, and
/// defaults, then passed into wiring; there is no module-level path state.
#[derive(Debug, Clone)]
pub struct ExplainerConfig {
    pub manifest_path: PathBuf,
    pub store_path: PathBuf,
    pub store_location: StoreLocation,
    pub include_peer_dependencies: bool,
}

impl ExplainerConfig {
    /// Merges CLI options over config-file values over defaults.
    ///
    /// An explicit `--store` on the command line forces the separate-file
    /// store at that path, overriding `location = "manifest"`.
    pub fn resolve(
        cli_manifest: Option<&str>,
        cli_store: Option<&str>,
        file: Option<ConfigFile>,
    ) -> Self {
        let file = file.unwrap_or_default();

        let manifest_path = cli_manifest
            .map(PathBuf::from)
            .or_else(|| file.manifest.as_deref().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST));

        let store_path = cli_store
            .map(PathBuf::from)
            .or_else(|| file.store.as_deref().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE));

        let store_location = if cli_store.is_some() {
            StoreLocation::Separate
        } else if file.location.as_deref() == Some("manifest") {
            StoreLocation::Manifest
        } else {
            StoreLocation::Separate
        };

        Self {
            manifest_path,
            store_path,
            store_location,
            include_peer_dependencies: file.include_peer_dependencies.unwrap_or(false),
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = toml::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid TOML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref location) = config.location {
        if location != "separate" && location != "manifest" {
            bail!(
                "Invalid config: location must be \"separate\" or \"manifest\", got \"{}\".\n\n\
                 💡 Hint: Use \"separate\" for a standalone explainer.json, or \"manifest\" to embed justifications in the manifest.",
                location
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
