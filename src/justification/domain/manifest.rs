use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Dependency manifest in the package.json shape.
///
/// Only the sections this tool cares about are modeled; everything else in
/// the file is ignored. Every section is optional.
#[derive(Debug, Deserialize, Default)]
pub struct Manifest {
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: BTreeMap<String, String>,
    #[serde(default, rename = "peerDependencies")]
    pub peer_dependencies: BTreeMap<String, String>,
}

pub fn parse_manifest(content: &str) -> Result<Manifest> {
    serde_json::from_str(content).context("Failed to parse manifest file")
}
