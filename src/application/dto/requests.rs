use std::path::PathBuf;

/// Request parameters shared by the report and synchronization commands
#[derive(Debug, Clone)]
pub struct ManifestRequest {
    /// Path to the dependency manifest
    pub manifest_path: PathBuf,
}

impl ManifestRequest {
    pub fn new(manifest_path: PathBuf) -> Self {
        Self { manifest_path }
    }
}

/// Request parameters for adding a justification interactively
#[derive(Debug, Clone)]
pub struct AddRequest {
    /// Path to the dependency manifest
    pub manifest_path: PathBuf,
    /// Name of the dependency to justify; must be declared in the manifest
    pub name: String,
}

impl AddRequest {
    pub fn new(manifest_path: PathBuf, name: String) -> Self {
        Self {
            manifest_path,
            name,
        }
    }
}
