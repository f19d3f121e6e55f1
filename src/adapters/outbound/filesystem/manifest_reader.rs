use crate::justification::domain::{parse_manifest, DependencySet};
use crate::ports::outbound::ManifestReader;
use crate::shared::error::ExplainerError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemManifestReader adapter for reading the manifest from disk
///
/// Holds the section-selection flag so the port stays a pure
/// path-to-dependency-set contract.
pub struct FileSystemManifestReader {
    include_peer_dependencies: bool,
}

impl FileSystemManifestReader {
    pub fn new(include_peer_dependencies: bool) -> Self {
        Self {
            include_peer_dependencies,
        }
    }
}

impl ManifestReader for FileSystemManifestReader {
    fn read_dependencies(&self, manifest_path: &Path) -> Result<DependencySet> {
        if !manifest_path.exists() {
            return Err(ExplainerError::ManifestNotFound {
                path: manifest_path.to_path_buf(),
                suggestion: format!(
                    "No manifest at \"{}\".\n   \
                     Please run in the root directory of the project, or point at the manifest with the --manifest option.",
                    manifest_path.display()
                ),
            }
            .into());
        }

        let content =
            fs::read_to_string(manifest_path).map_err(|e| ExplainerError::ManifestParseError {
                path: manifest_path.to_path_buf(),
                details: e.to_string(),
            })?;

        let manifest =
            parse_manifest(&content).map_err(|e| ExplainerError::ManifestParseError {
                path: manifest_path.to_path_buf(),
                details: e.to_string(),
            })?;

        Ok(DependencySet::from_manifest(
            &manifest,
            self.include_peer_dependencies,
        ))
    }
}
