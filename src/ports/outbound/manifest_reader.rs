use crate::justification::domain::DependencySet;
use crate::shared::Result;
use std::path::Path;

/// ManifestReader port for loading the declared dependency set
///
/// This port abstracts the file system operations needed to read and parse
/// the dependency manifest.
pub trait ManifestReader {
    /// Reads the manifest at the given path and extracts the unioned set of
    /// declared dependencies
    ///
    /// # Arguments
    /// * `manifest_path` - Path to the manifest file
    ///
    /// # Returns
    /// The dependency set declared by the manifest
    ///
    /// # Errors
    /// Returns an error if:
    /// - The manifest file does not exist
    /// - The file cannot be read due to permissions or I/O errors
    /// - The content is not valid manifest JSON
    fn read_dependencies(&self, manifest_path: &Path) -> Result<DependencySet>;
}
