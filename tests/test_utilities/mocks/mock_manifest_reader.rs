use explainer::prelude::*;
use std::path::Path;

/// Mock ManifestReader for testing that parses canned manifest content
pub struct MockManifestReader {
    content: Option<String>,
}

impl MockManifestReader {
    pub fn new(content: String) -> Self {
        Self {
            content: Some(content),
        }
    }

    pub fn with_failure() -> Self {
        Self { content: None }
    }
}

impl ManifestReader for MockManifestReader {
    fn read_dependencies(&self, _manifest_path: &Path) -> Result<DependencySet> {
        match &self.content {
            Some(content) => {
                let manifest = parse_manifest(content)?;
                Ok(DependencySet::from_manifest(&manifest, false))
            }
            None => anyhow::bail!("Failed to read manifest (mock failure)"),
        }
    }
}
