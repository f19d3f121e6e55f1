use crate::justification::domain::JustificationMap;
use crate::ports::outbound::JustificationStore;
use crate::shared::error::ExplainerError;
use crate::shared::Result;
use std::fs;
use std::path::PathBuf;

/// Name of the manifest member holding embedded justifications.
const STORE_MEMBER: &str = "explainer";

/// EmbeddedManifestStore adapter keeping justifications inside the manifest
/// itself, under an `explainer` object
///
/// Selected with `location = "manifest"` in the config file. Loading never
/// writes: a manifest without the section reads as an empty map, so
/// read-only commands do not rewrite a file this tool does not own. Saving
/// replaces the section and rewrites the whole manifest document.
pub struct EmbeddedManifestStore {
    manifest_path: PathBuf,
}

impl EmbeddedManifestStore {
    pub fn new(manifest_path: PathBuf) -> Self {
        Self { manifest_path }
    }

    fn read_document(&self) -> Result<serde_json::Value> {
        let content =
            fs::read_to_string(&self.manifest_path).map_err(|e| ExplainerError::StoreReadError {
                path: self.manifest_path.clone(),
                details: e.to_string(),
            })?;

        serde_json::from_str(&content).map_err(|e| {
            ExplainerError::StoreParseError {
                path: self.manifest_path.clone(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl JustificationStore for EmbeddedManifestStore {
    fn load(&self) -> Result<JustificationMap> {
        let document = self.read_document()?;

        match document.get(STORE_MEMBER) {
            Some(section) => serde_json::from_value(section.clone()).map_err(|e| {
                ExplainerError::StoreParseError {
                    path: self.manifest_path.clone(),
                    details: format!("invalid \"{}\" section: {}", STORE_MEMBER, e),
                }
                .into()
            }),
            None => Ok(JustificationMap::new()),
        }
    }

    fn save(&self, map: &JustificationMap) -> Result<()> {
        let mut document = self.read_document()?;

        let object = document
            .as_object_mut()
            .ok_or_else(|| ExplainerError::StoreParseError {
                path: self.manifest_path.clone(),
                details: "manifest root is not a JSON object".to_string(),
            })?;
        object.insert(
            STORE_MEMBER.to_string(),
            serde_json::to_value(map).map_err(|e| ExplainerError::StoreWriteError {
                path: self.manifest_path.clone(),
                details: e.to_string(),
            })?,
        );

        let content = serde_json::to_string_pretty(&document).map_err(|e| {
            ExplainerError::StoreWriteError {
                path: self.manifest_path.clone(),
                details: e.to_string(),
            }
        })?;

        fs::write(&self.manifest_path, content).map_err(|e| {
            ExplainerError::StoreWriteError {
                path: self.manifest_path.clone(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
