use crate::justification::domain::JustificationMap;
use crate::ports::outbound::JustificationStore;
use crate::shared::error::ExplainerError;
use crate::shared::Result;
use std::fs;
use std::path::PathBuf;

/// JsonFileStore adapter persisting the justification map as a standalone
/// JSON file (the default `explainer.json` next to the manifest)
///
/// The whole file is rewritten on every save; there is no partial update.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl JustificationStore for JsonFileStore {
    fn load(&self) -> Result<JustificationMap> {
        // First use: create the store with its placeholder entry and persist
        // that initial state before returning it.
        if !self.path.exists() {
            let map = JustificationMap::with_placeholder();
            self.save(&map)?;
            return Ok(map);
        }

        let content = fs::read_to_string(&self.path).map_err(|e| ExplainerError::StoreReadError {
            path: self.path.clone(),
            details: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| {
            ExplainerError::StoreParseError {
                path: self.path.clone(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn save(&self, map: &JustificationMap) -> Result<()> {
        let content =
            serde_json::to_string_pretty(map).map_err(|e| ExplainerError::StoreWriteError {
                path: self.path.clone(),
                details: e.to_string(),
            })?;

        fs::write(&self.path, content).map_err(|e| {
            ExplainerError::StoreWriteError {
                path: self.path.clone(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
