use explainer::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock JustificationStore for testing that keeps the map in memory
///
/// Clones share the same state, so tests can hold a handle while the use
/// case owns another.
#[derive(Clone)]
pub struct MockJustificationStore {
    state: Arc<Mutex<JustificationMap>>,
    save_count: Arc<Mutex<usize>>,
    fail_load: bool,
    fail_save: bool,
}

impl MockJustificationStore {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(JustificationMap::new())),
            save_count: Arc::new(Mutex::new(0)),
            fail_load: false,
            fail_save: false,
        }
    }

    pub fn with_entries(entries: &[(&str, &str)]) -> Self {
        let store = Self::new();
        {
            let mut map = store.state.lock().unwrap();
            for (name, text) in entries {
                map.insert(name, text);
            }
        }
        store
    }

    pub fn with_load_failure() -> Self {
        Self {
            fail_load: true,
            ..Self::new()
        }
    }

    pub fn with_save_failure() -> Self {
        Self {
            fail_save: true,
            ..Self::new()
        }
    }

    /// Current persisted state.
    pub fn snapshot(&self) -> JustificationMap {
        self.state.lock().unwrap().clone()
    }

    /// Number of times save() was called.
    pub fn save_count(&self) -> usize {
        *self.save_count.lock().unwrap()
    }
}

impl JustificationStore for MockJustificationStore {
    fn load(&self) -> Result<JustificationMap> {
        if self.fail_load {
            anyhow::bail!("Failed to read justification store (mock failure)");
        }
        Ok(self.state.lock().unwrap().clone())
    }

    fn save(&self, map: &JustificationMap) -> Result<()> {
        if self.fail_save {
            anyhow::bail!("Failed to write justification store (mock failure)");
        }
        *self.state.lock().unwrap() = map.clone();
        *self.save_count.lock().unwrap() += 1;
        Ok(())
    }
}
