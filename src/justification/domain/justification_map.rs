use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key of the placeholder entry written when a store is created.
pub const PLACEHOLDER_KEY: &str = "explainer";

/// Text of the placeholder entry written when a store is created.
pub const PLACEHOLDER_TEXT: &str =
    "Keeps track of why each dependency in the manifest is needed";

/// The persistent mapping from dependency name to justification text.
///
/// Serialized as a plain JSON object. BTreeMap keeps the serialized key
/// order stable across read-modify-write cycles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JustificationMap {
    entries: BTreeMap<String, String>,
}

impl JustificationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial store state for first use: a single descriptive placeholder
    /// entry, so a freshly created store file documents itself.
    pub fn with_placeholder() -> Self {
        let mut map = Self::new();
        map.insert(PLACEHOLDER_KEY, PLACEHOLDER_TEXT);
        map
    }

    pub fn insert(&mut self, name: &str, justification: &str) {
        self.entries
            .insert(name.to_string(), justification.to_string());
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.entries.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
