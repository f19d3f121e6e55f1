use std::collections::BTreeMap;

use super::Manifest;

/// The set of dependencies declared in the manifest, as a mapping from
/// dependency name to version specifier.
///
/// Built fresh on every invocation as the union of the manifest's
/// `dependencies`, `devDependencies`, and (when enabled) `peerDependencies`
/// sections. Later sections win when a name appears more than once.
/// Read-only once constructed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DependencySet {
    entries: BTreeMap<String, String>,
}

impl DependencySet {
    /// Builds the unioned dependency set from a parsed manifest.
    ///
    /// # Arguments
    /// * `manifest` - The parsed manifest
    /// * `include_peer` - Whether to fold `peerDependencies` into the union
    pub fn from_manifest(manifest: &Manifest, include_peer: bool) -> Self {
        let mut entries = BTreeMap::new();
        for (name, version) in &manifest.dependencies {
            entries.insert(name.clone(), version.clone());
        }
        for (name, version) in &manifest.dev_dependencies {
            entries.insert(name.clone(), version.clone());
        }
        if include_peer {
            for (name, version) in &manifest.peer_dependencies {
                entries.insert(name.clone(), version.clone());
            }
        }
        Self { entries }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, version)| (name.as_str(), version.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Display label for one dependency, `name@version`.
    pub fn label(name: &str, version: &str) -> String {
        format!("{}@{}", name, version)
    }

    /// Width of the widest `name@version` label, used for padded report
    /// alignment. Zero for an empty set.
    pub fn max_label_width(&self) -> usize {
        self.iter()
            .map(|(name, version)| Self::label(name, version).chars().count())
            .max()
            .unwrap_or(0)
    }

    #[cfg(test)]
    pub fn from_entries(entries: &[(&str, &str)]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|(n, v)| (n.to_string(), v.to_string()))
                .collect(),
        }
    }
}
