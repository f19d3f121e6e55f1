use crate::justification::domain::{DependencySet, JustificationMap};

/// StoreReconciler - Set operations between the declared dependencies and
/// the justification store
///
/// The two key sets evolve independently (the manifest through normal
/// project work, the store through this tool), so every command starts by
/// computing one of these differences. Both operations are pure; mutation
/// and persistence stay in the use cases and adapters.
pub struct StoreReconciler;

impl StoreReconciler {
    /// Dependency names declared in the manifest that have no entry in the
    /// store. `list` reports these, `update` fills them in.
    pub fn unexplained(deps: &DependencySet, store: &JustificationMap) -> Vec<String> {
        deps.names()
            .filter(|name| !store.contains(name))
            .map(str::to_string)
            .collect()
    }

    /// Store keys that no longer correspond to a declared dependency.
    /// `clean` removes these.
    pub fn stale(deps: &DependencySet, store: &JustificationMap) -> Vec<String> {
        store
            .names()
            .filter(|name| !deps.contains(name))
            .map(str::to_string)
            .collect()
    }
}
