use crate::justification::domain::JustificationMap;
use crate::shared::Result;

/// JustificationStore port for the persisted name-to-justification mapping
///
/// This port abstracts where justifications live (a side file next to the
/// manifest, or a section embedded inside the manifest itself). Commands
/// follow a read-modify-write cycle through this interface.
pub trait JustificationStore {
    /// Loads the persisted justification map
    ///
    /// Implementations for media that support first-use initialization
    /// create the store (with a placeholder entry) and persist that initial
    /// state before returning it.
    ///
    /// # Errors
    /// Returns an error if the underlying medium is unreadable for a reason
    /// other than "does not exist", or if the persisted content is malformed
    fn load(&self) -> Result<JustificationMap>;

    /// Persists the justification map, overwriting the previous state
    ///
    /// # Arguments
    /// * `map` - The map to persist
    ///
    /// # Errors
    /// Returns an error on write failure; the write is not retried
    fn save(&self, map: &JustificationMap) -> Result<()>;
}
