/// Domain models for justification tracking
mod dependency_set;
mod justification_map;
mod manifest;

pub use dependency_set::DependencySet;
pub use justification_map::{JustificationMap, PLACEHOLDER_KEY, PLACEHOLDER_TEXT};
pub use manifest::{parse_manifest, Manifest};
