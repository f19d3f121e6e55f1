/// Filesystem adapters for manifest and store I/O
mod embedded_store;
mod json_store;
mod manifest_reader;

pub use embedded_store::EmbeddedManifestStore;
pub use json_store::JsonFileStore;
pub use manifest_reader::FileSystemManifestReader;
