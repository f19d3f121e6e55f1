/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console).
pub mod description_prompt;
pub mod justification_store;
pub mod manifest_reader;
pub mod report_sink;

pub use description_prompt::DescriptionPrompt;
pub use justification_store::JustificationStore;
pub use manifest_reader::ManifestReader;
pub use report_sink::{ReportKind, ReportSink};
