/// Mock implementations for testing
mod mock_description_prompt;
mod mock_justification_store;
mod mock_manifest_reader;
mod mock_report_sink;

pub use mock_description_prompt::MockDescriptionPrompt;
pub use mock_justification_store::MockJustificationStore;
pub use mock_manifest_reader::MockManifestReader;
pub use mock_report_sink::MockReportSink;
