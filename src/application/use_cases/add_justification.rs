use crate::application::dto::AddRequest;
use crate::ports::outbound::{
    DescriptionPrompt, JustificationStore, ManifestReader, ReportKind, ReportSink,
};
use crate::shared::error::ExplainerError;
use crate::shared::Result;

/// AddJustificationUseCase - Interactively attach a justification to one
/// declared dependency
///
/// Validates the name against the manifest before touching the store, then
/// blocks on a single line of operator input and persists the merged map.
/// Re-running for the same name overwrites the previous justification.
///
/// # Type Parameters
/// * `MR` - ManifestReader implementation
/// * `ST` - JustificationStore implementation
/// * `RS` - ReportSink implementation
/// * `DP` - DescriptionPrompt implementation
pub struct AddJustificationUseCase<MR, ST, RS, DP> {
    manifest_reader: MR,
    store: ST,
    report_sink: RS,
    prompt: DP,
}

impl<MR, ST, RS, DP> AddJustificationUseCase<MR, ST, RS, DP>
where
    MR: ManifestReader,
    ST: JustificationStore,
    RS: ReportSink,
    DP: DescriptionPrompt,
{
    /// Creates a new AddJustificationUseCase with injected dependencies
    pub fn new(manifest_reader: MR, store: ST, report_sink: RS, prompt: DP) -> Self {
        Self {
            manifest_reader,
            store,
            report_sink,
            prompt,
        }
    }

    /// Executes the add command
    ///
    /// # Arguments
    /// * `request` - Request carrying the manifest path and dependency name
    ///
    /// # Errors
    /// Returns `ExplainerError::UnknownDependency` without modifying the
    /// store when the name is not declared in the manifest
    pub fn execute(&self, request: &AddRequest) -> Result<()> {
        let deps = self.manifest_reader.read_dependencies(&request.manifest_path)?;

        if !deps.contains(&request.name) {
            return Err(ExplainerError::UnknownDependency {
                name: request.name.clone(),
            }
            .into());
        }

        let mut store = self.store.load()?;

        // The one suspension point: block on a single line of input.
        let description = self.prompt.ask(&format!("Why \"{}\"? ", request.name))?;

        store.insert(&request.name, &description);
        self.store.save(&store)?;

        self.report_sink.report_line(
            ReportKind::Success,
            &format!("Recorded justification for \"{}\"", request.name),
        );

        Ok(())
    }
}
