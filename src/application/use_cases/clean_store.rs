use crate::application::dto::{CleanReport, ManifestRequest};
use crate::justification::services::StoreReconciler;
use crate::ports::outbound::{JustificationStore, ManifestReader, ReportKind, ReportSink};
use crate::shared::Result;

/// CleanStoreUseCase - Remove justifications for dependencies that are no
/// longer declared
///
/// After this command every store key is a declared dependency. Running it
/// twice in a row removes nothing the second time.
///
/// # Type Parameters
/// * `MR` - ManifestReader implementation
/// * `ST` - JustificationStore implementation
/// * `RS` - ReportSink implementation
pub struct CleanStoreUseCase<MR, ST, RS> {
    manifest_reader: MR,
    store: ST,
    report_sink: RS,
}

impl<MR, ST, RS> CleanStoreUseCase<MR, ST, RS>
where
    MR: ManifestReader,
    ST: JustificationStore,
    RS: ReportSink,
{
    /// Creates a new CleanStoreUseCase with injected dependencies
    pub fn new(manifest_reader: MR, store: ST, report_sink: RS) -> Self {
        Self {
            manifest_reader,
            store,
            report_sink,
        }
    }

    /// Executes the clean command
    ///
    /// # Arguments
    /// * `request` - Request carrying the manifest path
    ///
    /// # Returns
    /// CleanReport listing the removed store keys
    pub fn execute(&self, request: &ManifestRequest) -> Result<CleanReport> {
        let deps = self.manifest_reader.read_dependencies(&request.manifest_path)?;
        let mut store = self.store.load()?;

        let removed = StoreReconciler::stale(&deps, &store);
        for name in &removed {
            store.remove(name);
            self.report_sink
                .report_line(ReportKind::Notice, &format!("- {}", name));
        }

        self.store.save(&store)?;

        self.report_sink.report_line(
            ReportKind::Success,
            &format!("Removed {} stale justification(s)", removed.len()),
        );

        Ok(CleanReport { removed })
    }
}
