use crate::application::dto::{ManifestRequest, UpdateReport};
use crate::justification::services::StoreReconciler;
use crate::ports::outbound::{JustificationStore, ManifestReader, ReportKind, ReportSink};
use crate::shared::Result;

/// UpdateStoreUseCase - Seed placeholder entries for newly declared
/// dependencies
///
/// After this command every declared dependency has a store entry; new ones
/// get an empty string so `list` and future `add` runs can fill them in.
/// Existing justifications are never touched. Running it twice in a row
/// adds nothing the second time.
///
/// # Type Parameters
/// * `MR` - ManifestReader implementation
/// * `ST` - JustificationStore implementation
/// * `RS` - ReportSink implementation
pub struct UpdateStoreUseCase<MR, ST, RS> {
    manifest_reader: MR,
    store: ST,
    report_sink: RS,
}

impl<MR, ST, RS> UpdateStoreUseCase<MR, ST, RS>
where
    MR: ManifestReader,
    ST: JustificationStore,
    RS: ReportSink,
{
    /// Creates a new UpdateStoreUseCase with injected dependencies
    pub fn new(manifest_reader: MR, store: ST, report_sink: RS) -> Self {
        Self {
            manifest_reader,
            store,
            report_sink,
        }
    }

    /// Executes the update command
    ///
    /// # Arguments
    /// * `request` - Request carrying the manifest path
    ///
    /// # Returns
    /// UpdateReport listing the dependency names that were seeded
    pub fn execute(&self, request: &ManifestRequest) -> Result<UpdateReport> {
        let deps = self.manifest_reader.read_dependencies(&request.manifest_path)?;
        let mut store = self.store.load()?;

        let added = StoreReconciler::unexplained(&deps, &store);
        for name in &added {
            store.insert(name, "");
            self.report_sink
                .report_line(ReportKind::Notice, &format!("+ {}", name));
        }

        self.store.save(&store)?;

        self.report_sink.report_line(
            ReportKind::Success,
            &format!("Added {} placeholder justification(s)", added.len()),
        );

        Ok(UpdateReport { added })
    }
}
