use crate::application::dto::{ListReport, ManifestRequest};
use crate::justification::domain::DependencySet;
use crate::justification::services::StoreReconciler;
use crate::ports::outbound::{JustificationStore, ManifestReader, ReportKind, ReportSink};
use crate::shared::Result;

/// Marker shown next to dependencies that have no justification yet.
const NEEDS_DESCRIPTION: &str = "Needs description";

/// ListJustificationsUseCase - Report which dependencies are justified
///
/// Prints one padded line per declared dependency with its justification
/// (or a warning marker), followed by the count of unexplained
/// dependencies.
///
/// # Type Parameters
/// * `MR` - ManifestReader implementation
/// * `ST` - JustificationStore implementation
/// * `RS` - ReportSink implementation
pub struct ListJustificationsUseCase<MR, ST, RS> {
    manifest_reader: MR,
    store: ST,
    report_sink: RS,
}

impl<MR, ST, RS> ListJustificationsUseCase<MR, ST, RS>
where
    MR: ManifestReader,
    ST: JustificationStore,
    RS: ReportSink,
{
    /// Creates a new ListJustificationsUseCase with injected dependencies
    pub fn new(manifest_reader: MR, store: ST, report_sink: RS) -> Self {
        Self {
            manifest_reader,
            store,
            report_sink,
        }
    }

    /// Executes the list command
    ///
    /// # Arguments
    /// * `request` - Request carrying the manifest path
    ///
    /// # Returns
    /// ListReport with the declared and unexplained dependency counts
    pub fn execute(&self, request: &ManifestRequest) -> Result<ListReport> {
        let deps = self.manifest_reader.read_dependencies(&request.manifest_path)?;
        let store = self.store.load()?;

        let width = deps.max_label_width();
        for (name, version) in deps.iter() {
            let label = DependencySet::label(name, version);
            match store.get(name) {
                Some(justification) => self.report_sink.report_line(
                    ReportKind::Plain,
                    &format!("{:<width$}  {}", label, justification, width = width),
                ),
                None => self.report_sink.report_line(
                    ReportKind::Warning,
                    &format!("{:<width$}  {}", label, NEEDS_DESCRIPTION, width = width),
                ),
            }
        }

        // Set difference, so the count cannot go negative when the store
        // holds more entries than the manifest declares.
        let unexplained = StoreReconciler::unexplained(&deps, &store).len();
        let kind = if unexplained == 0 {
            ReportKind::Success
        } else {
            ReportKind::Warning
        };
        self.report_sink
            .report_line(kind, &format!("Unexplained dependencies: {}", unexplained));

        Ok(ListReport {
            total: deps.len(),
            unexplained,
        })
    }
}
