/// Classification of a report line, used by sinks to decide presentation
/// (e.g. terminal colors). The core never emits escape codes itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Regular report content
    Plain,
    /// Secondary information
    Notice,
    /// Something needs operator attention (e.g. a missing justification)
    Warning,
    /// A completed mutation
    Success,
}

/// ReportSink port for user-facing report output
///
/// This port abstracts the output destination so the synchronization logic
/// has no direct dependency on terminal formatting, and tests can capture
/// report lines without touching stdout.
pub trait ReportSink {
    /// Emits one line of report output
    ///
    /// # Arguments
    /// * `kind` - Classification of the line
    /// * `text` - The line content, without a trailing newline
    fn report_line(&self, kind: ReportKind, text: &str);
}
