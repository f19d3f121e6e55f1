use crate::ports::outbound::{ReportKind, ReportSink};
use owo_colors::OwoColorize;

/// ConsoleReportSink adapter writing report lines to stdout
///
/// This adapter implements the ReportSink port for the terminal, mapping
/// line kinds to colors. It is the only place in the crate that knows about
/// escape codes.
pub struct ConsoleReportSink;

impl ConsoleReportSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleReportSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSink for ConsoleReportSink {
    fn report_line(&self, kind: ReportKind, text: &str) {
        match kind {
            ReportKind::Plain => println!("{}", text),
            ReportKind::Notice => println!("{}", text.dimmed()),
            ReportKind::Warning => println!("{}", text.yellow()),
            ReportKind::Success => println!("{}", text.green()),
        }
    }
}
