use explainer::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ReportSink for testing that captures report lines
#[derive(Default, Clone)]
pub struct MockReportSink {
    lines: Arc<Mutex<Vec<(ReportKind, String)>>>,
}

impl MockReportSink {
    pub fn new() -> Self {
        Self {
            lines: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn lines(&self) -> Vec<(ReportKind, String)> {
        self.lines.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap()
            .iter()
            .map(|(_, text)| text.clone())
            .collect()
    }
}

impl ReportSink for MockReportSink {
    fn report_line(&self, kind: ReportKind, text: &str) {
        self.lines.lock().unwrap().push((kind, text.to_string()));
    }
}
