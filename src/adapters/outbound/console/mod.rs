/// Console adapters for report output and interactive input
mod prompt;
mod report_sink;

pub use prompt::StdinPrompt;
pub use report_sink::ConsoleReportSink;
