use crate::ports::outbound::ProgressReporter;
use owo_colors::OwoColorize;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing messages
/// to stderr so they don't interfere with output written to stdout.
/// Warnings and errors are coloured.
pub struct StderrProgressReporter;

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_warning(&self, message: &str) {
        eprintln!("{}", format!("⚠️  {}", message).yellow());
    }

    fn report_error(&self, message: &str) {
        eprintln!("{}", message.red());
    }

    fn report_completion(&self, message: &str) {
        eprintln!("{}", format!("✅ {}", message).green());
    }
}
