use crate::ports::outbound::ProgressReporter;
use owo_colors::{OwoColorize, Stream};

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing progress
/// information to stderr so it doesn't interfere with the rendered view
/// on stdout. Warnings and errors are colored when stderr supports it.
#[derive(Debug, Default)]
pub struct StderrProgressReporter {
    quiet: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    /// A reporter that drops progress lines but still shows warnings
    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message);
        }
    }

    fn report_error(&self, message: &str) {
        eprintln!(
            "{}",
            message.if_supports_color(Stream::Stderr, |text| text.yellow())
        );
    }

    fn report_completion(&self, message: &str) {
        if !self.quiet {
            eprintln!(
                "{}",
                message.if_supports_color(Stream::Stderr, |text| text.green())
            );
        }
    }
}
