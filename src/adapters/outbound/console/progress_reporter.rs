use crate::ports::outbound::ProgressReporter;
use owo_colors::OwoColorize;
use std::io::IsTerminal;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Writes to stderr so it doesn't interfere with the dashboard on stdout.
/// Warnings and errors are colored when stderr is a terminal.
pub struct StderrProgressReporter {
    colored: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            colored: std::io::stderr().is_terminal(),
        }
    }

    /// Reporter that never emits ANSI color codes
    pub fn plain() -> Self {
        Self { colored: false }
    }

    fn warning_line(&self, message: &str) -> String {
        let line = format!("⚠️  Warning: {}", message);
        if self.colored {
            line.yellow().to_string()
        } else {
            line
        }
    }

    fn error_line(&self, message: &str) -> String {
        if self.colored {
            message.red().bold().to_string()
        } else {
            message.to_string()
        }
    }

    fn completion_line(&self, message: &str) -> String {
        if self.colored {
            message.green().to_string()
        } else {
            message.to_string()
        }
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
        eprintln!("{}", self.warning_line(message));
    }

    fn report_error(&self, message: &str) {
        eprintln!("{}", self.error_line(message));
    }

    fn report_completion(&self, message: &str) {
        eprintln!();
        eprintln!("{}", self.completion_line(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_lines_have_no_escape_codes() {
        let reporter = StderrProgressReporter::plain();
        assert_eq!(
            reporter.warning_line("component #2: missing license"),
            "⚠️  Warning: component #2: missing license"
        );
        assert_eq!(reporter.error_line("boom"), "boom");
        assert_eq!(reporter.completion_line("done"), "done");
    }

    #[test]
    fn test_colored_lines_wrap_message() {
        let reporter = StderrProgressReporter { colored: true };
        let line = reporter.warning_line("careful");
        assert!(line.contains("careful"));
        assert!(line.contains('\u{1b}'));
    }

    #[test]
    fn test_progress_reporter_does_not_panic() {
        let reporter = StderrProgressReporter::default();
        reporter.report("Test message");
        reporter.report_warning("Test warning");
        reporter.report_error("Test error");
        reporter.report_completion("Test completion");
    }
}
