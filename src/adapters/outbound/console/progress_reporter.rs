use crate::ports::outbound::ProgressReporter;
use owo_colors::OwoColorize;
use std::io::IsTerminal;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing progress
/// information to stderr so it doesn't interfere with stdout output.
/// Errors and completions are coloured unless colour is disabled.
#[derive(Debug, Clone, Copy)]
pub struct StderrProgressReporter {
    colored: bool,
}

impl StderrProgressReporter {
    /// Colours output when stderr is a terminal and `NO_COLOR` is unset.
    pub fn new() -> Self {
        let colored = std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal();
        Self { colored }
    }

    pub fn plain() -> Self {
        Self { colored: false }
    }

    fn is_colored(&self) -> bool {
        self.colored
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

    fn report_error(&self, message: &str) {
        if self.is_colored() {
            eprintln!("{}", message.yellow());
        } else {
            eprintln!("{}", message);
        }
    }

    fn report_completion(&self, message: &str) {
        if self.is_colored() {
            eprintln!("{}", message.green());
        } else {
            eprintln!("{}", message);
        }
    }
}
