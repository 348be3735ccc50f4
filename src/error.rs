use thiserror::Error;

/// The two ways a scan can go wrong. Neither aborts the scan: the lexer
/// reports the error and keeps consuming input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("Unexpected character.")]
    UnexpectedCharacter,
    #[error("Unterminated string.")]
    UnterminatedString,
}

/// Capability for receiving line-located diagnostics during a scan.
///
/// The scanner only reports; deciding whether the run failed (and what
/// exit code to use) belongs to whoever owns the reporter.
pub trait Reporter {
    fn report(&mut self, line: usize, message: &str);
}

/// Reporter that prints `[line N] Error: message` to stderr and latches
/// a flag the caller checks afterwards.
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    had_error: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }

    /// Forget earlier errors. The REPL calls this before every line so
    /// one bad line does not poison the next.
    pub fn clear(&mut self) {
        self.had_error = false;
    }
}

impl Reporter for ConsoleReporter {
    fn report(&mut self, line: usize, message: &str) {
        eprintln!("[line {line}] Error: {message}");
        self.had_error = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_error_messages_are_exact() {
        assert_eq!(
            ScanError::UnexpectedCharacter.to_string(),
            "Unexpected character."
        );
        assert_eq!(
            ScanError::UnterminatedString.to_string(),
            "Unterminated string."
        );
    }

    #[test]
    fn console_reporter_latches_errors() {
        let mut reporter = ConsoleReporter::new();
        assert!(!reporter.had_error());

        reporter.report(1, "Unexpected character.");
        assert!(reporter.had_error());

        // Stays latched across further reports.
        reporter.report(7, "Unterminated string.");
        assert!(reporter.had_error());
    }

    #[test]
    fn console_reporter_clear_resets_flag() {
        let mut reporter = ConsoleReporter::new();
        reporter.report(3, "Unterminated string.");
        reporter.clear();
        assert!(!reporter.had_error());
    }
}
