use std::io::{self, BufRead, Write};

use crate::error::ConsoleReporter;
use crate::scanner;
use crate::scanner::token::Token;

/// Run the interactive prompt. Each line is scanned independently; the
/// error flag is cleared before every line so one bad line does not
/// poison the next.
pub fn run_repl() {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut reporter = ConsoleReporter::new();

    loop {
        print!("> ");
        stdout.flush().expect("flush stdout");

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // Ctrl-D / EOF
            Ok(_) => {}
            Err(e) => {
                eprintln!("read error: {e}");
                break;
            }
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        for token in scan_line(trimmed, &mut reporter) {
            println!("{token}");
        }
    }
}

/// One REPL step: forget the previous line's errors, then scan.
fn scan_line(source: &str, reporter: &mut ConsoleReporter) -> Vec<Token> {
    reporter.clear();
    scanner::scan(source, reporter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::token::TokenKind;

    #[test]
    fn error_flag_resets_between_lines() {
        let mut reporter = ConsoleReporter::new();

        let tokens = scan_line("var x = @;", &mut reporter);
        assert!(reporter.had_error());
        // The bad character is skipped; everything around it still scans.
        assert_eq!(tokens.len(), 5); // var x = ; EOF

        let tokens = scan_line("var y = 2;", &mut reporter);
        assert!(!reporter.had_error(), "a prior line's error must not stick");
        assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
    }
}
