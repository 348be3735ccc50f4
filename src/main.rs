use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use rlox::error::ConsoleReporter;
use rlox::repl;
use rlox::scanner;

#[derive(Parser, Debug)]
#[command(name = "rlox", about = "A Lox language scanner")]
struct Cli {
    /// Lox source file to scan (omit for REPL)
    file: Option<PathBuf>,
}

// sysexits-style codes: 64 for a usage error, 65 for bad input data.
const EX_USAGE: u8 = 64;
const EX_DATAERR: u8 = 65;

fn run_file(path: &PathBuf) -> Result<ExitCode> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("read source file '{}'", path.display()))?;

    let mut reporter = ConsoleReporter::new();
    for token in scanner::scan(&source, &mut reporter) {
        println!("{token}");
    }

    Ok(if reporter.had_error() {
        ExitCode::from(EX_DATAERR)
    } else {
        ExitCode::SUCCESS
    })
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version print to stdout and are not usage errors.
        Err(e) if !e.use_stderr() => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(EX_USAGE);
        }
    };

    match cli.file {
        Some(path) => run_file(&path).unwrap_or_else(|e| {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }),
        None => {
            repl::run_repl();
            ExitCode::SUCCESS
        }
    }
}
