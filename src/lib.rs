pub mod ast;
pub mod error;
pub mod repl;
pub mod scanner;

// Re-export error types for convenience
pub use error::{ConsoleReporter, Reporter, ScanError};
