pub mod lexer;
pub mod token;

use crate::error::Reporter;
use lexer::Scanner;
use token::Token;

/// Scan source code into a list of tokens.
///
/// Lexical errors go to the reporter as they are found; the returned
/// sequence always ends with an `Eof` token no matter how much of the
/// input was malformed.
pub fn scan(source: &str, reporter: &mut dyn Reporter) -> Vec<Token> {
    Scanner::new(source, reporter).scan_tokens()
}
