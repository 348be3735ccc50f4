use crate::error::{Reporter, ScanError};
use crate::scanner::token::{Literal, Token, TokenKind, keyword_kind};

/// Single-pass maximal-munch scanner over one source string.
///
/// The cursor is the `(start, current, line)` triple: `start` marks the
/// first byte of the lexeme being built, `current` the next unconsumed
/// byte. Disambiguation needs one character of lookahead and never
/// backtracks. A scanner is good for exactly one scan.
pub struct Scanner<'a> {
    source: &'a str,
    reporter: &'a mut dyn Reporter,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str, reporter: &'a mut dyn Reporter) -> Self {
        Self {
            source,
            reporter,
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Consume the entire source. Malformed input is reported and skipped
    /// rather than aborting the pass, so the returned sequence always ends
    /// with an `Eof` token at the last line reached.
    pub fn scan_tokens(mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }
        self.tokens
            .push(Token::new(TokenKind::Eof, "", Literal::Nil, self.line));
        self.tokens
    }

    fn scan_token(&mut self) {
        let Some(c) = self.advance() else {
            return;
        };
        match c {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),
            '!' => {
                let kind = if self.matches('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.add_token(kind);
            }
            '=' => {
                let kind = if self.matches('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                self.add_token(kind);
            }
            '<' => {
                let kind = if self.matches('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.add_token(kind);
            }
            '>' => {
                let kind = if self.matches('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.add_token(kind);
            }
            '/' => {
                if self.matches('/') {
                    // A comment runs to the end of the line. The newline
                    // itself is left for the main loop to count.
                    while self.peek().is_some_and(|c| c != '\n') {
                        self.advance();
                    }
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }
            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,
            '"' => self.string(),
            c if c.is_ascii_digit() => self.number(),
            c if is_identifier_start(c) => self.identifier(),
            _ => self.error(ScanError::UnexpectedCharacter),
        }
    }

    fn string(&mut self) {
        let opening_line = self.line;
        while let Some(c) = self.peek() {
            if c == '"' {
                break;
            }
            if c == '\n' {
                self.line += 1;
            }
            self.advance();
        }
        if self.is_at_end() {
            self.error(ScanError::UnterminatedString);
            return;
        }

        // The closing quote.
        self.advance();

        // The quotes belong to the lexeme but not to the value.
        let value = self.source[self.start + 1..self.current - 1].to_string();
        self.add_token_at(TokenKind::String, Literal::String(value), opening_line);
    }

    fn number(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        // A fractional part counts only if a digit follows the dot, so
        // `123.` stays a number followed by a dot.
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        let value: f64 = self
            .lexeme()
            .parse()
            .expect("digit runs always parse as f64");
        self.add_token_with(TokenKind::Number, Literal::Number(value));
    }

    fn identifier(&mut self) {
        while self.peek().is_some_and(is_identifier_continue) {
            self.advance();
        }
        let kind = keyword_kind(self.lexeme()).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }

    fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.current]
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.add_token_with(kind, Literal::Nil);
    }

    fn add_token_with(&mut self, kind: TokenKind, literal: Literal) {
        self.add_token_at(kind, literal, self.line);
    }

    /// Tokens record the line where their capture began, which for
    /// multi-line strings is the opening quote's line.
    fn add_token_at(&mut self, kind: TokenKind, literal: Literal, line: usize) {
        let token = Token::new(kind, self.lexeme(), literal, line);
        self.tokens.push(token);
    }

    fn error(&mut self, error: ScanError) {
        self.reporter.report(self.line, &error.to_string());
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current += c.len_utf8();
        Some(c)
    }

    /// Consume the next character only if it equals `expected`.
    fn matches(&mut self, expected: char) -> bool {
        match self.peek() {
            Some(c) if c == expected => {
                self.current += c.len_utf8();
                true
            }
            _ => false,
        }
    }

    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.current..].chars();
        chars.next();
        chars.next()
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
