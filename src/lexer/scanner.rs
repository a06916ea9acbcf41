//! Lexer/Scanner implementation for NovaSyntax
//!
//! This module implements lexical analysis, converting source code into tokens.
//! Unrecognized characters are skipped; only malformed numeric literals and
//! unterminated strings abort a scan.

use super::token::{Token, TokenKind, EOF_TEXT};
use crate::error::{LexErrorKind, NovaError, NovaResult, SourceLocation};

/// Lexer for NovaSyntax source code
pub struct Lexer {
    source: Vec<char>,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: usize,
    column: usize,
    start_line: usize,
    start_column: usize,
    filename: Option<String>,
}

impl Lexer {
    /// Create a new lexer
    pub fn new(source: &str, filename: Option<&str>) -> Self {
        Self {
            source: source.chars().collect(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
            column: 1,
            start_line: 1,
            start_column: 1,
            filename: filename.map(|s| s.to_string()),
        }
    }

    /// Tokenize the source code
    ///
    /// The returned sequence always ends with exactly one
    /// [`TokenKind::EndOfInput`] token. Every call starts from the top of the
    /// source, so tokenizing twice yields the same sequence.
    pub fn tokenize(&mut self) -> NovaResult<Vec<Token>> {
        self.tokens.clear();
        self.start = 0;
        self.current = 0;
        self.line = 1;
        self.column = 1;

        while !self.is_at_end() {
            self.start = self.current;
            self.start_line = self.line;
            self.start_column = self.column;
            if let Err(err) = self.scan_token() {
                self.tokens.clear();
                return Err(err);
            }
        }

        let location = self.current_location();
        self.tokens.push(Token::new(TokenKind::EndOfInput, EOF_TEXT, location));

        Ok(std::mem::take(&mut self.tokens))
    }

    /// Scan a single token
    fn scan_token(&mut self) -> NovaResult<()> {
        let c = self.advance();

        match c {
            '\n' => {
                self.line += 1;
                self.column = 1;
                Ok(())
            }

            c if c.is_whitespace() => Ok(()),

            '"' => self.scan_string(),

            c if c.is_ascii_digit() => self.scan_number(c),

            c if c.is_ascii_alphabetic() || c == '_' => self.scan_identifier(),

            c => match TokenKind::single_char(c) {
                Some(kind) => self.add_token(kind),
                // Unknown punctuation is dropped without a token
                None => Ok(()),
            },
        }
    }

    /// Scan a string literal; no escape processing is done
    fn scan_string(&mut self) -> NovaResult<()> {
        while self.peek() != '"' && !self.is_at_end() {
            if self.advance() == '\n' {
                self.line += 1;
                self.column = 1;
            }
        }

        if self.is_at_end() {
            return Err(NovaError::lexer_error(
                LexErrorKind::UnterminatedString,
                self.start_location(),
            ));
        }

        // Consume closing quote
        self.advance();

        let value: String = self.source[self.start + 1..self.current - 1].iter().collect();
        let location = self.start_location();
        self.tokens.push(Token::new(TokenKind::String, value, location));
        Ok(())
    }

    /// Scan a number literal: decimal with optional fraction and exponent,
    /// or a `0x` hexadecimal / `0b` binary literal
    fn scan_number(&mut self, first: char) -> NovaResult<()> {
        if first == '0' {
            if self.match_char('x') || self.match_char('X') {
                return self.scan_radix_digits(
                    |c| c.is_ascii_hexdigit(),
                    LexErrorKind::InvalidHexLiteral,
                );
            }
            if self.match_char('b') || self.match_char('B') {
                return self.scan_radix_digits(
                    |c| c == '0' || c == '1',
                    LexErrorKind::InvalidBinaryLiteral,
                );
            }
        }

        self.skip_while(|c| c.is_ascii_digit());

        if self.match_char('.') {
            self.skip_while(|c| c.is_ascii_digit());
        }

        if self.match_char('e') || self.match_char('E') {
            if !self.match_char('+') {
                self.match_char('-');
            }
            if !self.peek().is_ascii_digit() {
                return Err(self.error(LexErrorKind::InvalidExponent));
            }
            self.skip_while(|c| c.is_ascii_digit());
        }

        self.add_token(TokenKind::Number)
    }

    /// Scan the digits after a radix prefix; at least one is required
    fn scan_radix_digits(
        &mut self,
        is_digit: fn(char) -> bool,
        kind: LexErrorKind,
    ) -> NovaResult<()> {
        if self.is_at_end() || !is_digit(self.peek()) {
            return Err(self.error(kind));
        }
        self.skip_while(is_digit);
        self.add_token(TokenKind::Number)
    }

    /// Scan an identifier or keyword
    fn scan_identifier(&mut self) -> NovaResult<()> {
        self.skip_while(|c| c.is_ascii_alphanumeric() || c == '_');

        let lexeme: String = self.source[self.start..self.current].iter().collect();
        let kind = TokenKind::keyword(&lexeme).unwrap_or(TokenKind::Identifier);

        let location = self.start_location();
        self.tokens.push(Token::new(kind, lexeme, location));
        Ok(())
    }

    /// Add a token whose text is the current lexeme
    fn add_token(&mut self, kind: TokenKind) -> NovaResult<()> {
        let lexeme: String = self.source[self.start..self.current].iter().collect();
        let location = self.start_location();
        self.tokens.push(Token::new(kind, lexeme, location));
        Ok(())
    }

    /// Advance to the next character
    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        self.column += 1;
        c
    }

    /// Consume the next character if it matches
    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.source[self.current] != expected {
            false
        } else {
            self.advance();
            true
        }
    }

    fn skip_while(&mut self, predicate: impl Fn(char) -> bool) {
        while !self.is_at_end() && predicate(self.peek()) {
            self.advance();
        }
    }

    /// Peek at the current character without consuming it
    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.source[self.current]
        }
    }

    /// Check if we've reached the end of the source
    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn start_location(&self) -> SourceLocation {
        SourceLocation::new(self.start_line, self.start_column, self.filename.clone())
    }

    /// Get the current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column, self.filename.clone())
    }

    /// Create an error at the current location
    fn error(&self, kind: LexErrorKind) -> NovaError {
        NovaError::lexer_error(kind, self.current_location())
    }
}
