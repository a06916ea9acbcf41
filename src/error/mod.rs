//! Error handling and diagnostics for NovaSyntax
//!
//! This module provides the error types shared by the lexer and parser,
//! plus diagnostic formatting for the command-line driver.

use std::fmt;

use crate::lexer::TokenKind;

pub mod diagnostic;

pub use diagnostic::Diagnostic;

/// Result type alias for NovaSyntax operations
pub type NovaResult<T> = Result<T, NovaError>;

/// Source location information for error reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based)
    pub column: usize,
    /// Optional filename
    pub filename: Option<String>,
}

impl SourceLocation {
    /// Create a new source location
    pub fn new(line: usize, column: usize, filename: Option<String>) -> Self {
        Self {
            line,
            column,
            filename,
        }
    }

    /// Create a source location without a filename
    pub fn at(line: usize, column: usize) -> Self {
        Self::new(line, column, None)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref filename) = self.filename {
            write!(f, "{}:{}:{}", filename, self.line, self.column)
        } else {
            write!(f, "{}:{}", self.line, self.column)
        }
    }
}

/// Failures that abort a whole `tokenize` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    /// `0x` not followed by a hex digit
    InvalidHexLiteral,
    /// `0b` not followed by a binary digit
    InvalidBinaryLiteral,
    /// Exponent marker without a following digit
    InvalidExponent,
    /// Input ended before the closing `"`
    UnterminatedString,
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHexLiteral => write!(f, "Invalid hexadecimal literal"),
            Self::InvalidBinaryLiteral => write!(f, "Invalid binary literal"),
            Self::InvalidExponent => write!(f, "Invalid exponent in number literal"),
            Self::UnterminatedString => write!(f, "Unterminated string"),
        }
    }
}

/// Grammar mismatches raised inside the parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A required token was missing
    TokenMismatch {
        expected: TokenKind,
        found: TokenKind,
        message: String,
    },
    /// The stream ran out inside a construct
    UnexpectedEndOfInput,
    /// The current token cannot start an expression
    UnexpectedToken(TokenKind),
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TokenMismatch {
                expected,
                found,
                message,
            } => write!(f, "{} (expected {}, found {})", message, expected, found),
            Self::UnexpectedEndOfInput => write!(f, "Unexpected end of input"),
            Self::UnexpectedToken(found) => {
                write!(f, "Unexpected token in expression: {}", found)
            }
        }
    }
}

/// Main error type for NovaSyntax
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NovaError {
    /// Lexical analysis error
    LexerError {
        kind: LexErrorKind,
        location: SourceLocation,
    },
    /// Parsing error
    ParseError {
        kind: ParseErrorKind,
        location: SourceLocation,
    },
    /// Invalid construction of a pipeline stage
    ConfigError { message: String },
}

impl NovaError {
    /// Create a new lexer error
    pub fn lexer_error(kind: LexErrorKind, location: SourceLocation) -> Self {
        Self::LexerError { kind, location }
    }

    /// Create a new parse error
    pub fn parse_error(kind: ParseErrorKind, location: SourceLocation) -> Self {
        Self::ParseError { kind, location }
    }

    /// Create a new configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Get the error kind as a string
    pub fn kind(&self) -> &str {
        match self {
            Self::LexerError { .. } => "Lexer Error",
            Self::ParseError { .. } => "Parse Error",
            Self::ConfigError { .. } => "Config Error",
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        match self {
            Self::LexerError { kind, .. } => kind.to_string(),
            Self::ParseError { kind, .. } => kind.to_string(),
            Self::ConfigError { message } => message.clone(),
        }
    }

    /// Get the source location if available
    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            Self::LexerError { location, .. } | Self::ParseError { location, .. } => {
                Some(location)
            }
            Self::ConfigError { .. } => None,
        }
    }
}

impl fmt::Display for NovaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(location) = self.location() {
            write!(f, "{}: {} at {}", self.kind(), self.message(), location)
        } else {
            write!(f, "{}: {}", self.kind(), self.message())
        }
    }
}

impl std::error::Error for NovaError {}
