//! Token definitions for NovaSyntax
//!
//! This module defines all token kinds produced by lexical analysis.

use crate::error::SourceLocation;
use std::fmt;

/// Literal text of the end-of-input marker
pub const EOF_TEXT: &str = "<EOF>";

/// A token in NovaSyntax source
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact matched source text (string contents without the quotes)
    pub text: String,
    /// Position of the first character
    pub location: SourceLocation,
}

impl Token {
    /// Create a new token
    pub fn new(kind: TokenKind, text: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            text: text.into(),
            location,
        }
    }

    /// 1-based line of the token's first character
    pub fn line(&self) -> usize {
        self.location.line
    }

    /// 1-based column of the token's first character
    pub fn column(&self) -> usize {
        self.location.column
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Type: {:?}, Literal: {}, Line: {}, Column: {}",
            self.kind,
            self.text,
            self.line(),
            self.column()
        )
    }
}

/// Token kinds in NovaSyntax
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Basic token kinds
    Identifier,
    Number,
    String,

    // Keywords
    Function, // func
    Let,
    If,
    Else,
    Return,

    // Operators
    Plus,     // +
    Minus,    // -
    Multiply, // *
    Divide,   // /
    Assign,   // =

    // Delimiters
    LParen, // (
    RParen, // )
    LBrace, // {
    RBrace, // }
    Comma,  // ,

    // Special
    EndOfInput,
}

impl TokenKind {
    /// Get the keyword kind for an exact, case-sensitive word
    pub fn keyword(word: &str) -> Option<Self> {
        match word {
            "func" => Some(Self::Function),
            "let" => Some(Self::Let),
            "if" => Some(Self::If),
            "else" => Some(Self::Else),
            "return" => Some(Self::Return),
            _ => None,
        }
    }

    /// Get the kind of a single-character token
    pub fn single_char(c: char) -> Option<Self> {
        match c {
            '(' => Some(Self::LParen),
            ')' => Some(Self::RParen),
            '{' => Some(Self::LBrace),
            '}' => Some(Self::RBrace),
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            '=' => Some(Self::Assign),
            ',' => Some(Self::Comma),
            _ => None,
        }
    }

    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            Self::Function | Self::Let | Self::If | Self::Else | Self::Return
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Identifier => "identifier",
            Self::Number => "number",
            Self::String => "string",
            Self::Function => "func",
            Self::Let => "let",
            Self::If => "if",
            Self::Else => "else",
            Self::Return => "return",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Assign => "=",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Comma => ",",
            Self::EndOfInput => "end of input",
        };
        write!(f, "{}", text)
    }
}
