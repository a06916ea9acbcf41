//! Lexical analysis module
//!
//! This module handles tokenization of NovaSyntax source code.

pub mod token;
pub mod scanner;

pub use token::{Token, TokenKind, EOF_TEXT};
pub use scanner::Lexer;
