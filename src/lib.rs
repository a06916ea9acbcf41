//! # NovaSyntax
//!
//! Front end for a small curly-brace scripting language:
//! - `lexer`: source text to tokens, with line/column tracking
//! - `parser`: recursive-descent parsing of tokens into an AST
//! - `error`: error types and terminal diagnostics
//!
//! Data flows one way: source text -> [`Lexer`] -> tokens -> [`Parser`] -> [`Node`].

pub mod error;
pub mod lexer;
pub mod parser;

// Re-export commonly used types
pub use error::{NovaError, NovaResult, SourceLocation};
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::{Node, Parser};

/// Version of the NovaSyntax front end
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tokenize and parse every top-level construct in `source`
///
/// Lexical errors abort the whole call. Constructs that do not match the
/// grammar are skipped; use [`Parser::parse_program`] directly to inspect
/// why.
///
/// # Arguments
///
/// * `source` - The source code to parse
/// * `filename` - Optional filename for error reporting
pub fn parse_source(source: &str, filename: Option<&str>) -> NovaResult<Vec<Node>> {
    let tokens = Lexer::new(source, filename).tokenize()?;
    let mut parser = Parser::new(tokens)?;
    Ok(parser.parse_program())
}
