//! Parser module
//!
//! This module handles parsing tokens into an Abstract Syntax Tree (AST).

pub mod ast;
pub mod parser;

pub use ast::{Expression, ExpressionKind, FunctionDeclaration, Node, VariableDeclaration};
pub use parser::Parser;
