//! Abstract Syntax Tree definitions
//!
//! This module defines the AST node types for NovaSyntax. Each node owns
//! its children outright; a tree is built once by the parser and never
//! mutated afterwards.

use std::fmt;

/// A top-level construct produced by one `Parser::parse` call
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// func name(params) { body }
    FunctionDeclaration(FunctionDeclaration),
    /// let name = initializer
    VariableDeclaration(VariableDeclaration),
    /// Bare expression
    Expression(Expression),
}

impl Node {
    /// Debug rendering, not meant to round-trip
    pub fn describe(&self) -> String {
        match self {
            Node::FunctionDeclaration(decl) => decl.describe(),
            Node::VariableDeclaration(decl) => decl.describe(),
            Node::Expression(expr) => expr.describe(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDeclaration {
    pub name: String,
    /// Declaration order, duplicates allowed
    pub parameters: Vec<String>,
    pub body: Box<Node>,
}

impl FunctionDeclaration {
    pub fn describe(&self) -> String {
        let mut out = format!("Function: {}(", self.name);
        for param in &self.parameters {
            out.push_str(param);
            out.push(' ');
        }
        out.push(')');
        out
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    pub name: String,
    pub initializer: Box<Node>,
}

impl VariableDeclaration {
    pub fn describe(&self) -> String {
        format!("Variable: {}", self.name)
    }
}

/// Expression kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpressionKind {
    /// Number or identifier text
    Literal,
    /// Contents of a string literal
    StringLiteral,
}

/// Single-token expression; `value` is the token text verbatim
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub kind: ExpressionKind,
    pub value: String,
}

impl Expression {
    pub fn literal(value: impl Into<String>) -> Self {
        Self {
            kind: ExpressionKind::Literal,
            value: value.into(),
        }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self {
            kind: ExpressionKind::StringLiteral,
            value: value.into(),
        }
    }

    pub fn describe(&self) -> String {
        match self.kind {
            ExpressionKind::StringLiteral => format!("String Literal: {}", self.value),
            ExpressionKind::Literal => format!("Expression: {}", self.value),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

impl fmt::Display for FunctionDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

impl fmt::Display for VariableDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}
