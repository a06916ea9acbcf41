//! Parser implementation
//!
//! Recursive-descent parser for NovaSyntax. A single `parse` call yields at
//! most one top-level node; grammar errors never escape it and are kept in
//! [`Parser::diagnostics`] instead.

use super::ast::*;
use crate::error::{NovaError, NovaResult, ParseErrorKind};
use crate::lexer::{Token, TokenKind};

/// Parser for NovaSyntax tokens
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
    diagnostics: Vec<NovaError>,
}

impl Parser {
    /// Create a new parser from tokens
    ///
    /// Fails with a configuration error when `tokens` is empty.
    pub fn new(tokens: Vec<Token>) -> NovaResult<Self> {
        if tokens.is_empty() {
            return Err(NovaError::config_error("Cannot parse empty token stream"));
        }

        Ok(Self {
            tokens,
            current: 0,
            diagnostics: Vec::new(),
        })
    }

    /// Parse one top-level construct
    ///
    /// Returns `None` at end of input and whenever the tokens do not match
    /// the grammar; the reason for the latter is recorded as a diagnostic.
    pub fn parse(&mut self) -> Option<Node> {
        if self.is_at_end() {
            return None;
        }

        let kind = self.peek().kind;
        match kind {
            TokenKind::Function => self.function_declaration().map(Node::FunctionDeclaration),
            TokenKind::Let => self.variable_declaration().map(Node::VariableDeclaration),
            _ => {
                let expr = self.expression().map(Node::Expression);
                self.absorb(expr)
            }
        }
    }

    /// Parse top-level constructs until end of input, resynchronizing after
    /// each one that fails
    pub fn parse_program(&mut self) -> Vec<Node> {
        let mut nodes = Vec::new();

        while !self.is_at_end() {
            let start = self.current;
            match self.parse() {
                Some(node) => nodes.push(node),
                // A failure that stopped on the next construct resumes there
                None if self.current != start && self.at_construct_start() => {}
                None => self.synchronize(),
            }
        }

        nodes
    }

    /// Grammar errors absorbed so far, oldest first
    pub fn diagnostics(&self) -> &[NovaError] {
        &self.diagnostics
    }

    /// Skip tokens until just after a `}` or before the start of the next
    /// declaration or statement
    pub fn synchronize(&mut self) {
        self.advance();

        while !self.is_at_end() {
            if self.previous().kind == TokenKind::RBrace {
                return;
            }

            if self.at_construct_start() {
                return;
            }
            self.advance();
        }
    }

    fn at_construct_start(&self) -> bool {
        matches!(
            self.peek().kind,
            TokenKind::Function | TokenKind::Let | TokenKind::Return
        )
    }

    // ===== Declarations =====

    fn function_declaration(&mut self) -> Option<FunctionDeclaration> {
        let decl = self.function_declaration_inner();
        self.absorb(decl)
    }

    fn function_declaration_inner(&mut self) -> NovaResult<FunctionDeclaration> {
        self.consume(
            TokenKind::Function,
            "Expect 'func' at the start of function declaration",
        )?;
        let name = self.consume(TokenKind::Identifier, "Expect function name")?.text.clone();
        self.consume(TokenKind::LParen, "Expect '(' after function name")?;

        let mut parameters = Vec::new();
        while !self.is_at_end() && self.peek().kind != TokenKind::RParen {
            let param = self.consume(TokenKind::Identifier, "Expect parameter name")?;
            parameters.push(param.text.clone());

            if self.peek().kind == TokenKind::Comma {
                self.advance();
            }

            if self.is_at_end() {
                return Err(self.error(ParseErrorKind::UnexpectedEndOfInput));
            }
        }

        self.consume(TokenKind::RParen, "Expect ')' after parameters")?;
        self.consume(TokenKind::LBrace, "Expect '{' before function body")?;

        // Bodies hold exactly one expression for now
        let body = self.expression()?;

        self.consume(TokenKind::RBrace, "Expect '}' after function body")?;

        Ok(FunctionDeclaration {
            name,
            parameters,
            body: Box::new(Node::Expression(body)),
        })
    }

    fn variable_declaration(&mut self) -> Option<VariableDeclaration> {
        let decl = self.variable_declaration_inner();
        self.absorb(decl)
    }

    fn variable_declaration_inner(&mut self) -> NovaResult<VariableDeclaration> {
        self.consume(
            TokenKind::Let,
            "Expect 'let' at the start of variable declaration",
        )?;
        let name = self.consume(TokenKind::Identifier, "Expect variable name")?.text.clone();
        self.consume(TokenKind::Assign, "Expect '=' after variable name")?;
        let initializer = self.expression()?;

        Ok(VariableDeclaration {
            name,
            initializer: Box::new(Node::Expression(initializer)),
        })
    }

    // ===== Expressions =====

    fn expression(&mut self) -> NovaResult<Expression> {
        let kind = self.peek().kind;
        match kind {
            // Identifiers are not yet distinguished from numeric literals
            TokenKind::Number | TokenKind::Identifier => {
                Ok(Expression::literal(self.advance().text.clone()))
            }
            TokenKind::String => Ok(Expression::string(self.advance().text.clone())),
            found => Err(self.error(ParseErrorKind::UnexpectedToken(found))),
        }
    }

    // ===== Helper Methods =====

    fn absorb<T>(&mut self, result: NovaResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.diagnostics.push(err);
                None
            }
        }
    }

    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    // Also true on the final element even if it is not the end-of-input
    // token, so a stream missing its marker stops one token early.
    fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len() - 1 || self.peek().kind == TokenKind::EndOfInput
    }

    /// Current token; clamps to the last token when past the end
    fn peek(&self) -> &Token {
        &self.tokens[self.current.min(self.tokens.len() - 1)]
    }

    /// Token before the cursor, or the first token at the start
    fn previous(&self) -> &Token {
        let index = self.current.saturating_sub(1).min(self.tokens.len() - 1);
        &self.tokens[index]
    }

    fn consume(&mut self, kind: TokenKind, message: &str) -> NovaResult<&Token> {
        if !self.is_at_end() && self.peek().kind == kind {
            Ok(self.advance())
        } else {
            let found = self.peek().kind;
            Err(self.error(ParseErrorKind::TokenMismatch {
                expected: kind,
                found,
                message: message.to_string(),
            }))
        }
    }

    fn error(&self, kind: ParseErrorKind) -> NovaError {
        NovaError::parse_error(kind, self.peek().location.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SourceLocation;
    use crate::lexer::Lexer;
    use pretty_assertions::assert_eq;

    /// Build a token stream from (kind, text) pairs plus an end marker
    fn create_tokens(pairs: &[(TokenKind, &str)]) -> Vec<Token> {
        let mut tokens: Vec<Token> = pairs
            .iter()
            .map(|(kind, text)| Token::new(*kind, *text, SourceLocation::at(1, 1)))
            .collect();
        tokens.push(Token::new(TokenKind::EndOfInput, "", SourceLocation::at(1, 1)));
        tokens
    }

    fn parse_source(source: &str) -> (Option<Node>, Parser) {
        let tokens = Lexer::new(source, None).tokenize().unwrap();
        let mut parser = Parser::new(tokens).unwrap();
        let node = parser.parse();
        (node, parser)
    }

    #[test]
    fn test_function_declaration() {
        let tokens = create_tokens(&[
            (TokenKind::Function, "func"),
            (TokenKind::Identifier, "add"),
            (TokenKind::LParen, "("),
            (TokenKind::Identifier, "x"),
            (TokenKind::Comma, ","),
            (TokenKind::Identifier, "y"),
            (TokenKind::RParen, ")"),
            (TokenKind::LBrace, "{"),
            (TokenKind::Identifier, "x"),
            (TokenKind::RBrace, "}"),
        ]);
        let mut parser = Parser::new(tokens).unwrap();

        match parser.parse() {
            Some(Node::FunctionDeclaration(decl)) => {
                assert_eq!(decl.name, "add");
                assert_eq!(decl.parameters, vec!["x".to_string(), "y".to_string()]);
                assert_eq!(*decl.body, Node::Expression(Expression::literal("x")));
            }
            other => panic!("expected function declaration, got {:?}", other),
        }
        assert!(parser.diagnostics().is_empty());
    }

    #[test]
    fn test_function_declaration_from_source() {
        let (node, _) = parse_source("func greet() { \"hi\" }");
        let expected = Node::FunctionDeclaration(FunctionDeclaration {
            name: "greet".to_string(),
            parameters: Vec::new(),
            body: Box::new(Node::Expression(Expression::string("hi"))),
        });
        assert_eq!(node, Some(expected));
    }

    #[test]
    fn test_duplicate_parameters_are_kept() {
        let (node, _) = parse_source("func f(a, a) { a }");
        match node {
            Some(Node::FunctionDeclaration(decl)) => {
                assert_eq!(decl.parameters, vec!["a".to_string(), "a".to_string()]);
            }
            other => panic!("expected function declaration, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_comma_between_parameters() {
        let (node, _) = parse_source("func f(a b) { a }");
        match node {
            Some(Node::FunctionDeclaration(decl)) => {
                assert_eq!(decl.parameters, vec!["a".to_string(), "b".to_string()]);
            }
            other => panic!("expected function declaration, got {:?}", other),
        }
    }

    #[test]
    fn test_variable_declaration() {
        let tokens = create_tokens(&[
            (TokenKind::Let, "let"),
            (TokenKind::Identifier, "x"),
            (TokenKind::Assign, "="),
            (TokenKind::Number, "42"),
        ]);
        let mut parser = Parser::new(tokens).unwrap();

        match parser.parse() {
            Some(Node::VariableDeclaration(decl)) => {
                assert_eq!(decl.name, "x");
                assert_eq!(*decl.initializer, Node::Expression(Expression::literal("42")));
            }
            other => panic!("expected variable declaration, got {:?}", other),
        }
    }

    #[test]
    fn test_string_initializer() {
        let (node, _) = parse_source("let message = \"Hello, NovaSyntax!\"");
        match node {
            Some(Node::VariableDeclaration(decl)) => {
                assert_eq!(
                    *decl.initializer,
                    Node::Expression(Expression::string("Hello, NovaSyntax!"))
                );
            }
            other => panic!("expected variable declaration, got {:?}", other),
        }
    }

    #[test]
    fn test_simple_expression() {
        let tokens = create_tokens(&[(TokenKind::Number, "42")]);
        let mut parser = Parser::new(tokens).unwrap();

        let node = parser.parse().unwrap();
        assert_eq!(node, Node::Expression(Expression::literal("42")));
        assert_eq!(node.describe(), "Expression: 42");
    }

    #[test]
    fn test_identifier_expression_is_literal() {
        let (node, _) = parse_source("total");
        assert_eq!(node, Some(Node::Expression(Expression::literal("total"))));
    }

    #[test]
    fn test_malformed_function_returns_none() {
        let tokens = create_tokens(&[
            (TokenKind::Function, "func"),
            (TokenKind::Identifier, "broken"),
            (TokenKind::LParen, "("),
            (TokenKind::RParen, ")"),
            (TokenKind::Assign, "="),
        ]);
        let mut parser = Parser::new(tokens).unwrap();

        assert_eq!(parser.parse(), None);
        match parser.diagnostics() {
            [NovaError::ParseError {
                kind: ParseErrorKind::TokenMismatch { expected, found, .. },
                ..
            }] => {
                assert_eq!(*expected, TokenKind::LBrace);
                assert_eq!(*found, TokenKind::Assign);
            }
            other => panic!("unexpected diagnostics {:?}", other),
        }
    }

    #[test]
    fn test_operator_expression_returns_none() {
        let (node, parser) = parse_source("+ 1");
        assert_eq!(node, None);
        assert!(matches!(
            parser.diagnostics(),
            [NovaError::ParseError {
                kind: ParseErrorKind::UnexpectedToken(TokenKind::Plus),
                ..
            }]
        ));
    }

    #[test]
    fn test_missing_initializer_returns_none() {
        let (node, parser) = parse_source("let x =");
        assert_eq!(node, None);
        assert!(matches!(
            parser.diagnostics(),
            [NovaError::ParseError {
                kind: ParseErrorKind::UnexpectedToken(TokenKind::EndOfInput),
                ..
            }]
        ));
    }

    #[test]
    fn test_unclosed_parameter_list() {
        let (node, parser) = parse_source("func f(a,");
        assert_eq!(node, None);
        assert!(matches!(
            parser.diagnostics(),
            [NovaError::ParseError {
                kind: ParseErrorKind::UnexpectedEndOfInput,
                ..
            }]
        ));
    }

    #[test]
    fn test_end_of_input_yields_none() {
        let (node, parser) = parse_source("");
        assert_eq!(node, None);
        assert!(parser.diagnostics().is_empty());

        let (node, _) = parse_source("  ;; ");
        assert_eq!(node, None);
    }

    #[test]
    fn test_empty_token_stream_is_rejected() {
        match Parser::new(Vec::new()) {
            Err(NovaError::ConfigError { message }) => {
                assert_eq!(message, "Cannot parse empty token stream");
            }
            Err(other) => panic!("unexpected error {:?}", other),
            Ok(_) => panic!("empty token stream accepted"),
        }
    }

    #[test]
    fn test_stream_without_end_marker_stops_early() {
        // The final element counts as end of input even when it is not
        // the end marker, so the trailing `}` can never be consumed.
        let tokens: Vec<Token> = [
            (TokenKind::Function, "func"),
            (TokenKind::Identifier, "f"),
            (TokenKind::LParen, "("),
            (TokenKind::RParen, ")"),
            (TokenKind::LBrace, "{"),
            (TokenKind::Number, "1"),
            (TokenKind::RBrace, "}"),
        ]
        .iter()
        .map(|(kind, text)| Token::new(*kind, *text, SourceLocation::at(1, 1)))
        .collect();
        let mut parser = Parser::new(tokens).unwrap();

        assert_eq!(parser.parse(), None);
        assert!(matches!(
            parser.diagnostics(),
            [NovaError::ParseError {
                kind: ParseErrorKind::TokenMismatch {
                    expected: TokenKind::RBrace,
                    ..
                },
                ..
            }]
        ));
    }

    #[test]
    fn test_single_token_without_end_marker() {
        let tokens = vec![Token::new(TokenKind::Number, "7", SourceLocation::at(1, 1))];
        let mut parser = Parser::new(tokens).unwrap();
        assert_eq!(parser.parse(), None);
        assert!(parser.diagnostics().is_empty());
    }

    #[test]
    fn test_parse_program() {
        let tokens = Lexer::new(
            "let a = 1\nfunc broken() = 2\nfunc id(v) { v }\nlet s = \"ok\"",
            None,
        )
        .tokenize()
        .unwrap();
        let mut parser = Parser::new(tokens).unwrap();

        let described: Vec<String> = parser.parse_program().iter().map(Node::describe).collect();
        assert_eq!(
            described,
            vec![
                "Variable: a".to_string(),
                "Function: id(v )".to_string(),
                "Variable: s".to_string(),
            ]
        );
        assert_eq!(parser.diagnostics().len(), 1);
    }

    #[test]
    fn test_parse_program_resumes_at_next_declaration() {
        for source in ["let x =\nlet y = 2", "func f(a,\nlet y = 2"] {
            let tokens = Lexer::new(source, None).tokenize().unwrap();
            let mut parser = Parser::new(tokens).unwrap();

            let described: Vec<String> =
                parser.parse_program().iter().map(Node::describe).collect();
            assert_eq!(described, vec!["Variable: y".to_string()], "source {:?}", source);
            assert_eq!(parser.diagnostics().len(), 1);
        }
    }

    #[test]
    fn test_parse_program_skips_unsupported_statements() {
        let tokens = Lexer::new("return x + y\nlet z = 3", None).tokenize().unwrap();
        let mut parser = Parser::new(tokens).unwrap();

        let nodes = parser.parse_program();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].describe(), "Variable: z");
        assert_eq!(parser.diagnostics().len(), 1);
    }

    #[test]
    fn test_synchronize_stops_after_closing_brace() {
        let tokens = Lexer::new("{ 1 } 2", None).tokenize().unwrap();
        let mut parser = Parser::new(tokens).unwrap();

        assert_eq!(parser.parse(), None);
        parser.synchronize();
        assert_eq!(parser.parse(), Some(Node::Expression(Expression::literal("2"))));
        assert_eq!(parser.parse(), None);
    }
}
