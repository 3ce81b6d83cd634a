//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including the error type, helper methods, and the main parse entry point.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following organization:
//! - This module: Parser struct, helper methods, and coordination
//! - `expressions`: One parsing method per precedence level
//!
//! Parser methods are split across the two files using `impl Parser` blocks,
//! allowing `expressions` to extend the Parser while sharing its state.

use crate::parser::ast::*;
use crate::parser::lexer::Token;
use log::debug;
use std::fmt;

/// Parser error type
#[derive(Debug)]
pub struct ParseError {
    pub message: String,
    pub location: SourceLocation,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parse error at line {}, column {}: {}",
            self.location.line, self.location.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}

/// Recursive descent parser for propositional formulas
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    /// Create a parser over a token stream.
    ///
    /// The stream must be terminated by [`Token::Eof`], as produced by
    /// [`Lexer::tokenize`]. Taking tokens rather than text keeps lexical
    /// and grammatical failures as distinct error types for callers.
    ///
    /// [`Lexer::tokenize`]: crate::parser::lexer::Lexer::tokenize
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Parse one complete formula.
    ///
    /// The whole token stream must be consumed: anything left over after
    /// the formula (such as a stray closing parenthesis) is an error
    /// rather than silently ignored trailing input.
    pub fn parse(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_equivalence()?;

        if !self.is_at_end() {
            return Err(ParseError {
                message: format!(
                    "Unexpected token after formula: {}",
                    self.peek()
                ),
                location: self.current_location(),
            });
        }

        debug!("parsed formula: {}", expr);
        Ok(expr)
    }

    // ===== Helper methods =====

    pub(crate) fn match_token(&mut self, token: &Token) -> bool {
        if std::mem::discriminant(self.peek())
            == std::mem::discriminant(token)
        {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn check(&self, token: &Token) -> bool {
        std::mem::discriminant(self.peek()) == std::mem::discriminant(token)
    }

    pub(crate) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.position += 1;
        }
        self.previous()
    }

    pub(crate) fn is_at_end(&self) -> bool {
        matches!(self.peek(), Token::Eof(_))
    }

    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.position]
    }

    pub(crate) fn peek_token(&self) -> Token {
        self.tokens[self.position].clone()
    }

    pub(crate) fn previous(&self) -> &Token {
        &self.tokens[self.position - 1]
    }

    pub(crate) fn previous_location(&self) -> SourceLocation {
        self.previous().location()
    }

    pub(crate) fn current_location(&self) -> SourceLocation {
        self.peek().location()
    }

    pub(crate) fn expect_token(
        &mut self,
        token: &Token,
        message: &str,
    ) -> Result<(), ParseError> {
        if self.check(token) {
            self.advance();
            Ok(())
        } else {
            Err(ParseError {
                message: format!("{}, found {}", message, self.peek()),
                location: self.current_location(),
            })
        }
    }
}
