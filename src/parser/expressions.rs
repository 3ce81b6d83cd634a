//! Formula parsing implementation
//!
//! This module handles parsing of propositional formulas using recursive
//! descent with one method per precedence level.
//!
//! # Grammar
//!
//! From loosest-binding to tightest-binding:
//!
//! ```text
//! equivalence := implication ( "<=>" implication )*
//! implication := nand        ( "=>"  nand        )*
//! nand        := or          ( "|"   or          )*
//! or          := and         ( "+"   and         )*
//! and         := not         ( "&"   not         )*
//! not         := "~" not | primary
//! primary     := "(" equivalence ")" | VARIABLE
//! ```
//!
//! Each binary level loops over its own connective and folds repeats into
//! a left-leaning tree, which makes every binary connective
//! left-associative. Prefix `~` recurses into itself instead, so stacked
//! negations nest to the right.
//!
//! All parsing methods extend the [`Parser`] struct through a second
//! `impl` block; only the entry point, `parse_equivalence`, is visible
//! outside this module.

use crate::parser::ast::*;
use crate::parser::lexer::Token;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse equivalence (<=>), the loosest-binding connective
    pub(crate) fn parse_equivalence(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_implication()?;

        while self.match_token(&Token::Equiv(self.current_location())) {
            let loc = self.previous_location();
            let right = Box::new(self.parse_implication()?);
            left = Expr::BinaryOp {
                op: BinOp::Equiv,
                left: Box::new(left),
                right,
                location: loc,
            };
        }

        Ok(left)
    }

    /// Parse implication (=>)
    fn parse_implication(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_nand()?;

        while self.match_token(&Token::Implies(self.current_location())) {
            let loc = self.previous_location();
            let right = Box::new(self.parse_nand()?);
            left = Expr::BinaryOp {
                op: BinOp::Implies,
                left: Box::new(left),
                right,
                location: loc,
            };
        }

        Ok(left)
    }

    /// Parse NAND (|)
    fn parse_nand(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_or()?;

        while self.match_token(&Token::Nand(self.current_location())) {
            let loc = self.previous_location();
            let right = Box::new(self.parse_or()?);
            left = Expr::BinaryOp {
                op: BinOp::Nand,
                left: Box::new(left),
                right,
                location: loc,
            };
        }

        Ok(left)
    }

    /// Parse OR (+)
    fn parse_or(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_and()?;

        while self.match_token(&Token::Or(self.current_location())) {
            let loc = self.previous_location();
            let right = Box::new(self.parse_and()?);
            left = Expr::BinaryOp {
                op: BinOp::Or,
                left: Box::new(left),
                right,
                location: loc,
            };
        }

        Ok(left)
    }

    /// Parse AND (&), the tightest-binding binary connective
    fn parse_and(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_not()?;

        while self.match_token(&Token::And(self.current_location())) {
            let loc = self.previous_location();
            let right = Box::new(self.parse_not()?);
            left = Expr::BinaryOp {
                op: BinOp::And,
                left: Box::new(left),
                right,
                location: loc,
            };
        }

        Ok(left)
    }

    /// Parse prefix negation (~)
    fn parse_not(&mut self) -> Result<Expr, ParseError> {
        let loc = self.current_location();

        if self.match_token(&Token::Not(loc)) {
            let operand = Box::new(self.parse_not()?);
            return Ok(Expr::Not {
                operand,
                location: loc,
            });
        }

        self.parse_primary()
    }

    /// Parse primary (variables and parenthesized formulas)
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let loc = self.current_location();

        // Variable
        if let Token::Variable(name, loc) = self.peek_token() {
            self.advance();
            return Ok(Expr::Variable(name, loc));
        }

        // Parenthesized formula
        if self.match_token(&Token::LParen(loc)) {
            let expr = self.parse_equivalence()?;
            self.expect_token(
                &Token::RParen(self.current_location()),
                "Expected ')' after formula",
            )?;
            return Ok(expr);
        }

        Err(ParseError {
            message: format!("Expected a variable or '(', found {}", self.peek()),
            location: loc,
        })
    }
}
