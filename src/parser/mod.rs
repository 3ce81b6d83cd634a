//! Propositional formula parser
//!
//! This module transforms formula text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (formula text → tokens)
//! - [`parse`]: Parsing (tokens → AST)
//! - [`ast`]: AST node definitions
//!
//! # Formula Language
//!
//! Variables are runs of lowercase ASCII letters. The connectives, from
//! loosest-binding to tightest-binding:
//! - `<=>` equivalence
//! - `=>` implication
//! - `|` NAND
//! - `+` OR
//! - `&` AND
//! - `~` prefix NOT
//!
//! All binary connectives are left-associative; parentheses group.
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with one method per precedence
//! level. No external parser generator dependencies.

pub mod ast;
pub mod expressions;
pub mod lexer;
pub mod parse;
