//! Formula evaluation engine
//!
//! This module provides the core evaluation logic:
//! - [`evaluator`]: Recursive AST evaluation under one assignment
//! - [`table`]: Exhaustive assignment enumeration and table rendering
//! - [`errors`]: Evaluation error types
//!
//! # Evaluation Model
//!
//! The evaluator walks the AST once per assignment and computes a single
//! boolean. Connectives are total truth functions: both operands of a
//! binary connective are always evaluated, with no short-circuiting.

pub mod errors;
pub mod evaluator;
pub mod table;
