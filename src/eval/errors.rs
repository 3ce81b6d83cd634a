//! Evaluation error types
//!
//! This module defines [`EvalError`], which represents errors that can occur
//! while evaluating a parsed formula (as opposed to lex or parse errors).
//!
//! The truth-table builder binds every free variable before evaluating, so
//! these errors are only reachable when driving the evaluator directly with
//! a hand-built environment.

use crate::parser::ast::SourceLocation;
use std::fmt;

/// Errors that can occur during formula evaluation
#[derive(Debug, Clone)]
pub enum EvalError {
    /// Variable not bound in the evaluation environment
    UndefinedVariable {
        name: String,
        location: SourceLocation,
    },
}

impl EvalError {
    pub fn location(&self) -> SourceLocation {
        match self {
            EvalError::UndefinedVariable { location, .. } => *location,
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::UndefinedVariable { name, location } => {
                write!(
                    f,
                    "Undefined variable '{}' at line {}",
                    name, location.line
                )
            }
        }
    }
}

impl std::error::Error for EvalError {}
