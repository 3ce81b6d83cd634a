//! Recursive formula evaluation
//!
//! Evaluates an AST under a single total assignment of truth values. The
//! walk computes one boolean per call; enumerating assignments is the
//! job of [`table`](crate::eval::table).

use crate::eval::errors::EvalError;
use crate::parser::ast::Expr;
use rustc_hash::FxHashMap;

/// A total assignment of truth values to a formula's variables, used for
/// one evaluation and discarded afterwards.
pub type Environment = FxHashMap<String, bool>;

/// Evaluate `expr` under `env`.
///
/// Every variable occurring in `expr` must be bound in `env`; an unbound
/// variable is an [`EvalError`], not a panic. Both operands of a binary
/// connective are always evaluated.
pub fn evaluate(expr: &Expr, env: &Environment) -> Result<bool, EvalError> {
    match expr {
        Expr::Variable(name, location) => {
            env.get(name)
                .copied()
                .ok_or_else(|| EvalError::UndefinedVariable {
                    name: name.clone(),
                    location: *location,
                })
        }
        Expr::Not { operand, .. } => Ok(!evaluate(operand, env)?),
        Expr::BinaryOp {
            op, left, right, ..
        } => {
            let left = evaluate(left, env)?;
            let right = evaluate(right, env)?;
            Ok(op.apply(left, right))
        }
    }
}
