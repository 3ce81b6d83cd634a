//! Truth table construction and rendering
//!
//! Builds the complete truth table of a formula and renders it in a
//! markdown-style layout:
//!
//! ```text
//! | a | b | - |
//! | 1 | 1 | 1 |
//! | 1 | 0 | 0 |
//! | 0 | 1 | 0 |
//! | 0 | 0 | 0 |
//! ```
//!
//! Variable columns are sorted by name. The final `-` column holds the
//! formula's value, with `1` for true and `0` for false.

use crate::eval::errors::EvalError;
use crate::eval::evaluator::{evaluate, Environment};
use crate::parser::ast::Expr;
use log::debug;
use std::fmt;

/// One table row: the assignment in column order plus the result.
#[derive(Debug, Clone)]
pub struct Row {
    pub assignment: Vec<bool>,
    pub result: bool,
}

/// A complete truth table, fully materialized before rendering.
#[derive(Debug, Clone)]
pub struct TruthTable {
    variables: Vec<String>,
    rows: Vec<Row>,
}

impl TruthTable {
    /// Build the full truth table for `expr`.
    ///
    /// Column order is the ascending order of the formula's variable
    /// names. Assignments are enumerated with the first column changing
    /// slowest and `true` before `false` in every column, so the all-true
    /// row comes first and the all-false row last. A formula with k
    /// distinct variables yields 2^k rows.
    pub fn build(expr: &Expr) -> Result<TruthTable, EvalError> {
        let mut variables: Vec<String> =
            expr.variables().into_iter().collect();
        variables.sort();

        let count = variables.len();
        debug!("building table: {} variables, {} rows", count, 1usize << count);

        let mut rows = Vec::with_capacity(1usize << count);
        for step in 0..(1usize << count) {
            let mut env = Environment::default();
            let mut assignment = Vec::with_capacity(count);

            for (column, name) in variables.iter().enumerate() {
                // Counting up flips the last column fastest; a clear bit
                // maps to true so the all-true row comes first.
                let mask = 1usize << (count - 1 - column);
                let value = step & mask == 0;
                env.insert(name.clone(), value);
                assignment.push(value);
            }

            let result = evaluate(expr, &env)?;
            rows.push(Row { assignment, result });
        }

        Ok(TruthTable { variables, rows })
    }

    /// Column headers: the formula's variables in ascending order.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// All rows, in enumeration order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|")?;
        for name in &self.variables {
            write!(f, " {} |", name)?;
        }
        writeln!(f, " - |")?;

        for row in &self.rows {
            write!(f, "|")?;
            for value in &row.assignment {
                write!(f, " {} |", if *value { '1' } else { '0' })?;
            }
            writeln!(f, " {} |", if row.result { '1' } else { '0' })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::Lexer;
    use crate::parser::parse::Parser;

    use test_log::test;

    fn build(text: &str) -> TruthTable {
        let mut lexer = Lexer::new(text);
        let tokens = lexer.tokenize().expect("tokenization failed");
        let expr = Parser::new(tokens).parse().expect("parsing failed");
        TruthTable::build(&expr).expect("table construction failed")
    }

    #[test]
    fn test_columns_are_sorted() {
        let table = build("b + a");
        assert_eq!(table.variables(), ["a", "b"]);
    }

    #[test]
    fn test_duplicate_variable_gets_one_column() {
        let table = build("a & a");
        assert_eq!(table.variables(), ["a"]);
        assert_eq!(table.rows().len(), 2);
    }

    #[test]
    fn test_enumeration_order() {
        let table = build("a & b");
        let assignments: Vec<&[bool]> = table
            .rows()
            .iter()
            .map(|row| row.assignment.as_slice())
            .collect();

        assert_eq!(
            assignments,
            [
                &[true, true],
                &[true, false],
                &[false, true],
                &[false, false]
            ]
        );
        let results: Vec<bool> =
            table.rows().iter().map(|row| row.result).collect();
        assert_eq!(results, [true, false, false, false]);
    }

    #[test]
    fn test_row_count_is_exponential() {
        let table = build("a & b & c");
        assert_eq!(table.rows().len(), 8);

        // Every assignment is distinct
        let mut seen: Vec<&[bool]> = table
            .rows()
            .iter()
            .map(|row| row.assignment.as_slice())
            .collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn test_rendering() {
        let table = build("a & b");
        let expected = "\
| a | b | - |
| 1 | 1 | 1 |
| 1 | 0 | 0 |
| 0 | 1 | 0 |
| 0 | 0 | 0 |
";
        assert_eq!(table.to_string(), expected);
    }

    #[test]
    fn test_single_variable_rendering() {
        let table = build("~a");
        let expected = "\
| a | - |
| 1 | 0 |
| 0 | 1 |
";
        assert_eq!(table.to_string(), expected);
    }
}
