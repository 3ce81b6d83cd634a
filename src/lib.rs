//! # Introduction
//!
//! veritab parses a one-line propositional-logic formula and prints its
//! complete truth table as a markdown-style grid. Formulas combine
//! lowercase variables with NOT (`~`), AND (`&`), OR (`+`), NAND (`|`),
//! IMPLIES (`=>`) and EQUIV (`<=>`); parentheses group.
//!
//! ## Pipeline
//!
//! ```text
//! Formula → Lexer → Parser → AST → Evaluator → TruthTable
//! ```
//!
//! 1. [`parser`]: tokenizes the formula and builds an AST.
//! 2. [`eval`]: evaluates the AST under every assignment of its
//!    variables and collects the rows into an [`eval::table::TruthTable`].
//!
//! ## Table layout
//!
//! One column per variable in ascending name order, then a `-` column for
//! the formula's value. Rows enumerate every assignment with the first
//! column changing slowest: the all-true row comes first and the
//! all-false row last. Cells show `1` for true and `0` for false.

pub mod eval;
pub mod parser;
