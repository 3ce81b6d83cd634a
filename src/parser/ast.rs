// AST (Abstract Syntax Tree) definitions for propositional formulas

use rustc_hash::FxHashSet;
use std::fmt;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Binary connectives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    And,     // &
    Or,      // +
    Nand,    // |
    Implies, // =>
    Equiv,   // <=>
}

impl BinOp {
    /// The connective's concrete syntax.
    pub fn symbol(&self) -> &'static str {
        match self {
            BinOp::And => "&",
            BinOp::Or => "+",
            BinOp::Nand => "|",
            BinOp::Implies => "=>",
            BinOp::Equiv => "<=>",
        }
    }

    /// Apply the connective's truth function.
    ///
    /// Connectives are total truth functions over already-evaluated
    /// operands; there is no short-circuiting anywhere in evaluation.
    pub fn apply(&self, left: bool, right: bool) -> bool {
        match self {
            BinOp::And => left && right,
            BinOp::Or => left || right,
            BinOp::Nand => !(left && right),
            BinOp::Implies => !left || right,
            BinOp::Equiv => left == right,
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// AST nodes representing formulas
#[derive(Debug, Clone)]
pub enum Expr {
    Variable(String, SourceLocation),
    Not {
        operand: Box<Expr>,
        location: SourceLocation,
    },
    BinaryOp {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
        location: SourceLocation,
    },
}

impl Expr {
    /// Get the source location of this node
    pub fn location(&self) -> SourceLocation {
        match self {
            Expr::Variable(_, loc) => *loc,
            Expr::Not { location, .. } => *location,
            Expr::BinaryOp { location, .. } => *location,
        }
    }

    /// The set of variable names occurring in this formula.
    ///
    /// A name counts once no matter how often it occurs. The caller is
    /// responsible for imposing an order on the result.
    pub fn variables(&self) -> FxHashSet<String> {
        let mut vars = FxHashSet::default();
        self.collect_variables(&mut vars);
        vars
    }

    fn collect_variables(&self, vars: &mut FxHashSet<String>) {
        match self {
            Expr::Variable(name, _) => {
                vars.insert(name.clone());
            }
            Expr::Not { operand, .. } => {
                operand.collect_variables(vars);
            }
            Expr::BinaryOp { left, right, .. } => {
                left.collect_variables(vars);
                right.collect_variables(vars);
            }
        }
    }
}

/// Renders a formula in fully parenthesized form, e.g. `((a & b) + ~c)`.
/// The output parses back to the same tree shape.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Variable(name, _) => write!(f, "{}", name),
            Expr::Not { operand, .. } => write!(f, "~{}", operand),
            Expr::BinaryOp {
                op, left, right, ..
            } => {
                write!(f, "({} {} {})", left, op, right)
            }
        }
    }
}
