/// A sequence of statements.
///
/// The parser returns one `Block` per program. Braces inside a program
/// produce nested blocks through [`Statement::Block`]; each nested block
/// gets its own scope when evaluated.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Statements in source order.
    pub statements: Vec<Statement>,
    /// Line of the first token of the block.
    pub line:       usize,
}

/// Represents a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A variable declaration using `var`.
    Declaration {
        /// The name of the variable.
        name:        String,
        /// The initial value of the variable.
        initializer: Assignment,
        /// Line number in the source code.
        line:        usize,
    },
    /// A standalone expression evaluated for its result.
    Expression(Assignment),
    /// A brace-delimited nested block.
    Block(Block),
}

/// The `assignment` rule: `name = value` or a plain logical expression.
///
/// Assignment is right-associative, `a = b = 1` nests the second assignment
/// in the `value` of the first.
#[derive(Debug, Clone, PartialEq)]
pub enum Assignment {
    /// Stores a new value into an existing variable.
    Assign {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Passthrough to the next precedence level.
    Logical(Logical),
}

/// The `logical` rule: `&&` and `||` chains.
#[derive(Debug, Clone, PartialEq)]
pub enum Logical {
    /// A binary logical operation. Left-associative.
    Binary {
        /// The operator.
        op:    LogicalOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Comparison,
        /// Line number in the source code.
        line:  usize,
    },
    /// Passthrough to the next precedence level.
    Comparison(Comparison),
}

/// The `comparison` rule: `==`, `!=`, `<` and `>` chains.
#[derive(Debug, Clone, PartialEq)]
pub enum Comparison {
    /// A binary comparison. Left-associative.
    Binary {
        /// The operator.
        op:    ComparisonOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// Passthrough to the next precedence level.
    Expr(Expr),
}

/// The `expr` rule: addition and subtraction.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A binary additive operation. Left-associative.
    Binary {
        /// The operator.
        op:    AdditiveOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Term,
        /// Line number in the source code.
        line:  usize,
    },
    /// Passthrough to the next precedence level.
    Term(Term),
}

/// The `term` rule: multiplication and division.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    /// A binary multiplicative operation. Left-associative.
    Binary {
        /// The operator.
        op:    MultiplicativeOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Factor,
        /// Line number in the source code.
        line:  usize,
    },
    /// Passthrough to the next precedence level.
    Factor(Factor),
}

/// The `factor` rule: the atoms and prefix operators of the language.
#[derive(Debug, Clone, PartialEq)]
pub enum Factor {
    /// A numeric literal, integer or real.
    Number {
        /// The constant value.
        value: f64,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Identifier {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Arithmetic negation, `-x`.
    Negate {
        /// The operand.
        operand: Box<Self>,
        /// Line number in the source code.
        line:    usize,
    },
    /// Logical negation, `!x`.
    Not {
        /// The operand.
        operand: Box<Self>,
        /// Line number in the source code.
        line:    usize,
    },
    /// A parenthesized assignment, `( ... )`.
    Grouping(Box<Assignment>),
    /// Function call expression (e.g. `sqrt(x)`).
    Call {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: FnArgs,
        /// Line number in the source code.
        line:      usize,
    },
}

/// The argument list of a call, in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FnArgs {
    /// One assignment per argument.
    pub arguments: Vec<Assignment>,
}

/// Represents a logical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogicalOperator {
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,
}

/// Represents a comparison operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ComparisonOperator {
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
}

/// Represents an additive operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AdditiveOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
}

/// Represents a multiplicative operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MultiplicativeOperator {
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl Statement {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use tally::ast::{Assignment, Comparison, Expr, Factor, Logical, Statement, Term};
    ///
    /// let factor = Factor::Identifier { name: "x".to_string(),
    ///                                   line: 5, };
    /// let stmt = Statement::Expression(Assignment::Logical(Logical::Comparison(
    ///     Comparison::Expr(Expr::Term(Term::Factor(factor))),
    /// )));
    ///
    /// assert_eq!(stmt.line_number(), 5);
    /// ```
    #[must_use]
    pub fn line_number(&self) -> usize {
        match self {
            Self::Declaration { line, .. } => *line,
            Self::Expression(assignment) => assignment.line_number(),
            Self::Block(block) => block.line,
        }
    }
}

impl Assignment {
    /// Gets the line number from `self`.
    #[must_use]
    pub fn line_number(&self) -> usize {
        match self {
            Self::Assign { line, .. } => *line,
            Self::Logical(logical) => logical.line_number(),
        }
    }
}

impl Logical {
    /// Gets the line number from `self`.
    #[must_use]
    pub fn line_number(&self) -> usize {
        match self {
            Self::Binary { line, .. } => *line,
            Self::Comparison(comparison) => comparison.line_number(),
        }
    }
}

impl Comparison {
    /// Gets the line number from `self`.
    #[must_use]
    pub fn line_number(&self) -> usize {
        match self {
            Self::Binary { line, .. } => *line,
            Self::Expr(expr) => expr.line_number(),
        }
    }
}

impl Expr {
    /// Gets the line number from `self`.
    #[must_use]
    pub fn line_number(&self) -> usize {
        match self {
            Self::Binary { line, .. } => *line,
            Self::Term(term) => term.line_number(),
        }
    }
}

impl Term {
    /// Gets the line number from `self`.
    #[must_use]
    pub fn line_number(&self) -> usize {
        match self {
            Self::Binary { line, .. } => *line,
            Self::Factor(factor) => factor.line_number(),
        }
    }
}

impl Factor {
    /// Gets the line number from `self`.
    #[must_use]
    pub fn line_number(&self) -> usize {
        match self {
            Self::Number { line, .. }
            | Self::Identifier { line, .. }
            | Self::Negate { line, .. }
            | Self::Not { line, .. }
            | Self::Call { line, .. } => *line,
            Self::Grouping(inner) => inner.line_number(),
        }
    }
}

impl std::fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::And => "&&",
            Self::Or => "||",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::Greater => ">",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for AdditiveOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for MultiplicativeOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

impl From<Factor> for Term {
    fn from(factor: Factor) -> Self {
        Self::Factor(factor)
    }
}

impl From<Term> for Expr {
    fn from(term: Term) -> Self {
        Self::Term(term)
    }
}

impl From<Expr> for Comparison {
    fn from(expr: Expr) -> Self {
        Self::Expr(expr)
    }
}

impl From<Comparison> for Logical {
    fn from(comparison: Comparison) -> Self {
        Self::Comparison(comparison)
    }
}

impl From<Logical> for Assignment {
    fn from(logical: Logical) -> Self {
        Self::Logical(logical)
    }
}

/// Lifts a factor through every passthrough level.
///
/// ```
/// use tally::ast::{Assignment, Factor};
///
/// let one = Assignment::from(Factor::Number { value: 1.0,
///                                             line:  1, });
/// assert_eq!(one.line_number(), 1);
/// ```
impl From<Factor> for Assignment {
    fn from(factor: Factor) -> Self {
        Self::Logical(Logical::Comparison(Comparison::Expr(Expr::Term(Term::Factor(factor)))))
    }
}
