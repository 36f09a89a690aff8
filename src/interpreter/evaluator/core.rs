use crate::{
    ast::{Assignment, Block, Comparison, Expr, Factor, FnArgs, Logical, Statement, Term},
    error::RuntimeError,
    interpreter::{
        evaluator::{function::builtin, scope::Scope},
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// The context owns a stack of [`Scope`] frames. The bottom frame is the root
/// scope: host functions are registered there and, in a session, top-level
/// declarations live there across evaluations. Every nested block pushes a
/// frame on entry and pops it on exit.
///
/// ## Usage
///
/// `Context` is created once and reused for evaluating programs. Each call
/// to [`eval_program`](Self::eval_program) sees the bindings left behind by
/// the previous ones.
pub struct Context {
    pub(crate) scope_stack: Vec<Scope>,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a context with a single empty root scope and no functions.
    #[must_use]
    pub fn new() -> Self {
        Self { scope_stack: vec![Scope::default()], }
    }

    /// Creates a context whose root scope holds the standard built-ins
    /// (`print`, `sqrt`, `pow`, `abs`, `min`, `max`).
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut context = Self::new();
        builtin::install(&mut context);
        context
    }

    /// Evaluates a top-level program.
    ///
    /// The statements run directly in the current frame, so declarations made
    /// here stay visible to later programs evaluated against the same
    /// context. Nested blocks inside the program still get their own frames.
    ///
    /// # Returns
    /// The value of the last statement, or `None` for an empty program.
    ///
    /// # Example
    /// ```
    /// use tally::interpreter::{
    ///     evaluator::core::Context, lexer::tokenize, parser::parse, value::core::Value,
    /// };
    ///
    /// let mut context = Context::new();
    /// let first = parse(&tokenize("var a = 1").unwrap()).unwrap();
    /// let second = parse(&tokenize("a = a + 1").unwrap()).unwrap();
    ///
    /// context.eval_program(&first).unwrap();
    /// assert_eq!(context.eval_program(&second).unwrap(), Some(Value::Number(2.0)));
    /// ```
    pub fn eval_program(&mut self, program: &Block) -> EvalResult<Option<Value>> {
        self.eval_statements(&program.statements)
    }

    /// Evaluates a nested block in a fresh child scope.
    ///
    /// The child frame is popped again whether the block succeeds or fails,
    /// so an error inside a block never leaves its bindings behind.
    ///
    /// # Returns
    /// The value of the last statement, or `None` for an empty block.
    pub fn eval_block(&mut self, block: &Block) -> EvalResult<Option<Value>> {
        self.push_scope();
        let result = self.eval_statements(&block.statements);
        self.pop_scope();
        result
    }

    fn eval_statements(&mut self, statements: &[Statement]) -> EvalResult<Option<Value>> {
        let mut last = None;
        for statement in statements {
            last = self.eval_statement(statement)?;
        }
        Ok(last)
    }

    /// Evaluates a single statement.
    ///
    /// Declarations bind the initializer's value in the current frame and
    /// yield it. Expression statements yield their value. Nested blocks yield
    /// the value of their last statement.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Option<Value>> {
        match statement {
            Statement::Declaration { name,
                                     initializer,
                                     line, } => {
                let value = self.eval_assignment(initializer)?;
                self.declare_variable(name, value, *line)?;
                Ok(Some(value))
            },
            Statement::Expression(assignment) => Ok(Some(self.eval_assignment(assignment)?)),
            Statement::Block(block) => self.eval_block(block),
        }
    }

    /// Evaluates the `assignment` level.
    ///
    /// An assignment evaluates its right-hand side first, then stores it in
    /// the nearest frame that declares the name. It never creates a binding.
    pub fn eval_assignment(&mut self, assignment: &Assignment) -> EvalResult<Value> {
        match assignment {
            Assignment::Assign { name, value, line } => {
                let value = self.eval_assignment(value)?;
                self.assign_variable(name, value, *line)?;
                Ok(value)
            },
            Assignment::Logical(logical) => self.eval_logical(logical),
        }
    }

    /// Evaluates the `logical` level. Both operands are always evaluated.
    pub fn eval_logical(&mut self, logical: &Logical) -> EvalResult<Value> {
        match logical {
            Logical::Binary { op, left, right, .. } => {
                let left = self.eval_logical(left)?;
                let right = self.eval_comparison(right)?;
                Ok(Self::eval_logic(*op, &left, &right))
            },
            Logical::Comparison(comparison) => self.eval_comparison(comparison),
        }
    }

    /// Evaluates the `comparison` level.
    pub fn eval_comparison(&mut self, comparison: &Comparison) -> EvalResult<Value> {
        match comparison {
            Comparison::Binary { op,
                                 left,
                                 right,
                                 line, } => {
                let left = self.eval_comparison(left)?;
                let right = self.eval_expr(right)?;
                Self::eval_compare(*op, &left, &right, *line)
            },
            Comparison::Expr(expr) => self.eval_expr(expr),
        }
    }

    /// Evaluates the `expr` level.
    pub fn eval_expr(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Binary { op,
                           left,
                           right,
                           line, } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_term(right)?;
                Self::eval_additive(*op, &left, &right, *line)
            },
            Expr::Term(term) => self.eval_term(term),
        }
    }

    /// Evaluates the `term` level.
    pub fn eval_term(&mut self, term: &Term) -> EvalResult<Value> {
        match term {
            Term::Binary { op,
                           left,
                           right,
                           line, } => {
                let left = self.eval_term(left)?;
                let right = self.eval_factor(right)?;
                Self::eval_multiplicative(*op, &left, &right, *line)
            },
            Term::Factor(factor) => self.eval_factor(factor),
        }
    }

    /// Evaluates a factor.
    ///
    /// Identifiers and calls resolve their names by walking the scope stack
    /// from the innermost frame outward.
    pub fn eval_factor(&mut self, factor: &Factor) -> EvalResult<Value> {
        match factor {
            Factor::Number { value, .. } => Ok(Value::Number(*value)),
            Factor::Identifier { name, line } => {
                self.get_variable(name)
                    .copied()
                    .ok_or_else(|| RuntimeError::UnknownVariable { name: name.clone(),
                                                                   line: *line, })
            },
            Factor::Negate { operand, line } => {
                let value = self.eval_factor(operand)?;
                Self::eval_negate(&value, *line)
            },
            Factor::Not { operand, .. } => {
                let value = self.eval_factor(operand)?;
                Ok(Self::eval_not(&value))
            },
            Factor::Grouping(inner) => self.eval_assignment(inner),
            Factor::Call { name,
                           arguments,
                           line, } => {
                let values = self.eval_arguments(arguments)?;
                self.call_function(name, &values, *line)
            },
        }
    }

    /// Evaluates call arguments left to right in the current scope.
    pub fn eval_arguments(&mut self, arguments: &FnArgs) -> EvalResult<Vec<Value>> {
        arguments.arguments
                 .iter()
                 .map(|argument| self.eval_assignment(argument))
                 .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::{lexer::tokenize, parser::parse};

    fn run(context: &mut Context, source: &str) -> EvalResult<Option<Value>> {
        let program = parse(&tokenize(source).unwrap()).unwrap();
        context.eval_program(&program)
    }

    #[test]
    fn empty_program_has_no_value() {
        assert_eq!(run(&mut Context::new(), ""), Ok(None));
    }

    #[test]
    fn declaration_yields_its_value() {
        assert_eq!(run(&mut Context::new(), "var a = 3 * 2"), Ok(Some(Value::Number(6.0))));
    }

    #[test]
    fn block_pops_its_scope_on_error() {
        let mut context = Context::new();
        run(&mut context, "var a = 1").unwrap();

        let err = run(&mut context, "{ var b = 2 c }").unwrap_err();
        assert_eq!(err,
                   RuntimeError::UnknownVariable { name: "c".into(),
                                                   line: 1, });
        assert_eq!(context.depth(), 1);
        assert!(context.get_variable("b").is_none());
        assert_eq!(context.get_variable("a"), Some(&Value::Number(1.0)));
    }

    #[test]
    fn arguments_are_evaluated_before_lookup() {
        let err = run(&mut Context::new(), "nope(x)").unwrap_err();
        assert!(matches!(err, RuntimeError::UnknownVariable { .. }));
    }

    #[test]
    fn assignment_inside_argument_mutates_outer_scope() {
        let mut context = Context::with_builtins();
        run(&mut context, "var a = 1").unwrap();
        assert_eq!(run(&mut context, "abs(a = -4) + a"), Ok(Some(Value::Number(0.0))));
        assert_eq!(context.get_variable("a"), Some(&Value::Number(-4.0)));
    }
}
