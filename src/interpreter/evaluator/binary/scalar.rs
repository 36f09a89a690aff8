use crate::{
    ast::{AdditiveOperator, MultiplicativeOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates `left + right` or `left - right`.
    ///
    /// Both operands must be numbers.
    ///
    /// # Example
    /// ```
    /// use tally::{
    ///     ast::AdditiveOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let r = Context::eval_additive(AdditiveOperator::Sub, &5.0.into(), &7.0.into(), 1);
    /// assert_eq!(r.unwrap(), Value::Number(-2.0));
    /// ```
    pub fn eval_additive(op: AdditiveOperator,
                         left: &Value,
                         right: &Value,
                         line: usize)
                         -> EvalResult<Value> {
        let left = left.as_number(line)?;
        let right = right.as_number(line)?;

        Ok(Value::Number(match op {
                             AdditiveOperator::Add => left + right,
                             AdditiveOperator::Sub => left - right,
                         }))
    }

    /// Evaluates `left * right` or `left / right`.
    ///
    /// # Errors
    /// `ExpectedNumber` if either operand is a boolean, `DivisionByZero` when
    /// dividing by zero.
    pub fn eval_multiplicative(op: MultiplicativeOperator,
                               left: &Value,
                               right: &Value,
                               line: usize)
                               -> EvalResult<Value> {
        let left = left.as_number(line)?;
        let right = right.as_number(line)?;

        match op {
            MultiplicativeOperator::Mul => Ok(Value::Number(left * right)),
            MultiplicativeOperator::Div if right == 0.0 => {
                Err(RuntimeError::DivisionByZero { line })
            },
            MultiplicativeOperator::Div => Ok(Value::Number(left / right)),
        }
    }
}
