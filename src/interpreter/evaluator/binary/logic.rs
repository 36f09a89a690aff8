use crate::{
    ast::LogicalOperator,
    interpreter::{evaluator::core::Context, value::core::Value},
};

impl Context {
    /// Evaluates `&&` or `||` on two already evaluated operands.
    ///
    /// Both operands are coerced with [`Value::is_truthy`]; the result is
    /// always a boolean.
    ///
    /// # Example
    /// ```
    /// use tally::{
    ///     ast::LogicalOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let r = Context::eval_logic(LogicalOperator::And, &2.0.into(), &true.into());
    /// assert_eq!(r, Value::Bool(true));
    /// ```
    #[must_use]
    pub fn eval_logic(op: LogicalOperator, left: &Value, right: &Value) -> Value {
        let (left, right) = (left.is_truthy(), right.is_truthy());
        Value::Bool(match op {
                        LogicalOperator::And => left && right,
                        LogicalOperator::Or => left || right,
                    })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_false() {
        assert_eq!(Context::eval_logic(LogicalOperator::Or, &0.0.into(), &false.into()),
                   Value::Bool(false));
        assert_eq!(Context::eval_logic(LogicalOperator::Or, &0.0.into(), &1.0.into()),
                   Value::Bool(true));
    }
}
