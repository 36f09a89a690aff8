use crate::interpreter::{
    evaluator::core::{Context, EvalResult},
    value::core::Value,
};

impl Context {
    /// Evaluates arithmetic negation.
    ///
    /// # Errors
    /// `ExpectedNumber` if the operand is a boolean.
    pub fn eval_negate(value: &Value, line: usize) -> EvalResult<Value> {
        Ok(Value::Number(-value.as_number(line)?))
    }

    /// Evaluates logical NOT on the truthiness of the operand.
    ///
    /// # Example
    /// ```
    /// use tally::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// assert_eq!(Context::eval_not(&0.0.into()), Value::Bool(true));
    /// ```
    #[must_use]
    pub fn eval_not(value: &Value) -> Value {
        Value::Bool(!value.is_truthy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RuntimeError;

    #[test]
    fn negate_flips_sign() {
        assert_eq!(Context::eval_negate(&2.0.into(), 1), Ok(Value::Number(-2.0)));
        assert_eq!(Context::eval_negate(&true.into(), 1),
                   Err(RuntimeError::ExpectedNumber { line: 1 }));
    }

    #[test]
    fn not_coerces() {
        assert_eq!(Context::eval_not(&true.into()), Value::Bool(false));
        assert_eq!(Context::eval_not(&3.0.into()), Value::Bool(false));
    }
}
