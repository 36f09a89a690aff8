use crate::{
    ast::ComparisonOperator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// For `Equal` and `NotEqual`, values are compared structurally, so a
    /// number is never equal to a boolean. The relational operators require
    /// two numbers.
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    /// - `line`: Current line number used for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean result.
    ///
    /// # Example
    /// ```
    /// use tally::{
    ///     ast::ComparisonOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result = Context::eval_compare(ComparisonOperator::Less, &3.0.into(), &5.0.into(), 1);
    ///
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    /// ```
    pub fn eval_compare(op: ComparisonOperator,
                        left: &Value,
                        right: &Value,
                        line: usize)
                        -> EvalResult<Value> {
        Ok(Value::Bool(match op {
                           ComparisonOperator::Equal => left == right,
                           ComparisonOperator::NotEqual => left != right,
                           ComparisonOperator::Less => {
                               left.as_number(line)? < right.as_number(line)?
                           },
                           ComparisonOperator::Greater => {
                               left.as_number(line)? > right.as_number(line)?
                           },
                       }))
    }
}
