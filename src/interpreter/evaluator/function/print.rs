use crate::interpreter::{evaluator::core::EvalResult, value::core::Value};

/// Prints the arguments to standard output, separated by spaces.
///
/// Any number of arguments is accepted, booleans included.
///
/// # Returns
/// The last argument, or `0` when called without arguments.
///
/// # Example
/// ```
/// use tally::interpreter::{evaluator::function::print::print, value::core::Value};
///
/// // The function prints the values to stdout, but the doctest
/// // only checks the returned result.
/// let result = print(&[Value::Number(1.0), Value::Bool(true)], 1).unwrap();
///
/// assert_eq!(result, Value::Bool(true));
/// ```
pub fn print(args: &[Value], _line: usize) -> EvalResult<Value> {
    println!("{}", format_arguments(args));
    Ok(args.last().copied().unwrap_or(Value::Number(0.0)))
}

fn format_arguments(args: &[Value]) -> String {
    args.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arguments_are_space_separated() {
        assert_eq!(format_arguments(&[2.0.into(), 0.5.into(), false.into()]), "2 0.5 false");
        assert_eq!(format_arguments(&[]), "");
    }

    #[test]
    fn empty_call_returns_zero() {
        assert_eq!(print(&[], 1), Ok(Value::Number(0.0)));
    }
}
