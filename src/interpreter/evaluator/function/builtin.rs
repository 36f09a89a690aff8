use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::{
                core::{Arity, NativeFunction},
                print,
            },
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
type BuiltinFn = fn(&[Value], usize) -> EvalResult<Value>;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces `BUILTIN_TABLE` (the static table read by
/// [`install`]) and `BUILTIN_FUNCTIONS` (the public list of names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of every function installed by [`install`].
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "print" => { arity: Arity::AtLeast(0), func: print::print },
    "sqrt"  => { arity: Arity::Exact(1), func: sqrt },
    "pow"   => { arity: Arity::Exact(2), func: pow },
    "abs"   => { arity: Arity::Exact(1), func: abs },
    "min"   => { arity: Arity::Exact(2), func: |args, line| min_max("min", args, line) },
    "max"   => { arity: Arity::Exact(2), func: |args, line| min_max("max", args, line) },
}

/// Registers every builtin in the root scope of `context`.
pub fn install(context: &mut Context) {
    for builtin in BUILTIN_TABLE {
        context.define_function(builtin.name, NativeFunction::new(builtin.arity, builtin.func));
    }
}

/// Computes the square root of a number.
///
/// Negative inputs yield `NaN`.
///
/// # Example
/// ```
/// use tally::interpreter::{evaluator::function::builtin::sqrt, value::core::Value};
///
/// assert_eq!(sqrt(&[Value::Number(9.0)], 1).unwrap(), Value::Number(3.0));
/// ```
pub fn sqrt(args: &[Value], line: usize) -> EvalResult<Value> {
    Ok(Value::Number(number(args, 0, line)?.sqrt()))
}

/// Raises the first argument to the power of the second.
///
/// # Example
/// ```
/// use tally::interpreter::{evaluator::function::builtin::pow, value::core::Value};
///
/// let r = pow(&[Value::Number(2.0), Value::Number(10.0)], 1).unwrap();
/// assert_eq!(r, Value::Number(1024.0));
/// ```
pub fn pow(args: &[Value], line: usize) -> EvalResult<Value> {
    let base = number(args, 0, line)?;
    let exponent = number(args, 1, line)?;
    Ok(Value::Number(base.powf(exponent)))
}

/// Returns the absolute value of a number.
pub fn abs(args: &[Value], line: usize) -> EvalResult<Value> {
    Ok(Value::Number(number(args, 0, line)?.abs()))
}

/// Computes the minimum or maximum of two numbers.
///
/// The operation is selected by the `name` parameter, which must be `"min"` or
/// `"max"`. Any non-numeric argument produces an `ExpectedNumber` error.
///
/// # Parameters
/// - `name`: Either `"min"` or `"max"`.
/// - `args`: Slice containing exactly two arguments.
/// - `line`: Line number for error reporting.
///
/// # Example
/// ```
/// use tally::interpreter::{evaluator::function::builtin::min_max, value::core::Value};
///
/// let r = min_max("min", &[Value::Number(3.0), Value::Number(7.0)], 1).unwrap();
/// assert_eq!(r, Value::Number(3.0));
/// ```
pub fn min_max(name: &str, args: &[Value], line: usize) -> EvalResult<Value> {
    let left = number(args, 0, line)?;
    let right = number(args, 1, line)?;
    let value = if name == "min" { left.min(right) } else { left.max(right) };
    Ok(Value::Number(value))
}

/// Reads argument `index` as a number. A missing argument counts as a
/// non-number, so direct calls that skip the arity check cannot panic.
fn number(args: &[Value], index: usize, line: usize) -> EvalResult<f64> {
    args.get(index)
        .ok_or(RuntimeError::ExpectedNumber { line })?
        .as_number(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(name: &str, args: &[Value]) -> EvalResult<Value> {
        Context::with_builtins().call_function(name, args, 1)
    }

    #[test]
    fn every_builtin_is_installed() {
        let context = Context::with_builtins();
        for name in BUILTIN_FUNCTIONS {
            assert!(context.get_function(name).is_some(), "{name} missing");
        }
    }

    #[test]
    fn numeric_builtins() {
        assert_eq!(call("sqrt", &[16.0.into()]), Ok(Value::Number(4.0)));
        assert_eq!(call("pow", &[3.0.into(), 2.0.into()]), Ok(Value::Number(9.0)));
        assert_eq!(call("abs", &[(-2.5).into()]), Ok(Value::Number(2.5)));
        assert_eq!(call("min", &[1.0.into(), (-1.0).into()]), Ok(Value::Number(-1.0)));
        assert_eq!(call("max", &[1.0.into(), (-1.0).into()]), Ok(Value::Number(1.0)));
    }

    #[test]
    fn booleans_are_rejected() {
        assert_eq!(call("abs", &[true.into()]), Err(RuntimeError::ExpectedNumber { line: 1 }));
    }

    #[test]
    fn arity_is_enforced() {
        assert!(matches!(call("pow", &[1.0.into()]),
                         Err(RuntimeError::ArgumentCountMismatch { found: 1, .. })));
    }

    #[test]
    fn missing_argument_does_not_panic() {
        assert_eq!(sqrt(&[], 3), Err(RuntimeError::ExpectedNumber { line: 3 }));
    }
}
