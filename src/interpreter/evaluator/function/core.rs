use std::{fmt, rc::Rc};

use tracing::trace;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// Signature of a host function body.
///
/// A host function receives the evaluated arguments and the line of the
/// call, and returns a value or a runtime error.
pub type NativeFn = dyn Fn(&[Value], usize) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a host function.
///
/// - `Exact(n)` means the function must receive exactly `n` arguments.
/// - `AtLeast(n)` means the function accepts `n` or more arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many arguments.
    Exact(usize),
    /// This many arguments or more.
    AtLeast(usize),
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    #[must_use]
    pub const fn accepts(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::AtLeast(m) => n >= *m,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

/// A callable provided by the host.
///
/// Cloning is cheap; clones share the same closure.
#[derive(Clone)]
pub struct NativeFunction {
    arity: Arity,
    body:  Rc<NativeFn>,
}

impl NativeFunction {
    /// Wraps `body` with an arity that is checked before every call.
    pub fn new(arity: Arity, body: impl Fn(&[Value], usize) -> EvalResult<Value> + 'static) -> Self {
        Self { arity,
               body: Rc::new(body) }
    }

    /// Wraps `body` without an arity check.
    pub fn variadic(body: impl Fn(&[Value], usize) -> EvalResult<Value> + 'static) -> Self {
        Self::new(Arity::AtLeast(0), body)
    }

    /// The arity this function was registered with.
    #[must_use]
    pub const fn arity(&self) -> Arity {
        self.arity
    }

    /// Checks the arity, then runs the body.
    ///
    /// # Parameters
    /// - `name`: Name the function was called by, for error messages.
    /// - `args`: Evaluated argument values.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// `RuntimeError::ArgumentCountMismatch` when the argument count is not
    /// accepted, otherwise whatever the body returns.
    pub fn call(&self, name: &str, args: &[Value], line: usize) -> EvalResult<Value> {
        if !self.arity.accepts(args.len()) {
            return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                             expected: self.arity.to_string(),
                                                             found: args.len(),
                                                             line });
        }
        (self.body)(args, line)
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFunction")
         .field("arity", &self.arity)
         .finish_non_exhaustive()
    }
}

impl Context {
    /// Registers a host function in the root scope.
    ///
    /// The function accepts any number of arguments; it is responsible for
    /// rejecting the ones it cannot handle.
    ///
    /// # Example
    /// ```
    /// use tally::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let mut context = Context::new();
    /// context.register_function("twice", |args, line| {
    ///            Ok(Value::Number(args[0].as_number(line)? * 2.0))
    ///        });
    ///
    /// let value = context.call_function("twice", &[Value::Number(4.0)], 1).unwrap();
    /// assert_eq!(value, Value::Number(8.0));
    /// ```
    pub fn register_function(&mut self,
                             name: &str,
                             body: impl Fn(&[Value], usize) -> EvalResult<Value> + 'static) {
        self.define_function(name, NativeFunction::variadic(body));
    }

    /// Evaluates a function call on already evaluated arguments.
    ///
    /// The function is resolved by walking the scope stack from the innermost
    /// frame outward.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `args`: Evaluated argument values.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The function result or an error if lookup or arity fails.
    pub fn call_function(&self, name: &str, args: &[Value], line: usize) -> EvalResult<Value> {
        let function = self.get_function(name)
                           .ok_or_else(|| RuntimeError::UnknownFunction { name: name.to_string(),
                                                                          line })?;

        trace!(function = name, args = args.len(), line, "calling native function");
        function.call(name, args, line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_accepts() {
        assert!(Arity::Exact(2).accepts(2));
        assert!(!Arity::Exact(2).accepts(1));
        assert!(Arity::AtLeast(0).accepts(0));
        assert!(Arity::AtLeast(1).accepts(5));
        assert!(!Arity::AtLeast(1).accepts(0));
    }

    #[test]
    fn wrong_argument_count_is_reported() {
        let function = NativeFunction::new(Arity::Exact(1), |args, _| Ok(args[0]));

        assert_eq!(function.call("id", &[], 7),
                   Err(RuntimeError::ArgumentCountMismatch { name:     "id".into(),
                                                             expected: "1".into(),
                                                             found:    0,
                                                             line:     7, }));
    }

    #[test]
    fn unknown_function_is_reported() {
        let context = Context::new();

        assert_eq!(context.call_function("nope", &[], 2),
                   Err(RuntimeError::UnknownFunction { name: "nope".into(),
                                                       line: 2, }));
    }

    #[test]
    fn registration_replaces_previous_function() {
        let mut context = Context::new();
        context.register_function("f", |_, _| Ok(1.0.into()));
        context.register_function("f", |_, _| Ok(2.0.into()));

        assert_eq!(context.call_function("f", &[], 1), Ok(Value::Number(2.0)));
    }
}
