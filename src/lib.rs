//! # tally
//!
//! tally is a small scripting language for numeric expressions written in
//! Rust. It lexes, parses and evaluates programs made of `var`
//! declarations, assignments, arithmetic, comparisons, logical operators,
//! brace-delimited scopes and calls to host-provided functions.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::evaluator::core::{Context, EvalResult};
pub use crate::{
    error::Error,
    interpreter::{lexer::tokenize, parser::parse, value::core::Value},
};

/// Defines the structure of parsed code.
///
/// This module declares the statement and expression types that represent
/// the syntactic structure of source code as a tree, one type per grammar
/// rule. The AST is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines node types for every language construct.
/// - Attaches source lines to nodes for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// One enum per phase, each message carrying the source line, plus an
/// [`Error`] union returned by the session entry points.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// Ties together the lexer, the parser, the evaluator and the runtime value
/// type.
pub mod interpreter;

/// A persistent evaluation session.
///
/// A session owns a [`Context`] whose root scope survives between calls to
/// [`run`](Self::run), which is what a REPL needs: a variable declared on one
/// line is visible on the next.
///
/// # Example
/// ```
/// use tally::{Session, Value};
///
/// let mut session = Session::new();
/// session.run("var a = 1").unwrap();
///
/// assert_eq!(session.run("a = a + 2").unwrap(), Some(Value::Number(3.0)));
/// assert_eq!(session.run("sqrt(a * 3)").unwrap(), Some(Value::Number(3.0)));
/// ```
pub struct Session {
    context: Context,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session with the standard built-ins installed.
    #[must_use]
    pub fn new() -> Self {
        Self { context: Context::with_builtins(), }
    }

    /// Creates a session without any functions.
    #[must_use]
    pub fn bare() -> Self {
        Self { context: Context::new(), }
    }

    /// Lexes, parses and evaluates one unit of source against the session.
    ///
    /// A failing unit stops at its first error. Declarations it made before
    /// failing at the top level are kept; nested scopes are always unwound.
    ///
    /// # Returns
    /// The value of the last statement, or `None` when the source holds no
    /// statement.
    pub fn run(&mut self, source: &str) -> Result<Option<Value>, Error> {
        let tokens = tokenize(source)?;
        let program = parse(&tokens)?;
        Ok(self.context.eval_program(&program)?)
    }

    /// Registers a host function callable from scripts run in this session.
    ///
    /// # Example
    /// ```
    /// use tally::{Session, Value};
    ///
    /// let mut session = Session::bare();
    /// session.register_function("add2", |args, line| {
    ///            Ok(Value::Number(args[0].as_number(line)? + 2.0))
    ///        });
    ///
    /// assert_eq!(session.run("add2(3)").unwrap(), Some(Value::Number(5.0)));
    /// ```
    pub fn register_function(&mut self,
                             name: &str,
                             body: impl Fn(&[Value], usize) -> EvalResult<Value> + 'static) {
        self.context.register_function(name, body);
    }

    /// The evaluation context backing this session.
    #[must_use]
    pub const fn context(&self) -> &Context {
        &self.context
    }
}

/// Runs `source` in a fresh session with the standard built-ins.
///
/// # Examples
/// ```
/// use tally::{Value, run_source};
///
/// assert_eq!(run_source("2 + 3 * 4").unwrap(), Some(Value::Number(14.0)));
///
/// // Example with an intentional error (unknown variable).
/// assert!(run_source("var y = x + 1").is_err());
/// ```
pub fn run_source(source: &str) -> Result<Option<Value>, Error> {
    Session::new().run(source)
}
