use thiserror::Error;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Tried to read or assign a variable no active scope declares.
    #[error("Error on line {line}: Unknown variable '{name}'.")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a function no active scope provides.
    #[error("Error on line {line}: Unknown function '{name}'.")]
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Declared a variable the current scope already owns.
    #[error("Error on line {line}: Variable '{name}' is already declared in this scope.")]
    AlreadyDeclared {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A numeric value was expected, but a boolean was found.
    #[error("Error on line {line}: Expected number.")]
    ExpectedNumber {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division by zero.
    #[error("Error on line {line}: Division by zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A host function received the wrong number of arguments.
    #[error("Error on line {line}: Function '{name}' expects {expected} argument(s), found \
             {found}.")]
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// Human readable arity, e.g. `2` or `at least 1`.
        expected: String,
        /// The number of arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
}

impl RuntimeError {
    /// The source line the error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownVariable { line, .. }
            | Self::UnknownFunction { line, .. }
            | Self::AlreadyDeclared { line, .. }
            | Self::ExpectedNumber { line }
            | Self::DivisionByZero { line }
            | Self::ArgumentCountMismatch { line, .. } => *line,
        }
    }
}
