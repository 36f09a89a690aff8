/// Lexing errors.
///
/// Raised while turning source text into tokens: characters the language
/// does not know, a lone `&` or `|`, and malformed numeric literals.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree from
/// a token sequence. Parse errors include unexpected tokens, missing tokens
/// after `var`, unclosed parentheses or braces and trailing input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: unknown
/// names, re-declarations, type mismatches, division by zero and argument
/// count mismatches in host functions.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure of the lex → parse → evaluate pipeline.
///
/// Every phase stops at its first error, so a unit of source text fails with
/// exactly one of these.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The source text could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The token sequence is not a valid program.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The program failed while it was being evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// The source line the error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Lex(e) => e.line(),
            Self::Parse(e) => e.line(),
            Self::Runtime(e) => e.line(),
        }
    }
}
