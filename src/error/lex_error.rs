use thiserror::Error;

/// Represents all errors that can occur while tokenizing source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that starts no token.
    #[error("Error on line {line}: Invalid character '{character}' at position {position}.")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the source.
        position:  usize,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A single `&` or `|`; only the doubled forms are operators.
    #[error("Error on line {line}: Operator '{operator}' is not supported, did you mean \
             '{operator}{operator}'?")]
    LoneOperator {
        /// Either `&` or `|`.
        operator: char,
        /// Byte offset of the operator in the source.
        position: usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A numeric literal with more than one decimal point.
    #[error("Error on line {line}: Malformed number '{literal}', more than one '.' found.")]
    MalformedNumber {
        /// The literal text as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl LexError {
    /// Returns the source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::InvalidCharacter { line, .. }
            | Self::LoneOperator { line, .. }
            | Self::MalformedNumber { line, .. } => *line,
        }
    }
}
