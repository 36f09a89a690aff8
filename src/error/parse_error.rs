use thiserror::Error;

/// Represents all errors that can occur during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found a token that cannot appear at this position.
    #[error("Error on line {line}: Unexpected token {found}, expected {expected}.")]
    UnexpectedToken {
        /// The token encountered.
        found:    String,
        /// What the parser was looking for.
        expected: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Reached the end of input in the middle of a construct.
    #[error("Error on line {line}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `var` was not followed by a name.
    #[error("Error on line {line}: Expected identifier after 'var', found {found}.")]
    ExpectedIdentifier {
        /// The token encountered instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// `var <name>` was not followed by `=`.
    #[error("Error on line {line}: Expected '=' after 'var {name}', found {found}.")]
    ExpectedAssign {
        /// The declared name.
        name:  String,
        /// The token encountered instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Error on line {line}: Expected closing parenthesis ')' but found {found}.")]
    ExpectedClosingParen {
        /// The token encountered instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A closing brace `}` was expected but not found.
    #[error("Error on line {line}: Expected closing brace '}}' but found {found}.")]
    ExpectedClosingBrace {
        /// The token encountered instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Found extra tokens after the program should have ended.
    #[error("Error on line {line}: Extra tokens after program: {token}.")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A keyword that is reserved but has no meaning yet.
    #[error("Error on line {line}: Keyword '{keyword}' is reserved.")]
    ReservedKeyword {
        /// The keyword as written.
        keyword: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Prefix operators, groupings, calls or blocks are nested too deeply.
    #[error("Error on line {line}: Nesting exceeds the limit of {limit} levels.")]
    NestingTooDeep {
        /// The deepest nesting accepted.
        limit: usize,
        /// The source line where the limit was hit.
        line:  usize,
    },
}

impl ParseError {
    /// Returns the source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line }
            | Self::ExpectedIdentifier { line, .. }
            | Self::ExpectedAssign { line, .. }
            | Self::ExpectedClosingParen { line, .. }
            | Self::ExpectedClosingBrace { line, .. }
            | Self::UnexpectedTrailingTokens { line, .. }
            | Self::ReservedKeyword { line, .. }
            | Self::NestingTooDeep { line, .. } => *line,
        }
    }
}
