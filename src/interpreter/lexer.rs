use std::fmt;

use logos::Logos;
use tracing::debug;

use crate::error::LexError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexFault)]
pub enum Token {
    /// Real literal tokens, such as `3.14` or `2.`.
    #[regex(r"[0-9]+\.[0-9.]*", parse_float)]
    Float(f64),
    /// Integer literal tokens, such as `42`. Any run of digits is valid; the
    /// value is the nearest `f64`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(f64),
    /// Reserved words, `var` and `if`.
    #[token("var", |_| Keyword::Var)]
    #[token("if", |_| Keyword::If)]
    Keyword(Keyword),
    /// Identifier tokens; variable or function names such as `x` or `sqrt`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `=`
    #[token("=")]
    Assign,
    /// `==`
    #[token("==")]
    Equal,
    /// `!=`
    #[token("!=")]
    NotEqual,
    /// `!`
    #[token("!")]
    Bang,
    /// `&&`
    #[token("&&")]
    And,
    /// `||`
    #[token("||")]
    Or,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// Line breaks only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    Newline,
    /// Spaces, tabs, feeds and carriage returns.
    #[regex(r"[ \t\f\r]+", logos::skip)]
    Ignored,
    /// End of input. Never matched by the lexer, appended by [`tokenize`].
    Eof,
}

/// The reserved words of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    /// `var`, introduces a declaration.
    Var,
    /// `if`, reserved.
    If,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

/// Why logos rejected a slice. Turned into a [`LexError`] by [`tokenize`],
/// which knows the position and the offending text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LexFault {
    /// No rule matched.
    #[default]
    Unrecognized,
    /// A number with more than one decimal point.
    MalformedNumber,
}

/// Parses a real literal, rejecting a second decimal point.
fn parse_float(lex: &logos::Lexer<Token>) -> Result<f64, LexFault> {
    let slice = lex.slice();
    if slice.matches('.').count() > 1 {
        return Err(LexFault::MalformedNumber);
    }
    slice.parse().map_err(|_| LexFault::MalformedNumber)
}

/// Parses an integer literal from the current token slice.
fn parse_integer(lex: &logos::Lexer<Token>) -> Result<f64, LexFault> {
    lex.slice().parse().map_err(|_| LexFault::MalformedNumber)
}

/// Converts source text into a token sequence.
///
/// Each token is paired with the line it starts on. The sequence always ends
/// with a single [`Token::Eof`], so an empty source yields `[Eof]`.
///
/// # Errors
/// Stops at the first character that cannot start a token, at a lone `&` or
/// `|`, and at a numeric literal with more than one `.`.
///
/// # Example
/// ```
/// use tally::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("1 + x").unwrap();
/// let kinds: Vec<_> = tokens.into_iter().map(|(tok, _)| tok).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Integer(1.0), Token::Plus, Token::Identifier("x".into()), Token::Eof]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push((tok, lexer.extras.line)),
            Err(fault) => {
                return Err(describe_fault(&fault,
                                          lexer.slice(),
                                          lexer.span().start,
                                          lexer.extras.line));
            },
        }
    }

    tokens.push((Token::Eof, lexer.extras.line));
    debug!(count = tokens.len(), "tokenized source");

    Ok(tokens)
}

fn describe_fault(fault: &LexFault, slice: &str, position: usize, line: usize) -> LexError {
    match fault {
        LexFault::MalformedNumber => LexError::MalformedNumber { literal: slice.to_string(),
                                                                 line },
        LexFault::Unrecognized => match slice.chars().next() {
            Some(operator @ ('&' | '|')) => LexError::LoneOperator { operator,
                                                                     position,
                                                                     line },
            Some(character) => LexError::InvalidCharacter { character,
                                                            position,
                                                            line },
            None => LexError::InvalidCharacter { character: '\0',
                                                 position,
                                                 line },
        },
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Var => write!(f, "var"),
            Self::If => write!(f, "if"),
        }
    }
}

/// Writes the token back as source text.
///
/// Real literals always keep a decimal point so that the text lexes to a
/// `Float` again. `f64` display never uses an exponent, so appending `.0`
/// to a whole value is enough.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float(value) => {
                let text = value.to_string();
                if text.contains('.') {
                    write!(f, "{text}")
                } else {
                    write!(f, "{text}.0")
                }
            },
            Self::Integer(value) => write!(f, "{value}"),
            Self::Keyword(keyword) => write!(f, "{keyword}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBrace => write!(f, "{{"),
            Self::RBrace => write!(f, "}}"),
            Self::Comma => write!(f, ","),
            Self::Assign => write!(f, "="),
            Self::Equal => write!(f, "=="),
            Self::NotEqual => write!(f, "!="),
            Self::Bang => write!(f, "!"),
            Self::And => write!(f, "&&"),
            Self::Or => write!(f, "||"),
            Self::Less => write!(f, "<"),
            Self::Greater => write!(f, ">"),
            Self::Newline => writeln!(f),
            Self::Ignored => write!(f, " "),
            Self::Eof => Ok(()),
        }
    }
}

impl Token {
    /// Describes the token for error messages, e.g. `'+'` or `end of input`.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Eof => "end of input".to_string(),
            Self::Integer(_) | Self::Float(_) => format!("number '{self}'"),
            Self::Identifier(name) => format!("identifier '{name}'"),
            Self::Keyword(keyword) => format!("keyword '{keyword}'"),
            _ => format!("'{self}'"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source).unwrap()
                        .into_iter()
                        .map(|(token, _)| token)
                        .collect()
    }

    #[test]
    fn empty_source_is_just_eof() {
        assert_eq!(kinds(""), vec![Token::Eof]);
        assert_eq!(kinds("  \t "), vec![Token::Eof]);
    }

    #[test]
    fn two_character_operators_win_over_single() {
        assert_eq!(kinds("= == ! != && ||"),
                   vec![Token::Assign,
                        Token::Equal,
                        Token::Bang,
                        Token::NotEqual,
                        Token::And,
                        Token::Or,
                        Token::Eof]);
        assert_eq!(kinds("a==b"),
                   vec![Token::Identifier("a".into()),
                        Token::Equal,
                        Token::Identifier("b".into()),
                        Token::Eof]);
    }

    #[test]
    fn numbers_pick_integer_or_float() {
        assert_eq!(kinds("42 3.5 2."),
                   vec![Token::Integer(42.0), Token::Float(3.5), Token::Float(2.0), Token::Eof]);
    }

    #[test]
    fn keywords_and_identifiers() {
        assert_eq!(kinds("var variable if _x1"),
                   vec![Token::Keyword(Keyword::Var),
                        Token::Identifier("variable".into()),
                        Token::Keyword(Keyword::If),
                        Token::Identifier("_x1".into()),
                        Token::Eof]);
    }

    #[test]
    fn newlines_advance_the_line() {
        let tokens = tokenize("1\n\n2").unwrap();
        assert_eq!(tokens,
                   vec![(Token::Integer(1.0), 1), (Token::Integer(2.0), 3), (Token::Eof, 3)]);
    }

    #[test]
    fn two_decimal_points_are_rejected() {
        assert_eq!(tokenize("1.2.3"),
                   Err(LexError::MalformedNumber { literal: "1.2.3".into(),
                                                   line:    1, }));
    }

    #[test]
    fn lone_ampersand_and_pipe_are_rejected() {
        assert!(matches!(tokenize("a & b"),
                         Err(LexError::LoneOperator { operator: '&',
                                                      position: 2,
                                                      .. })));
        assert!(matches!(tokenize("a | b"),
                         Err(LexError::LoneOperator { operator: '|', .. })));
    }

    #[test]
    fn unknown_character_reports_position() {
        assert_eq!(tokenize("1 + $"),
                   Err(LexError::InvalidCharacter { character: '$',
                                                    position:  4,
                                                    line:      1, }));
    }

    #[test]
    fn long_integers_are_accepted() {
        assert_eq!(kinds("99999999999999999999"), vec![Token::Integer(1e20), Token::Eof]);
        assert_eq!(kinds("9007199254740993"),
                   vec![Token::Integer(9_007_199_254_740_992.0), Token::Eof]);
    }

    #[test]
    fn display_reproduces_float_with_point() {
        assert_eq!(Token::Float(2.0).to_string(), "2.0");
        assert_eq!(Token::Float(0.25).to_string(), "0.25");
        assert_eq!(Token::Integer(1e16).to_string(), "10000000000000000");
        assert_eq!(Token::LBrace.to_string(), "{");
    }

    #[test]
    fn large_whole_floats_relex_as_floats() {
        for value in [1e15, 1e16, 1e20, 1e300, f64::MAX] {
            let text = Token::Float(value).to_string();
            assert!(text.ends_with(".0"), "{text}");
            assert_eq!(kinds(&text), vec![Token::Float(value), Token::Eof]);
        }
    }
}
