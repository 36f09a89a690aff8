use crate::{
    ast::{Factor, FnArgs},
    error::ParseError,
    interpreter::{
        lexer::{Keyword, Token},
        parser::{
            core::{ParseResult, parse_assignment},
            cursor::TokenCursor,
            utils::{parse_comma_separated, unclosed},
        },
    },
};

/// Parses a factor, the highest precedence level.
///
/// Prefix operators are right-associative, so an input like `!-x` is parsed
/// as `!( -x )`, and they bind tighter than any binary operator: `-2 + 3` is
/// `(-2) + 3`.
///
/// Grammar:
/// ```text
///     factor := "-" factor
///             | "!" factor
///             | NUMBER
///             | IDENTIFIER ( "(" args? ")" )?
///             | "(" assignment ")"
/// ```
/// # Parameters
/// - `cursor`: Token cursor positioned at the start of a factor.
///
/// # Returns
/// The parsed [`Factor`] or a `ParseError` on failure.
pub(crate) fn parse_factor(cursor: &mut TokenCursor<'_>) -> ParseResult<Factor> {
    let (token, line) = cursor.peek()
                              .ok_or_else(|| ParseError::UnexpectedEndOfInput { line:
                                                                                    cursor.line() })?;
    let line = *line;

    match token {
        Token::Minus => {
            cursor.advance();
            let operand = cursor.nested(line, parse_factor)?;
            Ok(Factor::Negate { operand: Box::new(operand),
                                line })
        },
        Token::Bang => {
            cursor.advance();
            let operand = cursor.nested(line, parse_factor)?;
            Ok(Factor::Not { operand: Box::new(operand),
                             line })
        },
        Token::Integer(value) | Token::Float(value) => {
            cursor.advance();
            Ok(Factor::Number { value: *value,
                                line })
        },
        Token::Identifier(name) => {
            cursor.advance();
            parse_identifier_or_call(cursor, name, line)
        },
        Token::LParen => {
            cursor.advance();
            cursor.nested(line, parse_grouping)
        },
        Token::Keyword(keyword @ Keyword::If) => {
            Err(ParseError::ReservedKeyword { keyword: keyword.to_string(),
                                              line })
        },
        Token::Eof => Err(ParseError::UnexpectedEndOfInput { line }),
        tok => Err(ParseError::UnexpectedToken { found: tok.describe(),
                                                 expected: "an expression".to_string(),
                                                 line }),
    }
}

/// Decides between a variable reference and a call once the identifier has
/// been consumed.
///
/// A `(` directly after the name makes it a call; the argument list may be
/// empty.
///
/// Grammar: `IDENTIFIER ( "(" (assignment ("," assignment)*)? ")" )?`
///
/// # Errors
/// - `ExpectedClosingParen` if the argument list is not closed.
/// - Propagates errors from parsing the arguments.
fn parse_identifier_or_call(cursor: &mut TokenCursor<'_>,
                            name: &str,
                            line: usize)
                            -> ParseResult<Factor> {
    if let Some((Token::LParen, _)) = cursor.peek() {
        cursor.advance();
        let arguments = cursor.nested(line, |cursor| {
                                  parse_comma_separated(cursor, parse_assignment, &Token::RParen)
                              })?;

        return Ok(Factor::Call { name: name.to_string(),
                                 arguments: FnArgs { arguments },
                                 line });
    }

    Ok(Factor::Identifier { name: name.to_string(),
                            line })
}

/// Parses a parenthesized assignment after its opening `(`.
///
/// Grammar: `grouping := "(" assignment ")"`
fn parse_grouping(cursor: &mut TokenCursor<'_>) -> ParseResult<Factor> {
    let inner = parse_assignment(cursor)?;

    match cursor.peek() {
        Some((Token::RParen, _)) => {
            cursor.advance();
            Ok(Factor::Grouping(Box::new(inner)))
        },
        Some((tok, line)) => Err(unclosed(&Token::RParen, tok, *line)),
        None => Err(unclosed(&Token::RParen, &Token::Eof, cursor.line())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ast::Assignment,
        interpreter::{lexer::tokenize, parser::cursor::MAX_NESTING},
    };

    fn factor(source: &str) -> ParseResult<Factor> {
        let tokens = tokenize(source).unwrap();
        parse_factor(&mut TokenCursor::new(&tokens))
    }

    #[test]
    fn prefix_operators_nest() {
        let parsed = factor("!-x").unwrap();
        let expected = Factor::Not { operand: Box::new(Factor::Negate {
                                         operand: Box::new(Factor::Identifier { name: "x".into(),
                                                                                line: 1, }),
                                         line:    1,
                                     }),
                                     line:    1, };
        assert_eq!(parsed, expected);
    }

    #[test]
    fn float_literal() {
        assert_eq!(factor("2.5").unwrap(),
                   Factor::Number { value: 2.5,
                                    line:  1, });
    }

    #[test]
    fn call_with_arguments() {
        match factor("pow(2, a = 3)").unwrap() {
            Factor::Call { name, arguments, .. } => {
                assert_eq!(name, "pow");
                assert_eq!(arguments.arguments.len(), 2);
                assert!(matches!(arguments.arguments[1], Assignment::Assign { .. }));
            },
            other => panic!("expected call, found {other:?}"),
        }
    }

    #[test]
    fn call_without_arguments() {
        match factor("f()").unwrap() {
            Factor::Call { arguments, .. } => assert_eq!(arguments, FnArgs::default()),
            other => panic!("expected call, found {other:?}"),
        }
    }

    #[test]
    fn identifier_not_followed_by_paren_is_a_variable() {
        assert_eq!(factor("f + 1").unwrap(),
                   Factor::Identifier { name: "f".into(),
                                        line: 1, });
    }

    #[test]
    fn unclosed_grouping() {
        assert_eq!(factor("(1 + 2"),
                   Err(ParseError::ExpectedClosingParen { found: "end of input".into(),
                                                          line:  1, }));
    }

    #[test]
    fn unclosed_call() {
        assert_eq!(factor("f(1, 2"),
                   Err(ParseError::ExpectedClosingParen { found: "end of input".into(),
                                                          line:  1, }));
        assert!(matches!(factor("f(1 2)"), Err(ParseError::ExpectedClosingParen { .. })));
    }

    #[test]
    fn deep_prefix_chain_is_rejected() {
        let source = format!("{}1", "-".repeat(100_000));
        assert_eq!(factor(&source),
                   Err(ParseError::NestingTooDeep { limit: MAX_NESTING,
                                                    line:  1, }));
        assert!(matches!(factor(&format!("{}x", "!".repeat(100_000))),
                         Err(ParseError::NestingTooDeep { .. })));
    }

    #[test]
    fn deep_grouping_is_rejected() {
        let source = format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000));
        assert!(matches!(factor(&source), Err(ParseError::NestingTooDeep { .. })));

        let levels = MAX_NESTING + 1;
        let nested_calls = format!("{}1{}", "f(".repeat(levels), ")".repeat(levels));
        assert!(matches!(factor(&nested_calls), Err(ParseError::NestingTooDeep { .. })));
    }

    #[test]
    fn nesting_below_the_limit_parses() {
        let depth = MAX_NESTING / 2;
        let source = format!("{}-1{}", "(".repeat(depth), ")".repeat(depth));
        assert!(factor(&source).is_ok());
    }

    #[test]
    fn if_is_reserved() {
        assert!(matches!(factor("if"), Err(ParseError::ReservedKeyword { .. })));
    }

    #[test]
    fn stray_operator() {
        assert_eq!(factor("* 2"),
                   Err(ParseError::UnexpectedToken { found:    "'*'".into(),
                                                     expected: "an expression".into(),
                                                     line:     1, }));
    }
}
