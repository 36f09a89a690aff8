use tracing::debug;

use crate::{
    ast::{Assignment, Block},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_logical, block::parse_block, cursor::TokenCursor},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete program.
///
/// The token sequence must hold one block followed by `Eof`. Anything left
/// over, such as a stray `}` or a second `Eof`, is reported as trailing
/// input.
///
/// Grammar: `program := block EOF`
///
/// # Parameters
/// - `tokens`: Token sequence as produced by
///   [`tokenize`](crate::interpreter::lexer::tokenize).
///
/// # Returns
/// The top-level block.
///
/// # Example
/// ```
/// use tally::interpreter::{lexer::tokenize, parser::parse};
///
/// let tokens = tokenize("var a = 1 a + 2").unwrap();
/// let block = parse(&tokens).unwrap();
///
/// assert_eq!(block.statements.len(), 2);
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Block> {
    let mut cursor = TokenCursor::new(tokens);
    let block = parse_block(&mut cursor)?;

    match cursor.advance() {
        Some((Token::Eof, _)) | None => {},
        Some((tok, line)) => {
            return Err(ParseError::UnexpectedTrailingTokens { token: tok.describe(),
                                                              line:  *line, });
        },
    }
    if let Some((tok, line)) = cursor.peek() {
        return Err(ParseError::UnexpectedTrailingTokens { token: tok.describe(),
                                                          line:  *line, });
    }

    debug!(statements = block.statements.len(), "parsed program");
    Ok(block)
}

/// Parses an assignment or falls through to a logical expression.
///
/// An identifier directly followed by `=` starts an assignment whose value
/// is again an assignment, which makes `a = b = 1` right-associative. If the
/// identifier is not followed by `=`, the cursor is rewound by one token and
/// the whole thing is parsed as a logical expression instead.
///
/// Grammar: `assignment := IDENTIFIER "=" assignment | logical`
///
/// # Parameters
/// - `cursor`: Token cursor positioned at the start of the assignment.
///
/// # Returns
/// The parsed assignment node.
pub fn parse_assignment(cursor: &mut TokenCursor<'_>) -> ParseResult<Assignment> {
    if let Some((Token::Identifier(name), line)) = cursor.peek() {
        cursor.advance();

        if let Some((Token::Assign, _)) = cursor.peek() {
            cursor.advance();
            let value = cursor.nested(*line, parse_assignment)?;

            return Ok(Assignment::Assign { name:  name.clone(),
                                           value: Box::new(value),
                                           line:  *line, });
        }

        cursor.rewind();
    }

    Ok(Assignment::Logical(parse_logical(cursor)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ast::{
            AdditiveOperator, Comparison, ComparisonOperator, Expr, Factor, Logical,
            LogicalOperator, MultiplicativeOperator, Statement, Term,
        },
        interpreter::lexer::tokenize,
    };

    fn parse_source(source: &str) -> ParseResult<Block> {
        parse(&tokenize(source).unwrap())
    }

    fn single_expression(source: &str) -> Assignment {
        let mut block = parse_source(source).unwrap();
        assert_eq!(block.statements.len(), 1);
        match block.statements.remove(0) {
            Statement::Expression(assignment) => assignment,
            other => panic!("expected expression statement, found {other:?}"),
        }
    }

    fn number(value: i32) -> Factor {
        Factor::Number { value: f64::from(value),
                         line:  1, }
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        let expected = Assignment::from(Logical::from(Comparison::from(Expr::Binary {
            op:    AdditiveOperator::Add,
            left:  Box::new(Expr::from(Term::from(number(2)))),
            right: Term::Binary { op:    MultiplicativeOperator::Mul,
                                  left:  Box::new(Term::from(number(3))),
                                  right: number(4),
                                  line:  1, },
            line:  1,
        })));

        assert_eq!(single_expression("2 + 3 * 4"), expected);
    }

    #[test]
    fn subtraction_is_left_associative() {
        match single_expression("8 - 4 - 2") {
            Assignment::Logical(Logical::Comparison(Comparison::Expr(Expr::Binary { left,
                                                                                   right,
                                                                                   .. }))) => {
                assert!(matches!(*left, Expr::Binary { .. }));
                assert_eq!(right, Term::from(number(2)));
            },
            other => panic!("unexpected tree {other:?}"),
        }
    }

    #[test]
    fn assignment_is_right_associative() {
        match single_expression("a = b = 1") {
            Assignment::Assign { name, value, .. } => {
                assert_eq!(name, "a");
                assert!(matches!(*value, Assignment::Assign { ref name, .. } if name == "b"));
            },
            other => panic!("unexpected tree {other:?}"),
        }
    }

    #[test]
    fn identifier_without_assign_is_rewound() {
        match single_expression("a == 1") {
            Assignment::Logical(Logical::Comparison(Comparison::Binary { op, left, .. })) => {
                assert_eq!(op, ComparisonOperator::Equal);
                assert_eq!(*left,
                           Comparison::from(Expr::from(Term::from(Factor::Identifier {
                               name: "a".into(),
                               line: 1,
                           }))));
            },
            other => panic!("unexpected tree {other:?}"),
        }
    }

    #[test]
    fn logical_binds_looser_than_comparison() {
        match single_expression("3 > 2 && 1 == 1") {
            Assignment::Logical(Logical::Binary { op, left, right, .. }) => {
                assert_eq!(op, LogicalOperator::And);
                assert!(matches!(*left, Logical::Comparison(Comparison::Binary { .. })));
                assert!(matches!(right, Comparison::Binary { .. }));
            },
            other => panic!("unexpected tree {other:?}"),
        }
    }

    #[test]
    fn trailing_brace_is_rejected() {
        assert!(matches!(parse_source("1 + 2 }"),
                         Err(ParseError::UnexpectedTrailingTokens { .. })));
    }

    #[test]
    fn empty_program_is_an_empty_block() {
        assert_eq!(parse_source("").unwrap().statements, vec![]);
    }

    #[test]
    fn tokens_after_eof_are_rejected() {
        let tokens = vec![(Token::Eof, 1), (Token::Integer(1.0), 1)];
        assert!(matches!(parse(&tokens),
                         Err(ParseError::UnexpectedTrailingTokens { .. })));
    }
}
