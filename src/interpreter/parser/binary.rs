use crate::{
    ast::{
        AdditiveOperator, Comparison, ComparisonOperator, Expr, Logical, LogicalOperator,
        MultiplicativeOperator, Term,
    },
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, cursor::TokenCursor, unary::parse_factor},
    },
};

/// Parses `&&` and `||` chains.
///
/// Both operators share one precedence level and associate to the left.
///
/// The rule is: `logical := comparison (("&&" | "||") comparison)*`
///
/// # Parameters
/// - `cursor`: Token cursor.
///
/// # Returns
/// A `Logical` tree combining comparison-level nodes.
pub fn parse_logical(cursor: &mut TokenCursor<'_>) -> ParseResult<Logical> {
    let mut left = Logical::Comparison(parse_comparison(cursor)?);

    while let Some((token, line)) = cursor.peek()
          && let Some(op) = token_to_logical_operator(token)
    {
        cursor.advance();
        let right = parse_comparison(cursor)?;
        left = Logical::Binary { op,
                                 left: Box::new(left),
                                 right,
                                 line: *line };
    }

    Ok(left)
}

/// Parses relational and equality operators.
///
/// `==`, `!=`, `<` and `>` share one precedence level and associate to the
/// left, so `1 < 2 == 1 > 0` compares two booleans.
///
/// The rule is: `comparison := expr (("==" | "!=" | "<" | ">") expr)*`
pub fn parse_comparison(cursor: &mut TokenCursor<'_>) -> ParseResult<Comparison> {
    let mut left = Comparison::Expr(parse_expr(cursor)?);

    while let Some((token, line)) = cursor.peek()
          && let Some(op) = token_to_comparison_operator(token)
    {
        cursor.advance();
        let right = parse_expr(cursor)?;
        left = Comparison::Binary { op,
                                    left: Box::new(left),
                                    right,
                                    line: *line };
    }

    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `expr := term (("+" | "-") term)*`
pub fn parse_expr(cursor: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let mut left = Expr::Term(parse_term(cursor)?);

    while let Some((token, line)) = cursor.peek()
          && let Some(op) = token_to_additive_operator(token)
    {
        cursor.advance();
        let right = parse_term(cursor)?;
        left = Expr::Binary { op,
                              left: Box::new(left),
                              right,
                              line: *line };
    }

    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// The rule is: `term := factor (("*" | "/") factor)*`
pub fn parse_term(cursor: &mut TokenCursor<'_>) -> ParseResult<Term> {
    let mut left = Term::Factor(parse_factor(cursor)?);

    while let Some((token, line)) = cursor.peek()
          && let Some(op) = token_to_multiplicative_operator(token)
    {
        cursor.advance();
        let right = parse_factor(cursor)?;
        left = Term::Binary { op,
                              left: Box::new(left),
                              right,
                              line: *line };
    }

    Ok(left)
}

/// Maps a token to its logical operator, if it is one.
///
/// # Example
/// ```
/// use tally::{
///     ast::LogicalOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_logical_operator},
/// };
///
/// assert_eq!(token_to_logical_operator(&Token::And), Some(LogicalOperator::And));
/// assert_eq!(token_to_logical_operator(&Token::Plus), None);
/// ```
#[must_use]
pub const fn token_to_logical_operator(token: &Token) -> Option<LogicalOperator> {
    match token {
        Token::And => Some(LogicalOperator::And),
        Token::Or => Some(LogicalOperator::Or),
        _ => None,
    }
}

/// Maps a token to its comparison operator, if it is one.
#[must_use]
pub const fn token_to_comparison_operator(token: &Token) -> Option<ComparisonOperator> {
    match token {
        Token::Equal => Some(ComparisonOperator::Equal),
        Token::NotEqual => Some(ComparisonOperator::NotEqual),
        Token::Less => Some(ComparisonOperator::Less),
        Token::Greater => Some(ComparisonOperator::Greater),
        _ => None,
    }
}

/// Maps a token to its additive operator, if it is one.
#[must_use]
pub const fn token_to_additive_operator(token: &Token) -> Option<AdditiveOperator> {
    match token {
        Token::Plus => Some(AdditiveOperator::Add),
        Token::Minus => Some(AdditiveOperator::Sub),
        _ => None,
    }
}

/// Maps a token to its multiplicative operator, if it is one.
#[must_use]
pub const fn token_to_multiplicative_operator(token: &Token) -> Option<MultiplicativeOperator> {
    match token {
        Token::Star => Some(MultiplicativeOperator::Mul),
        Token::Slash => Some(MultiplicativeOperator::Div),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ast::Factor,
        error::ParseError,
        interpreter::lexer::tokenize,
    };

    fn term(source: &str) -> ParseResult<Term> {
        let tokens = tokenize(source).unwrap();
        parse_term(&mut TokenCursor::new(&tokens))
    }

    #[test]
    fn division_chain_is_left_associative() {
        let parsed = term("8 / 4 / 2").unwrap();
        match parsed {
            Term::Binary { op, left, right, .. } => {
                assert_eq!(op, MultiplicativeOperator::Div);
                assert!(matches!(*left, Term::Binary { op: MultiplicativeOperator::Div, .. }));
                assert_eq!(right,
                           Factor::Number { value: 2.0,
                                            line:  1, });
            },
            other => panic!("unexpected tree {other:?}"),
        }
    }

    #[test]
    fn operator_without_right_operand() {
        assert!(matches!(term("2 *"), Err(ParseError::UnexpectedEndOfInput { .. })));
    }

    #[test]
    fn comparison_chain_is_left_associative() {
        let tokens = tokenize("1 < 2 == 1 > 0").unwrap();
        let parsed = parse_comparison(&mut TokenCursor::new(&tokens)).unwrap();
        match parsed {
            Comparison::Binary { op, left, right, .. } => {
                assert_eq!(op, ComparisonOperator::Greater);
                assert!(matches!(*left, Comparison::Binary { op: ComparisonOperator::Equal, .. }));
                assert_eq!(right.line_number(), 1);
            },
            other => panic!("unexpected tree {other:?}"),
        }
    }
}
