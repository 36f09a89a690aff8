use crate::{
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, cursor::TokenCursor},
    },
};

/// Parses a comma-separated list of items until a closing token.
///
/// It repeatedly calls `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Parameters
/// - `cursor`: Token cursor positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list.
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - neither `,` nor the closing token follows an item.
pub(in crate::interpreter::parser) fn parse_comma_separated<T>(
    cursor: &mut TokenCursor<'_>,
    parse_item: impl Fn(&mut TokenCursor<'_>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>> {
    let mut items = Vec::new();
    if let Some((tok, _)) = cursor.peek()
       && tok == closing
    {
        cursor.advance();

        return Ok(items);
    }
    loop {
        items.push(parse_item(cursor)?);
        match cursor.peek() {
            Some((Token::Comma, _)) => {
                cursor.advance();
            },
            Some((tok, _)) if tok == closing => {
                cursor.advance();
                break;
            },
            Some((tok, line)) => return Err(unclosed(closing, tok, *line)),
            None => return Err(unclosed(closing, &Token::Eof, cursor.line())),
        }
    }
    Ok(items)
}

/// Builds the error for a list or group whose closing token is missing.
pub(in crate::interpreter::parser) fn unclosed(closing: &Token,
                                               found: &Token,
                                               line: usize)
                                               -> ParseError {
    let found = found.describe();
    match closing {
        Token::RParen => ParseError::ExpectedClosingParen { found, line },
        Token::RBrace => ParseError::ExpectedClosingBrace { found, line },
        _ => ParseError::UnexpectedToken { found,
                                           expected: format!("'{closing}'"),
                                           line },
    }
}

/// Parses a plain identifier and returns its name.
///
/// The next token must be `Token::Identifier`.
///
/// # Parameters
/// - `cursor`: Token cursor positioned at an identifier.
/// - `line`: Line of the construct that requires the identifier.
///
/// # Errors
/// Returns `ParseError::ExpectedIdentifier` if the next token is not an
/// identifier or the input has ended.
pub(in crate::interpreter::parser) fn parse_identifier(cursor: &mut TokenCursor<'_>,
                                                       line: usize)
                                                       -> ParseResult<String> {
    match cursor.peek() {
        Some((Token::Identifier(name), _)) => {
            cursor.advance();
            Ok(name.clone())
        },
        Some((tok, _)) => Err(ParseError::ExpectedIdentifier { found: tok.describe(),
                                                               line }),
        None => Err(ParseError::ExpectedIdentifier { found: Token::Eof.describe(),
                                                     line }),
    }
}
