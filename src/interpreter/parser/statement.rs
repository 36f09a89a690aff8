use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::{Keyword, Token},
        parser::{
            block::parse_braced_block,
            core::{ParseResult, parse_assignment},
            cursor::TokenCursor,
            utils::parse_identifier,
        },
    },
};

/// Parses a single statement.
/// A statement may be one of:
/// - a variable declaration.
/// - a brace-delimited nested block.
/// - an assignment or expression used as a statement.
///
/// Grammar:
/// ```text
///     statement := "var" IDENTIFIER "=" assignment
///                | "{" statement* "}"
///                | assignment
/// ```
/// # Parameters
/// - `cursor`: Token cursor positioned at the start of the statement.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement(cursor: &mut TokenCursor<'_>) -> ParseResult<Statement> {
    match cursor.peek() {
        Some((Token::Keyword(Keyword::Var), line)) => {
            cursor.advance();
            parse_variable_declaration(cursor, *line)
        },
        Some((Token::LBrace, line)) => {
            cursor.advance();
            let line = *line;
            let block = cursor.nested(line, |cursor| parse_braced_block(cursor, line))?;
            Ok(Statement::Block(block))
        },
        _ => Ok(Statement::Expression(parse_assignment(cursor)?)),
    }
}

/// Parses the remainder of a declaration after `var`.
///
/// # Errors
/// Returns a `ParseError` if:
/// - no identifier follows `var`,
/// - `=` is missing after the identifier,
/// - the initializer is malformed.
fn parse_variable_declaration(cursor: &mut TokenCursor<'_>,
                              line: usize)
                              -> ParseResult<Statement> {
    let name = parse_identifier(cursor, line)?;

    match cursor.peek() {
        Some((Token::Assign, _)) => {
            cursor.advance();
        },
        Some((tok, _)) => {
            return Err(ParseError::ExpectedAssign { name,
                                                    found: tok.describe(),
                                                    line });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line }),
    }

    let initializer = parse_assignment(cursor)?;

    Ok(Statement::Declaration { name,
                                initializer,
                                line })
}
