use crate::{
    ast::Block,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, cursor::TokenCursor, statement::parse_statement},
    },
};

/// Parses the statements of a program.
///
/// Statements are read until `Eof` or a `}` is reached; neither is consumed.
/// A `}` at this level has no matching `{`, so [`parse`](super::parse)
/// reports it as trailing input.
///
/// Grammar: `block := statement*`
///
/// # Parameters
/// - `cursor`: Token cursor positioned at the first statement.
///
/// # Returns
/// The parsed block.
pub fn parse_block(cursor: &mut TokenCursor<'_>) -> ParseResult<Block> {
    let line = cursor.line();
    let mut statements = Vec::new();

    while !cursor.is_at_end() {
        if let Some((Token::RBrace, _)) = cursor.peek() {
            break;
        }
        statements.push(parse_statement(cursor)?);
    }

    Ok(Block { statements, line })
}

/// Parses a block delimited by braces.
///
/// Parsing continues until the closing `}`; running into the end of input
/// first is an unclosed block.
///
/// Grammar: `braced_block := "{" statement* "}"`
///
/// # Parameters
/// - `cursor`: Token cursor positioned after the opening brace.
/// - `line`: Line number of the opening brace.
pub fn parse_braced_block(cursor: &mut TokenCursor<'_>, line: usize) -> ParseResult<Block> {
    let mut statements = Vec::new();

    loop {
        match cursor.peek() {
            Some((Token::RBrace, _)) => {
                cursor.advance();
                break;
            },
            Some((Token::Eof, eof_line)) => {
                return Err(ParseError::ExpectedClosingBrace { found: Token::Eof.describe(),
                                                              line:  *eof_line, });
            },
            None => {
                return Err(ParseError::ExpectedClosingBrace { found: Token::Eof.describe(),
                                                              line:  cursor.line(), });
            },
            Some(_) => statements.push(parse_statement(cursor)?),
        }
    }

    Ok(Block { statements, line })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ast::Statement,
        interpreter::{lexer::tokenize, parser::parse},
    };

    #[test]
    fn nested_blocks_nest() {
        let tokens = tokenize("var a = 1 { var b = 2 { b } } a").unwrap();
        let block = parse(&tokens).unwrap();

        assert_eq!(block.statements.len(), 3);
        match &block.statements[1] {
            Statement::Block(inner) => {
                assert_eq!(inner.statements.len(), 2);
                assert!(matches!(inner.statements[1], Statement::Block(_)));
            },
            other => panic!("expected nested block, found {other:?}"),
        }
    }

    #[test]
    fn empty_braces_are_an_empty_block() {
        let tokens = tokenize("{}").unwrap();
        let block = parse(&tokens).unwrap();
        assert_eq!(block.statements,
                   vec![Statement::Block(Block { statements: vec![],
                                                 line:       1, })]);
    }

    #[test]
    fn unclosed_brace_is_reported() {
        let tokens = tokenize("{ var a = 1\n").unwrap();
        assert_eq!(parse(&tokens),
                   Err(ParseError::ExpectedClosingBrace { found: "end of input".into(),
                                                          line:  2, }));
    }
}
