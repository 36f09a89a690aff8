use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Deepest nesting of prefix operators, groupings, calls, chained
/// assignments and braced blocks the parser accepts.
pub const MAX_NESTING: usize = 128;

/// A read-only position in a token sequence.
///
/// The parser is LL(1) with one controlled backtrack: the `assignment` rule
/// consumes an identifier, looks for `=`, and rewinds by one token if it is
/// not there.
#[derive(Debug, Clone)]
pub struct TokenCursor<'a> {
    tokens:   &'a [(Token, usize)],
    position: usize,
    depth:    usize,
}

impl<'a> TokenCursor<'a> {
    /// Creates a cursor positioned at the first token.
    #[must_use]
    pub const fn new(tokens: &'a [(Token, usize)]) -> Self {
        Self { tokens,
               position: 0,
               depth: 0 }
    }

    /// Returns the current token without consuming it, or `None` past the
    /// end of the slice.
    #[must_use]
    pub fn peek(&self) -> Option<&'a (Token, usize)> {
        self.tokens.get(self.position)
    }

    /// Consumes and returns the current token.
    pub fn advance(&mut self) -> Option<&'a (Token, usize)> {
        let current = self.tokens.get(self.position)?;
        self.position += 1;
        Some(current)
    }

    /// Steps back over the most recently consumed token.
    pub const fn rewind(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    /// Index of the current token.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Line of the current token, falling back to the last token's line once
    /// the cursor has run off the end.
    #[must_use]
    pub fn line(&self) -> usize {
        self.peek()
            .or_else(|| self.tokens.last())
            .map_or(1, |(_, line)| *line)
    }

    /// Runs `parse` one nesting level deeper.
    ///
    /// # Errors
    /// `ParseError::NestingTooDeep` once [`MAX_NESTING`] levels are open,
    /// otherwise whatever `parse` returns.
    pub fn nested<T>(&mut self,
                     line: usize,
                     parse: impl FnOnce(&mut Self) -> ParseResult<T>)
                     -> ParseResult<T> {
        if self.depth >= MAX_NESTING {
            return Err(ParseError::NestingTooDeep { limit: MAX_NESTING,
                                                    line });
        }

        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// True when only `Eof` (or nothing) is left.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        matches!(self.peek(), None | Some((Token::Eof, _)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<(Token, usize)> {
        vec![(Token::Identifier("a".into()), 1), (Token::Assign, 1), (Token::Eof, 2)]
    }

    #[test]
    fn advance_then_rewind_returns_to_same_token() {
        let tokens = sample();
        let mut cursor = TokenCursor::new(&tokens);

        let first = cursor.advance().cloned();
        assert_eq!(cursor.peek(), Some(&(Token::Assign, 1)));

        cursor.rewind();
        assert_eq!(cursor.peek().cloned(), first);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn rewind_at_start_stays_put() {
        let tokens = sample();
        let mut cursor = TokenCursor::new(&tokens);
        cursor.rewind();
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn running_off_the_end() {
        let tokens = sample();
        let mut cursor = TokenCursor::new(&tokens);
        cursor.advance();
        cursor.advance();
        assert!(cursor.is_at_end());
        cursor.advance();
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.line(), 2);
    }

    #[test]
    fn nesting_is_capped_and_released() {
        fn dive(cursor: &mut TokenCursor<'_>, levels: usize) -> ParseResult<usize> {
            if levels == 0 {
                return Ok(0);
            }
            cursor.nested(1, |cursor| dive(cursor, levels - 1).map(|n| n + 1))
        }

        let tokens = sample();
        let mut cursor = TokenCursor::new(&tokens);

        assert_eq!(dive(&mut cursor, MAX_NESTING), Ok(MAX_NESTING));
        assert_eq!(dive(&mut cursor, MAX_NESTING + 1),
                   Err(ParseError::NestingTooDeep { limit: MAX_NESTING,
                                                    line:  1, }));
        assert_eq!(dive(&mut cursor, 3), Ok(3));
    }
}
