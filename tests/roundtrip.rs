//! Property tests for the lexer and the full pipeline.
//!
//! 1. Writing tokens back as text and lexing that text again yields the same
//!    token kinds.
//! 2. No input, valid or not, makes the pipeline panic.

use proptest::prelude::*;
use tally::{
    interpreter::lexer::{Keyword, Token},
    run_source, tokenize,
};

fn finite_non_negative() -> impl Strategy<Value = f64> {
    any::<f64>().prop_filter("finite", |value| value.is_finite())
                .prop_map(f64::abs)
}

#[allow(clippy::cast_precision_loss)]
fn token() -> impl Strategy<Value = Token> {
    prop_oneof![
        any::<u64>().prop_map(|n| Token::Integer(n as f64)),
        finite_non_negative().prop_map(Token::Float),
        finite_non_negative().prop_map(|value| Token::Float(value.trunc())),
        "[a-z_][a-z0-9_]{0,8}".prop_filter("keywords are not identifiers",
                                           |s| s != "var" && s != "if")
                              .prop_map(Token::Identifier),
        Just(Token::Keyword(Keyword::Var)),
        Just(Token::Keyword(Keyword::If)),
        Just(Token::Plus),
        Just(Token::Minus),
        Just(Token::Star),
        Just(Token::Slash),
        Just(Token::LParen),
        Just(Token::RParen),
        Just(Token::LBrace),
        Just(Token::RBrace),
        Just(Token::Comma),
        Just(Token::Assign),
        Just(Token::Equal),
        Just(Token::NotEqual),
        Just(Token::Bang),
        Just(Token::And),
        Just(Token::Or),
        Just(Token::Less),
        Just(Token::Greater),
    ]
}

proptest! {
    #[test]
    fn tokens_survive_a_text_round_trip(tokens in prop::collection::vec(token(), 0..40)) {
        let text = tokens.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ");

        let relexed = tokenize(&text).unwrap()
                                     .into_iter()
                                     .map(|(token, _)| token)
                                     .collect::<Vec<_>>();

        let mut expected = tokens;
        expected.push(Token::Eof);
        prop_assert_eq!(relexed, expected);
    }

    #[test]
    fn arbitrary_input_never_panics(source in r"[\x00-\x7F]{0,200}") {
        let _ = run_source(&source);
    }
}
