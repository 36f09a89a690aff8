/// Explicit token cursor.
///
/// Wraps the token slice with an index that supports peeking, advancing and
/// rewinding by one token.
pub mod cursor;

/// Core parsing logic and entry point.
///
/// Contains the top-level `parse` function, the `assignment` rule and the
/// shared `ParseResult` type.
pub mod core;

/// Binary operator parsing.
///
/// Implements the left-associative precedence levels: logical, comparison,
/// additive and multiplicative.
pub mod binary;

/// Factor parsing.
///
/// Handles prefix operators, literals, identifiers, calls and parenthesized
/// expressions.
pub mod unary;

/// Block parsing.
///
/// Parses the top-level statement sequence and brace-delimited nested blocks.
pub mod block;

/// Statement parsing.
///
/// Parses declarations, nested blocks and expression statements.
pub mod statement;

/// Parsing utilities.
///
/// Shared helpers for comma-separated lists and identifier parsing.
pub mod utils;

pub use self::core::{ParseResult, parse};
