/// Scalar arithmetic.
///
/// Evaluates `+`, `-`, `*` and `/` on numbers.
pub mod scalar;

/// Comparison operators.
///
/// Evaluates `==`, `!=`, `<` and `>`.
pub mod comparison;

/// Logical operators.
///
/// Evaluates `&&` and `||` on coerced booleans.
pub mod logic;
