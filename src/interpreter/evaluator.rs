/// Binary operator evaluation logic.
///
/// Handles arithmetic, comparisons and the logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and logical NOT.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the runtime context and the
/// dispatch over every node of the syntax tree.
pub mod core;

/// The scope stack.
///
/// Defines the `Scope` frame and the lookup, declaration and assignment
/// rules that walk the stack.
pub mod scope;

/// Function evaluation.
///
/// Handles host function registration, argument checking and the standard
/// built-ins.
pub mod function;
