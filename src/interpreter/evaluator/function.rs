/// Host function plumbing.
///
/// Defines `NativeFunction`, the arity check and the call path used by the
/// evaluator.
pub mod core;

/// Standard numeric built-ins.
///
/// `sqrt`, `pow`, `abs`, `min` and `max`, plus the function that installs the
/// whole standard set into a context.
pub mod builtin;

/// The `print` built-in.
pub mod print;
