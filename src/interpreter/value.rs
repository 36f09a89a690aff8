/// Runtime value representation.
///
/// Defines the `Value` enum, its conversions and the coercions the evaluator
/// relies on: numbers for arithmetic and truthiness for logic.
pub mod core;
