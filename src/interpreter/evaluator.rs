/// Core evaluation logic and context management.
///
/// Contains the evaluation context that owns the configuration and the result
/// registry, and the dispatch that applies one operator or function to the
/// value stack.
pub mod core;

/// Binary operator evaluation logic.
///
/// Handles the arithmetic operators `+ - * / % ^`.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements identity, negation, factorial and the `$` result
/// back-reference.
pub mod unary;

/// Builtin functions and named constants.
///
/// Maps names such as `sin` or `pi` to the function or value they stand for,
/// and applies functions under the configured angle mode.
pub mod function;
