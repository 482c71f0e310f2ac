/// Built-in function implementations and constants.
///
/// Contains the numeric functions and named constants available by default
/// in the interpreter.
pub mod builtin;

/// Function call evaluation.
///
/// Handles user-defined and built-in function calls, argument checking, the
/// recursion ceiling, and function definitions.
pub mod core;
