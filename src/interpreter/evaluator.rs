/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions, including
/// arithmetic, comparisons, logical connectives, set algebra, and membership.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements all unary operations, such as arithmetic negation, logical NOT,
/// and the postfix factorial.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the runtime context, variable and
/// function storage, and error propagation.
pub mod core;

/// Evaluation of literal constructors.
///
/// Builds interval, set, vector, and matrix values from their literal
/// expressions, and implements set indexing.
pub mod literal;

/// Function evaluation.
///
/// Handles user-defined and built-in function calls, argument checking, the
/// recursion ceiling, and return value computation.
pub mod function;
