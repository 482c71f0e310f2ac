/// Core parsing logic.
///
/// Contains the program and expression entry points, conditional parsing, and
/// the shared `ParseResult` alias.
pub mod core;

/// Binary operator parsing.
///
/// Implements the precedence ladder for all binary operations, including
/// arithmetic, comparisons, membership, logical connectives, and set algebra.
pub mod binary;

/// Unary and primary factor parsing.
///
/// Handles prefix operators, literals, grouping, identifier factors
/// (assignments, calls, and function definitions), and postfix operators.
pub mod unary;

/// Utility functions for the parser.
///
/// Provides helpers shared by list-like constructs such as argument lists,
/// parameter lists, and set literals.
pub mod utils;
