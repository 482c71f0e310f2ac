//! # ami
//!
//! ami is a mathematical expression interpreter written in Rust.
//! It parses and evaluates expressions with support for variables, recursive
//! functions, conditionals, intervals, sets, vectors, and more.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Diagnostic,
    interpreter::{evaluator::core::Context, value::core::Value},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of source code as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression types for all language constructs.
/// - Attaches byte columns to AST nodes for error reporting.
/// - Enables extensible and robust handling of parsed code.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code. It standardizes error reporting and carries detailed
/// information about failures, including error categories, descriptions, and
/// source locations for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Attaches byte columns and detailed messages for context.
/// - Renders caret-annotated reports through `Diagnostic`.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, error handling, and all supporting infrastructure to
/// provide a complete runtime for source code evaluation. It exposes the
/// public API for interpreting and executing expressions or programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion and helpers.
///
/// This module provides reusable helpers and conversion routines that are
/// used throughout the evaluator. These include safe conversions between
/// integer and floating-point types.
///
/// # Responsibilities
/// - Safely convert between `u64`, `usize`, and `f64` without silent data
///   loss.
pub mod util;

/// Evaluates a source string in a fresh context and returns the final value.
///
/// Statements are separated by semicolons and the value of the last one is
/// returned; an empty program evaluates to `null`. For a session that keeps
/// variables and functions between inputs, construct a `Context` directly
/// and call `eval_source` on it.
///
/// # Parameters
/// - `source`: The program text.
/// - `file`: Displayed origin of the source, used in diagnostics.
///
/// # Errors
/// Returns a rendered `Diagnostic` if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use ami::get_result;
///
/// let value = get_result("2 + 3 * 4", "script").unwrap();
/// assert_eq!(value.to_string(), "14");
///
/// // An intentional error: 'x' is not defined.
/// let report = get_result("2 + x", "script").unwrap_err();
/// assert!(report.to_string().contains("use of undeclared identifier 'x'"));
/// ```
pub fn get_result(source: &str, file: &str) -> Result<Value, Diagnostic> {
    Context::new().eval_source(source, file)
}
