/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions, performs
/// arithmetic and logical operations, manages variable and function state,
/// and produces results. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables, functions, conditionals, and the recursion ceiling.
/// - Reports runtime errors such as type mismatches or invalid intervals.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as
/// numbers, identifiers, operators, delimiters, and keywords. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with byte columns.
/// - Handles numeric literals, identifiers, keywords, and operators.
/// - Preserves unrecognized characters as tokens for the parser to report.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of expressions
/// and statements. This enables later phases to analyze and execute user
/// code.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates correct grammar and syntax, reporting errors with location
///   info.
/// - Supports arithmetic, function calls, assignments, conditionals,
///   intervals, sets, and vectors.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the value types used during interpretation, such
/// as numbers, booleans, intervals, sets, vectors, and matrices. It also
/// provides methods for type checking, conversion, and display, ensuring
/// robust type handling throughout evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements conversion, truthiness, and comparison helpers.
/// - Keeps every value's display form re-parseable.
pub mod value;
