/// Parsing errors.
///
/// Defines all error types that can occur during parsing of source code.
/// Parse errors include syntax mistakes, unexpected tokens, and any other
/// issues detected before evaluation.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and execution.
/// Runtime errors include undeclared names, type mismatches, invalid intervals,
/// arity mismatches, and runaway recursion.
pub mod runtime_error;
/// Rendered diagnostics.
///
/// Defines the `Diagnostic` type that turns a parse or runtime error into the
/// caret-annotated report shown to users.
pub mod diagnostic;

pub use diagnostic::Diagnostic;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
