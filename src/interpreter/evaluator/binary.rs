/// Binary operator routing and plain arithmetic.
pub mod core;

/// Comparison evaluation for relational and equality operators.
pub mod comparison;

/// Logical connectives (`and`, `or`).
pub mod logic;

/// Set algebra: `union`, `intersection`, and the membership operator `in`.
pub mod algebra;
