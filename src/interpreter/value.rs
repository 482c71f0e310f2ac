/// Interval value representation.
///
/// Defines the `Interval` type with independently open or closed endpoints.
/// Provides the validated constructor used by interval literals and the
/// membership query backing the `in` operator.
pub mod interval;
/// Set value representation.
///
/// Defines the `SetValue` type, which stores the elements of a `Value::Set`
/// in a canonical sorted, deduplicated order. Provides union, intersection,
/// difference, and membership.
pub mod set_value;
/// Vector and matrix representation.
///
/// Defines the `Vector` type (two or three numeric components, with scaling
/// and dot product) and the `Matrix` type (equal-length vector rows).
pub mod tensor;

pub mod core;
