#[derive(Debug)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// Tried to use an undeclared variable.
    UndeclaredIdentifier {
        /// The name of the variable.
        name: String,
        /// The byte column where the error occurred.
        col:  usize,
    },
    /// Called an unknown function.
    UndeclaredFunction {
        /// The name of the function.
        name: String,
        /// The byte column where the error occurred.
        col:  usize,
    },
    /// Attempted to assign to a built-in constant.
    BuiltinIdentifierAssignment {
        /// The name of the constant.
        name: String,
        /// The byte column where the error occurred.
        col:  usize,
    },
    /// Attempted to redefine a built-in function.
    BuiltinFunctionRedefinition {
        /// The name of the function.
        name: String,
        /// The byte column where the error occurred.
        col:  usize,
    },
    /// A function definition used a built-in constant as a parameter name.
    BuiltinParameterName {
        /// The name of the constant.
        name: String,
        /// The byte column where the error occurred.
        col:  usize,
    },
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// The number of parameters the function declares.
        expected: usize,
        /// The number of arguments actually passed.
        found:    usize,
        /// The byte column where the error occurred.
        col:      usize,
    },
    /// A function exceeded the recursion ceiling.
    RecursionLimitExceeded {
        /// The name of the function.
        name:  String,
        /// The maximum number of nested calls allowed.
        limit: usize,
        /// The byte column where the error occurred.
        col:   usize,
    },
    /// An interval literal had unusable endpoints.
    InvalidInterval {
        /// Details about why the interval is invalid.
        details: String,
        /// The byte column where the error occurred.
        col:     usize,
    },
    /// Tried to access a set element outside the allowed bounds.
    IndexOutOfBounds {
        /// The number of elements in the set.
        len:   usize,
        /// The index that was actually requested.
        found: usize,
        /// The byte column where the error occurred.
        col:   usize,
    },
    /// A value had an unexpected or incompatible type.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The byte column where the error occurred.
        col:     usize,
    },
    /// Arithmetic result was too large to represent.
    Overflow {
        /// The byte column where the error occurred.
        col: usize,
    },
}

impl RuntimeError {
    /// Returns the diagnostic category for this error, as shown in rendered
    /// reports.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::TypeError { .. } => "TypeError",
            _ => "Error",
        }
    }

    /// Returns the byte column where the error occurred.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::UndeclaredIdentifier { col, .. }
            | Self::UndeclaredFunction { col, .. }
            | Self::BuiltinIdentifierAssignment { col, .. }
            | Self::BuiltinFunctionRedefinition { col, .. }
            | Self::BuiltinParameterName { col, .. }
            | Self::ArgumentCountMismatch { col, .. }
            | Self::RecursionLimitExceeded { col, .. }
            | Self::InvalidInterval { col, .. }
            | Self::IndexOutOfBounds { col, .. }
            | Self::TypeError { col, .. }
            | Self::Overflow { col } => *col,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndeclaredIdentifier { name, .. } => {
                write!(f, "use of undeclared identifier '{name}'")
            },
            Self::UndeclaredFunction { name, .. } => {
                write!(f, "use of undeclared function '{name}'")
            },
            Self::BuiltinIdentifierAssignment { name, .. } => {
                write!(f, "can't assign to built-in identifier '{name}'")
            },
            Self::BuiltinFunctionRedefinition { name, .. } => {
                write!(f, "can't assign to built-in function '{name}'")
            },
            Self::BuiltinParameterName { name, .. } => write!(f,
                                                              "can't use built-in constant '{name}' as a parameter name"),

            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found,
                                          .. } => write!(f,
                                                         "mismatched arguments for function call '{name}', called with {found} arguments, expected {expected}"),

            Self::RecursionLimitExceeded { name, limit, .. } => write!(f,
                                                                       "function '{name}' called recursively too many times, max is '{limit}'"),

            Self::InvalidInterval { details, .. } => {
                write!(f, "invalid interval: {details}")
            },
            Self::IndexOutOfBounds { len, found, .. } => write!(f,
                                                                "index {found} is out of range for a set of {len} elements"),

            Self::TypeError { details, .. } => write!(f, "{details}"),
            Self::Overflow { .. } => {
                write!(f, "result is too large to represent")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
