#[derive(Debug)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The byte column where the error occurred.
        col:   usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The byte column where the error occurred.
        col: usize,
    },
    /// A specific token was expected but something else was found.
    ExpectedToken {
        /// Description of the expected token.
        expected: &'static str,
        /// The token actually found.
        found:    String,
        /// The byte column where the error occurred.
        col:      usize,
    },
    /// A unary minus was not followed by a negatable factor.
    InvalidUnaryOperand {
        /// The token that followed the minus sign.
        token: String,
        /// The byte column where the error occurred.
        col:   usize,
    },
    /// A function parameter list contained something other than an identifier.
    InvalidParameter {
        /// The offending token.
        token: String,
        /// The byte column where the error occurred.
        col:   usize,
    },
    /// Found extra tokens after a statement should have ended.
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token: String,
        /// The byte column where the error occurred.
        col:   usize,
    },
}

impl ParseError {
    /// Returns the diagnostic category for this error, as shown in rendered
    /// reports.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::UnexpectedEndOfInput { .. } => "ParseError",
            Self::InvalidParameter { .. } => "TypeError",
            _ => "SyntaxError",
        }
    }

    /// Returns the byte column where the error occurred.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::UnexpectedToken { col, .. }
            | Self::UnexpectedEndOfInput { col }
            | Self::ExpectedToken { col, .. }
            | Self::InvalidUnaryOperand { col, .. }
            | Self::InvalidParameter { col, .. }
            | Self::UnexpectedTrailingTokens { col, .. } => *col,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, .. } => {
                write!(f, "unexpected token '{token}'")
            },

            Self::UnexpectedEndOfInput { .. } => {
                write!(f, "unexpected end of input")
            },

            Self::ExpectedToken { expected, found, .. } => {
                write!(f, "expected {expected}, found '{found}'")
            },

            Self::InvalidUnaryOperand { token, .. } => {
                write!(f, "unary '-' must be followed by a value, found '{token}'")
            },

            Self::InvalidParameter { token, .. } => {
                write!(f, "expected parameter name, found '{token}'")
            },

            Self::UnexpectedTrailingTokens { token, .. } => {
                write!(f, "extra tokens after expression, found '{token}'")
            },
        }
    }
}

impl std::error::Error for ParseError {}
