use std::rc::Rc;

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// `Expr` covers all types of expressions, from literals and variables to
/// function calls, arithmetic, conditionals, intervals, sets, and vectors.
/// Each variant models a distinct syntactic construct and carries the byte
/// column of its first token for error reporting. Subtrees are shared through
/// `Rc`, so cloning a node is cheap.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `3.14` or `2e-3`.
    Number {
        /// The literal value.
        value: f64,
        /// Byte column in the source code.
        col:   usize,
    },
    /// A boolean literal: `true` or `false`.
    Bool {
        /// The literal value.
        value: bool,
        /// Byte column in the source code.
        col:   usize,
    },
    /// The `null` literal.
    Null {
        /// Byte column in the source code.
        col: usize,
    },
    /// Reference to a variable or constant by name.
    Identifier {
        /// Name of the variable.
        name: String,
        /// Byte column in the source code.
        col:  usize,
    },
    /// A variable assignment binding a name to an expression.
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Rc<Self>,
        /// Byte column in the source code.
        col:   usize,
    },
    /// A compound assignment combining a variable with an operation
    /// (e.g. `+=`, `-=`).
    CompoundAssignment {
        /// The name of the variable.
        name:  String,
        /// The binary operation to combine with.
        op:    BinaryOperator,
        /// The value to combine with the current variable value.
        value: Rc<Self>,
        /// Byte column in the source code.
        col:   usize,
    },
    /// An arithmetic binary operation.
    BinaryOp {
        /// Left operand.
        left:  Rc<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Rc<Self>,
        /// Byte column in the source code.
        col:   usize,
    },
    /// A comparison between two operands.
    Comparison {
        /// Left operand.
        left:  Rc<Self>,
        /// The comparison operator.
        op:    ComparisonOperator,
        /// Right operand.
        right: Rc<Self>,
        /// Byte column in the source code.
        col:   usize,
    },
    /// A logical connective (`and`, `or`).
    Logical {
        /// Left operand.
        left:  Rc<Self>,
        /// The logical operator.
        op:    LogicalOperator,
        /// Right operand.
        right: Rc<Self>,
        /// Byte column in the source code.
        col:   usize,
    },
    /// Arithmetic negation (e.g. `-x`).
    Negate {
        /// The operand expression.
        expr: Rc<Self>,
        /// Byte column in the source code.
        col:  usize,
    },
    /// Logical NOT (e.g. `not x`).
    Not {
        /// The operand expression.
        expr: Rc<Self>,
        /// Byte column in the source code.
        col:  usize,
    },
    /// Postfix factorial (e.g. `5!`).
    Factorial {
        /// The operand expression.
        expr: Rc<Self>,
        /// Byte column in the source code.
        col:  usize,
    },
    /// Conditional ("if-then-else") expression.
    IfExpr {
        /// The condition expression.
        condition:   Rc<Self>,
        /// Expression evaluated if the condition is true.
        then_branch: Rc<Self>,
        /// Expression evaluated if the condition is false.
        else_branch: Option<Rc<Self>>,
        /// Byte column in the source code.
        col:         usize,
    },
    /// Function call expression (e.g. `sin(x)`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Rc<Self>>,
        /// Byte column in the source code.
        col:       usize,
    },
    /// Function definition expression (e.g. `f(x, y) -> x + y`).
    FunctionDef {
        /// Name of the function.
        name:   String,
        /// The parameter names.
        params: Vec<String>,
        /// The body expression evaluated when the function is called.
        body:   Rc<Self>,
        /// Byte column in the source code.
        col:    usize,
    },
    /// Interval literal expression (e.g. `[0;5]` or `]0;5[`).
    Interval {
        /// Lower endpoint expression.
        min:        Rc<Self>,
        /// Whether the lower endpoint is excluded.
        min_strict: bool,
        /// Upper endpoint expression.
        max:        Rc<Self>,
        /// Whether the upper endpoint is excluded.
        max_strict: bool,
        /// Byte column in the source code.
        col:        usize,
    },
    /// Set literal expression (e.g. `{1, 2, 3}`).
    SetLiteral {
        /// Elements of the set.
        elements: Vec<Rc<Self>>,
        /// Byte column in the source code.
        col:      usize,
    },
    /// Bracketed tensor literal; classified as a vector or matrix during
    /// evaluation (e.g. `[1, 2, 3]` or `[[1, 2], [3, 4]]`).
    TensorLiteral {
        /// Elements of the literal.
        elements: Vec<Rc<Self>>,
        /// Byte column in the source code.
        col:      usize,
    },
    /// A set-algebra operation (`union`, `intersection`).
    SetOp {
        /// Left operand.
        left:  Rc<Self>,
        /// The set operator.
        op:    SetOperator,
        /// Right operand.
        right: Rc<Self>,
        /// Byte column in the source code.
        col:   usize,
    },
    /// Membership test (e.g. `5 in [0;10]`).
    In {
        /// The candidate element.
        element:   Rc<Self>,
        /// The container being queried.
        container: Rc<Self>,
        /// Byte column in the source code.
        col:       usize,
    },
    /// Indexing expression (e.g. `{1, 2, 3}[1]`).
    Index {
        /// The value to index into.
        target: Rc<Self>,
        /// The index to access.
        index:  Rc<Self>,
        /// Byte column in the source code.
        col:    usize,
    },
}

impl Expr {
    /// Gets the byte column from `self`.
    /// ## Example
    /// ```
    /// use ami::ast::Expr;
    ///
    /// let expr = Expr::Identifier { name: "x".to_string(),
    ///                               col:  5, };
    ///
    /// assert_eq!(expr.column(), 5);
    /// ```
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::Number { col, .. }
            | Self::Bool { col, .. }
            | Self::Null { col, .. }
            | Self::Identifier { col, .. }
            | Self::Assignment { col, .. }
            | Self::CompoundAssignment { col, .. }
            | Self::BinaryOp { col, .. }
            | Self::Comparison { col, .. }
            | Self::Logical { col, .. }
            | Self::Negate { col, .. }
            | Self::Not { col, .. }
            | Self::Factorial { col, .. }
            | Self::IfExpr { col, .. }
            | Self::FunctionCall { col, .. }
            | Self::FunctionDef { col, .. }
            | Self::Interval { col, .. }
            | Self::SetLiteral { col, .. }
            | Self::TensorLiteral { col, .. }
            | Self::SetOp { col, .. }
            | Self::In { col, .. }
            | Self::Index { col, .. } => *col,
        }
    }
}

/// Represents an arithmetic binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
    /// Modulo (`%`)
    Mod,
}

/// Represents a comparison operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ComparisonOperator {
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

/// Represents a logical connective.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogicalOperator {
    /// Logical and (`and`)
    And,
    /// Logical or (`or`)
    Or,
}

/// Represents a set-algebra operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SetOperator {
    /// Set union (`union`)
    Union,
    /// Set intersection (`intersection`)
    Intersection,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
            Self::Mod => "%",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::And => "and",
            Self::Or => "or",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for SetOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Union => "union",
            Self::Intersection => "intersection",
        };
        write!(f, "{operator}")
    }
}
