use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{BinaryOperator, Expr},
    error::{Diagnostic, RuntimeError},
    interpreter::{
        evaluator::{binary::core::apply_arithmetic, function::builtin},
        lexer::tokenize,
        parser::core::parse_program,
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The maximum number of nested calls a single function may have in flight.
pub const MAX_RECURSION_DEPTH: usize = 50;

/// A user-defined function: its parameter names and its body expression.
#[derive(Debug, Clone)]
pub struct UserFunction {
    /// The declared parameter names, in order.
    pub params: Vec<String>,
    /// The body expression evaluated on every call.
    pub body:   Rc<Expr>,
}

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: global variable bindings, all
/// user-defined functions, the stack of parameter frames for calls currently
/// in flight, and the per-function recursion depth counters.
///
/// ## Usage
///
/// `Context` is created once and reused for evaluating programs. State
/// persists across calls to `eval_source`, so an interactive session keeps
/// its variables and functions between inputs.
pub struct Context {
    globals:              HashMap<String, Value>,
    pub(crate) functions: HashMap<String, UserFunction>,
    pub(crate) frames:    Vec<HashMap<String, Value>>,
    pub(crate) depths:    HashMap<String, usize>,
}

impl Context {
    /// Creates a new evaluation context with no variables or functions
    /// defined.
    #[must_use]
    pub fn new() -> Self {
        Self { globals:   HashMap::new(),
               functions: HashMap::new(),
               frames:    Vec::new(),
               depths:    HashMap::new(), }
    }

    /// Tokenizes, parses and evaluates a source string.
    ///
    /// Statements run in order and the value of the last one is returned; an
    /// empty program evaluates to `null`. Recursion depth counters and stale
    /// call frames are reset on entry, so one failed statement does not
    /// poison the next call.
    ///
    /// # Parameters
    /// - `source`: The program text.
    /// - `file`: Displayed origin of the source, used in diagnostics.
    ///
    /// # Returns
    /// The value of the last statement.
    ///
    /// # Errors
    /// Returns a rendered `Diagnostic` if parsing or evaluation fails.
    ///
    /// # Example
    /// ```
    /// use ami::interpreter::evaluator::core::Context;
    ///
    /// let mut context = Context::new();
    /// let value = context.eval_source("x = 2; x ^ 10", "script").unwrap();
    ///
    /// assert_eq!(value.to_string(), "1024");
    /// ```
    pub fn eval_source(&mut self, source: &str, file: &str) -> Result<Value, Diagnostic> {
        self.depths.clear();
        self.frames.clear();

        let tokens = tokenize(source);
        let statements = parse_program(&mut tokens.iter().peekable())
            .map_err(|error| Diagnostic::from_parse(&error, file, source))?;

        let mut result = Value::Null;
        for statement in &statements {
            result = self.eval(statement)
                         .map_err(|error| Diagnostic::from_runtime(&error, file, source))?;
        }

        Ok(result)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation.
    /// The evaluator dispatches based on expression variant: literals,
    /// identifiers, assignments, unary and binary operations, conditionals,
    /// function calls and definitions, interval, set and tensor literals,
    /// set algebra, membership tests, and indexing.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed value.
    ///
    /// # Errors
    /// Propagates any `RuntimeError` raised by the handlers.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Number { value, .. } => Ok(Value::Number(*value)),
            Expr::Bool { value, .. } => Ok(Value::Bool(*value)),
            Expr::Null { .. } => Ok(Value::Null),
            Expr::Identifier { name, col } => self.eval_identifier(name, *col),
            Expr::Assignment { name, value, col } => self.eval_assignment(name, value, *col),
            Expr::CompoundAssignment { name, op, value, col } => {
                self.eval_compound_assignment(name, *op, value, *col)
            },
            Expr::BinaryOp { left, op, right, col } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, &left, &right, *col)
            },
            Expr::Comparison { left, op, right, col } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_comparison(*op, &left, &right, *col)
            },
            Expr::Logical { left, op, right, col } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_logical(*op, &left, &right, *col)
            },
            Expr::Negate { expr, col } => {
                let value = self.eval(expr)?;
                Self::eval_negate(&value, *col)
            },
            Expr::Not { expr, col } => {
                let value = self.eval(expr)?;
                Self::eval_not(&value, *col)
            },
            Expr::Factorial { expr, col } => {
                let value = self.eval(expr)?;
                Self::eval_factorial(&value, *col)
            },
            Expr::IfExpr { condition,
                           then_branch,
                           else_branch,
                           .. } => self.eval_if(condition, then_branch, else_branch.as_ref()),
            Expr::FunctionCall { name, arguments, col } => {
                self.eval_function_call(name, arguments, *col)
            },
            Expr::FunctionDef { name, params, body, col } => {
                self.eval_function_def(name, params, body, *col)
            },
            Expr::Interval { min,
                             min_strict,
                             max,
                             max_strict,
                             col, } => self.eval_interval(min, *min_strict, max, *max_strict, *col),
            Expr::SetLiteral { elements, .. } => self.eval_set_literal(elements),
            Expr::TensorLiteral { elements, col } => self.eval_tensor_literal(elements, *col),
            Expr::SetOp { left, op, right, col } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_set_op(*op, left, right, *col)
            },
            Expr::In { element, container, col } => {
                let element = self.eval(element)?;
                let container = self.eval(container)?;
                Self::eval_membership(&element, &container, *col)
            },
            Expr::Index { target, index, col } => {
                let target = self.eval(target)?;
                let index = self.eval(index)?;
                Self::eval_index(&target, &index, *col)
            },
        }
    }

    /// Resolves an identifier to its value.
    ///
    /// Lookup order: parameter frames from the innermost call outwards, then
    /// global variables, then built-in constants.
    ///
    /// # Errors
    /// Returns `UndeclaredIdentifier` if the name is bound nowhere.
    fn eval_identifier(&self, name: &str, col: usize) -> EvalResult<Value> {
        for frame in self.frames.iter().rev() {
            if let Some(value) = frame.get(name) {
                return Ok(value.clone());
            }
        }
        if let Some(value) = self.globals.get(name) {
            return Ok(value.clone());
        }
        if let Some(value) = builtin::constant(name) {
            return Ok(Value::Number(value));
        }

        Err(RuntimeError::UndeclaredIdentifier { name: name.to_string(),
                                                 col })
    }

    /// Evaluates an assignment, binding a global variable.
    ///
    /// Built-in constants cannot be shadowed. The statement's value is a
    /// textual echo of the binding, e.g. `x = 5`.
    fn eval_assignment(&mut self, name: &str, value: &Expr, col: usize) -> EvalResult<Value> {
        if builtin::constant(name).is_some() {
            return Err(RuntimeError::BuiltinIdentifierAssignment { name: name.to_string(),
                                                                   col });
        }

        let value = self.eval(value)?;
        let echo = format!("{name} = {value}");
        self.globals.insert(name.to_string(), value);

        Ok(Value::Text(echo))
    }

    /// Evaluates a compound assignment such as `x += 2`.
    ///
    /// The target must already be a global variable holding a number.
    /// Built-in constants fail the lookup and are reported as undeclared.
    fn eval_compound_assignment(&mut self,
                                name: &str,
                                op: BinaryOperator,
                                value: &Expr,
                                col: usize)
                                -> EvalResult<Value> {
        let Some(current) = self.globals.get(name) else {
            return Err(RuntimeError::UndeclaredIdentifier { name: name.to_string(),
                                                            col });
        };
        let current = current.as_number(col)?;
        let operand = self.eval(value)?.as_number(value.column())?;

        let result = apply_arithmetic(op, current, operand);
        self.globals.insert(name.to_string(), Value::Number(result));

        Ok(Value::Text(format!("{name} = {}", Value::Number(result))))
    }

    /// Evaluates a conditional expression.
    ///
    /// A false condition with no `else` branch produces `null`.
    fn eval_if(&mut self,
               condition: &Expr,
               then_branch: &Expr,
               else_branch: Option<&Rc<Expr>>)
               -> EvalResult<Value> {
        if self.eval(condition)?.truthy(condition.column())? {
            self.eval(then_branch)
        } else if let Some(else_branch) = else_branch {
            self.eval(else_branch)
        } else {
            Ok(Value::Null)
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
