use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult, UserFunction, MAX_RECURSION_DEPTH},
            function::builtin,
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives its numeric arguments, already checked for arity and
/// type, and the byte column for error reporting.
type BuiltinFn = fn(&[f64], usize) -> EvalResult<f64>;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the exact number of arguments the builtin takes,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: usize,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of every built-in function. Used to reject redefinitions.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sqrt"   => { arity: 1, func: |args, _| Ok(args[0].sqrt()) },
    "sin"    => { arity: 1, func: |args, _| Ok(args[0].sin()) },
    "cos"    => { arity: 1, func: |args, _| Ok(args[0].cos()) },
    "tan"    => { arity: 1, func: |args, _| Ok(args[0].tan()) },
    "sinh"   => { arity: 1, func: |args, _| Ok(args[0].sinh()) },
    "cosh"   => { arity: 1, func: |args, _| Ok(args[0].cosh()) },
    "tanh"   => { arity: 1, func: |args, _| Ok(args[0].tanh()) },
    "log"    => { arity: 1, func: |args, _| Ok(args[0].ln()) },
    "log10"  => { arity: 1, func: |args, _| Ok(args[0].log10()) },
    "log2"   => { arity: 1, func: |args, _| Ok(args[0].log2()) },
    "abs"    => { arity: 1, func: |args, _| Ok(args[0].abs()) },
    "round"  => { arity: 1, func: |args, _| Ok(args[0].round()) },
    "ceil"   => { arity: 1, func: |args, _| Ok(args[0].ceil()) },
    "floor"  => { arity: 1, func: |args, _| Ok(args[0].floor()) },
    "min"    => { arity: 2, func: |args, _| Ok(args[0].min(args[1])) },
    "max"    => { arity: 2, func: |args, _| Ok(args[0].max(args[1])) },
    "gcd"    => { arity: 2, func: builtin::gcd },
    "lcm"    => { arity: 2, func: builtin::lcm },
    "random" => { arity: 2, func: builtin::random },
}

impl Context {
    /// Evaluates a function call.
    ///
    /// Arguments are evaluated in the caller's scope first. The evaluator
    /// then checks whether the name matches a builtin; if so, it verifies
    /// arity, converts the arguments to numbers and executes the builtin.
    /// Otherwise it delegates to user-defined function handling.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arguments`: Unevaluated argument expressions.
    /// - `col`: Byte column for error reporting.
    ///
    /// # Returns
    /// The function result or an error if lookup, arity, or evaluation fails.
    pub(crate) fn eval_function_call(&mut self,
                                     name: &str,
                                     arguments: &[Rc<Expr>],
                                     col: usize)
                                     -> EvalResult<Value> {
        let mut arg_vals = Vec::with_capacity(arguments.len());
        for argument in arguments {
            arg_vals.push(self.eval(argument)?);
        }

        if let Some(builtin) = BUILTIN_TABLE.iter().find(|b| b.name == name) {
            if arg_vals.len() != builtin.arity {
                return Err(RuntimeError::ArgumentCountMismatch { name:     name.to_string(),
                                                                 expected: builtin.arity,
                                                                 found:    arg_vals.len(),
                                                                 col });
            }

            let mut numbers = Vec::with_capacity(arg_vals.len());
            for (value, argument) in arg_vals.iter().zip(arguments) {
                numbers.push(value.as_number(argument.column())?);
            }

            return Ok(Value::Number((builtin.func)(&numbers, col)?));
        }

        self.call_user_defined_function(name, arg_vals, col)
    }

    /// Executes a user-defined function.
    ///
    /// The function is retrieved from the context by name and its parameter
    /// count must match the number of supplied arguments. Each call pushes a
    /// fresh frame of parameter bindings; the per-function depth counter
    /// enforces the recursion ceiling and is unwound on every path.
    ///
    /// # Errors
    /// - `UndeclaredFunction` for an unknown name.
    /// - `ArgumentCountMismatch` for a wrong number of arguments.
    /// - `RecursionLimitExceeded` past `MAX_RECURSION_DEPTH` nested calls.
    fn call_user_defined_function(&mut self,
                                  name: &str,
                                  arg_vals: Vec<Value>,
                                  col: usize)
                                  -> EvalResult<Value> {
        let func = self.functions.get(name).cloned().ok_or_else(|| {
                                                        RuntimeError::UndeclaredFunction {
                    name: name.to_string(),
                    col,
                }
                                                    })?;

        if arg_vals.len() != func.params.len() {
            return Err(RuntimeError::ArgumentCountMismatch { name:     name.to_string(),
                                                             expected: func.params.len(),
                                                             found:    arg_vals.len(),
                                                             col });
        }

        let depth = self.depths.entry(name.to_string()).or_insert(0);
        if *depth >= MAX_RECURSION_DEPTH {
            return Err(RuntimeError::RecursionLimitExceeded { name:  name.to_string(),
                                                              limit: MAX_RECURSION_DEPTH,
                                                              col });
        }
        *depth += 1;

        let bindings = func.params
                           .iter()
                           .cloned()
                           .zip(arg_vals)
                           .collect::<HashMap<_, _>>();
        self.frames.push(bindings);

        let result = self.eval(&func.body);

        self.frames.pop();
        if let Some(depth) = self.depths.get_mut(name) {
            *depth -= 1;
        }

        result
    }

    /// Evaluates a function definition, storing it in the context.
    ///
    /// Redefining a user function replaces the old definition. Built-in
    /// function names and built-in constants as parameter names are
    /// rejected.
    ///
    /// # Returns
    /// A textual echo confirming the definition.
    pub(crate) fn eval_function_def(&mut self,
                                    name: &str,
                                    params: &[String],
                                    body: &Rc<Expr>,
                                    col: usize)
                                    -> EvalResult<Value> {
        if BUILTIN_FUNCTIONS.contains(&name) {
            return Err(RuntimeError::BuiltinFunctionRedefinition { name: name.to_string(),
                                                                   col });
        }
        if let Some(param) = params.iter().find(|param| builtin::constant(param).is_some()) {
            return Err(RuntimeError::BuiltinParameterName { name: param.clone(),
                                                            col });
        }

        self.functions.insert(name.to_string(),
                              UserFunction { params: params.to_vec(),
                                             body:   Rc::clone(body), });

        Ok(Value::Text(format!("defined function '{name}'")))
    }
}
