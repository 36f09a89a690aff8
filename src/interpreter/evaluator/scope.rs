use std::collections::HashMap;

use tracing::{debug, trace};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::core::NativeFunction,
        },
        value::core::Value,
    },
};

/// One frame of the scope stack.
///
/// A frame owns the variables declared in it and, for the root frame, the
/// host functions registered on the context.
#[derive(Default, Clone)]
pub struct Scope {
    /// Variables declared in this frame.
    pub variables: HashMap<String, Value>,
    /// Functions callable from this frame and every frame above it.
    pub functions: HashMap<String, NativeFunction>,
}

impl Context {
    /// Pushes an empty child frame.
    pub fn push_scope(&mut self) {
        self.scope_stack.push(Scope::default());
        trace!(depth = self.scope_stack.len(), "pushed scope");
    }

    /// Pops the innermost frame. The root frame is never removed.
    pub fn pop_scope(&mut self) {
        if self.scope_stack.len() > 1 {
            self.scope_stack.pop();
        }
        trace!(depth = self.scope_stack.len(), "popped scope");
    }

    /// Number of frames currently on the stack, the root included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scope_stack.len()
    }

    /// Looks a variable up from the innermost frame outward.
    ///
    /// # Example
    /// ```
    /// use tally::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let mut context = Context::new();
    /// context.declare_variable("x", Value::Number(1.0), 1).unwrap();
    /// context.push_scope();
    ///
    /// assert_eq!(context.get_variable("x"), Some(&Value::Number(1.0)));
    /// ```
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&Value> {
        self.scope_stack
            .iter()
            .rev()
            .find_map(|scope| scope.variables.get(name))
    }

    /// Binds a new variable in the innermost frame.
    ///
    /// Shadowing a name from an outer frame is allowed.
    ///
    /// # Errors
    /// `RuntimeError::AlreadyDeclared` if the innermost frame already owns
    /// `name`.
    pub fn declare_variable(&mut self, name: &str, value: Value, line: usize) -> EvalResult<()> {
        let depth = self.scope_stack.len();
        let Some(scope) = self.scope_stack.last_mut() else {
            return Err(RuntimeError::UnknownVariable { name: name.to_string(),
                                                       line });
        };

        if scope.variables.contains_key(name) {
            return Err(RuntimeError::AlreadyDeclared { name: name.to_string(),
                                                       line });
        }

        scope.variables.insert(name.to_string(), value);
        debug!(variable = name, %value, depth, "declared variable");
        Ok(())
    }

    /// Stores `value` in the nearest frame that declares `name`.
    ///
    /// # Errors
    /// `RuntimeError::UnknownVariable` if no frame declares `name`.
    pub fn assign_variable(&mut self, name: &str, value: Value, line: usize) -> EvalResult<()> {
        let slot = self.scope_stack
                       .iter_mut()
                       .rev()
                       .find_map(|scope| scope.variables.get_mut(name))
                       .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                                      line })?;
        *slot = value;
        Ok(())
    }

    /// Looks a function up from the innermost frame outward.
    #[must_use]
    pub fn get_function(&self, name: &str) -> Option<&NativeFunction> {
        self.scope_stack
            .iter()
            .rev()
            .find_map(|scope| scope.functions.get(name))
    }

    /// Installs `function` in the root frame, replacing any function of the
    /// same name.
    pub fn define_function(&mut self, name: &str, function: NativeFunction) {
        if let Some(root) = self.scope_stack.first_mut() {
            root.functions.insert(name.to_string(), function);
        }
    }
}
