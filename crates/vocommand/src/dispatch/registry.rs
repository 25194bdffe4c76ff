//! Registry of named custom functions.
//!
//! `custom` commands carry a function name instead of executable text.
//! The name is looked up here at dispatch time; an unregistered name is a
//! [`DispatchError::UnknownFunction`], never an evaluation of the stored
//! string.

use std::collections::HashMap;

use crate::error::DispatchError;

/// Handler signature for registered custom functions.
pub type CustomFn = Box<dyn Fn() -> Result<(), DispatchError> + Send + Sync>;

/// Maps function names to handlers.
#[derive(Default)]
pub struct FunctionRegistry {
    functions: HashMap<String, CustomFn>,
}

impl FunctionRegistry {
    pub fn new() -> FunctionRegistry {
        FunctionRegistry {
            functions: HashMap::new(),
        }
    }

    /// Register `handler` under `name`. Registering the same name again
    /// replaces the previous handler.
    pub fn register<F>(&mut self, name: impl Into<String>, handler: F)
    where
        F: Fn() -> Result<(), DispatchError> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.functions.insert(name.clone(), Box::new(handler)).is_some() {
            tracing::warn!("custom function '{name}' re-registered, replacing previous handler");
        }
    }

    /// Invoke the function registered under `name`.
    pub fn invoke(&self, name: &str) -> Result<(), DispatchError> {
        let handler = self
            .functions
            .get(name)
            .ok_or_else(|| DispatchError::UnknownFunction(name.to_string()))?;
        tracing::debug!("invoking custom function '{name}'");
        handler()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Registered names, sorted for stable output.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}
