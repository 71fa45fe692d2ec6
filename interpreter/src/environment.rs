// Copyright (C) 2026 The Lox Contributors.
// This file is part of the Lox library.

// The Lox library is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// The Lox library is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with the Lox library. If not, see <https://www.gnu.org/licenses/>.

use crate::Value;

use lox_ast::Identifier;
use lox_errors::RuntimeError;

use indexmap::IndexMap;
use std::{cell::RefCell, rc::Rc};

/// One lexical scope: name bindings plus a handle on the enclosing scope.
///
/// The global scope has no parent; every block, loop, and call frame chains a
/// fresh environment onto the scope it opened in. Lookup only ever walks
/// upward, so parent handles can never form a cycle.
#[derive(Debug, Default)]
pub struct Environment {
    values: IndexMap<String, Value>,
    parent: Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    /// Returns a new root environment with no parent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new environment chained onto `parent`.
    pub fn with_parent(parent: Rc<RefCell<Environment>>) -> Self {
        Self { values: IndexMap::new(), parent: Some(parent) }
    }

    /// Binds `name` to `value` in this scope.
    ///
    /// Redefinition in the same scope silently replaces the old binding; the
    /// language allows `var x = 1; var x = 2;`.
    pub fn define(&mut self, name: String, value: Value) {
        self.values.insert(name, value);
    }

    /// Mutates the nearest enclosing binding of `name`.
    ///
    /// Walks the parent chain; assigning a name with no binding anywhere is a
    /// runtime error, never an implicit declaration.
    pub fn assign(&mut self, name: &Identifier, value: Value) -> Result<(), RuntimeError> {
        if let Some(binding) = self.values.get_mut(&name.name) {
            *binding = value;
            return Ok(());
        }

        match &self.parent {
            Some(parent) => parent.borrow_mut().assign(name, value),
            None => Err(RuntimeError::undefined_variable(&name.name, &name.span)),
        }
    }

    /// Reads the nearest enclosing binding of `name`.
    pub fn get(&self, name: &Identifier) -> Result<Value, RuntimeError> {
        if let Some(value) = self.values.get(&name.name) {
            return Ok(value.clone());
        }

        match &self.parent {
            Some(parent) => parent.borrow().get(name),
            None => Err(RuntimeError::undefined_variable(&name.name, &name.span)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lox_span::Span;

    fn ident(name: &str) -> Identifier {
        Identifier::new(name.to_string(), Span::dummy())
    }

    #[test]
    fn define_then_get() {
        let mut env = Environment::new();
        env.define("x".to_string(), Value::Number(1.0));
        assert_eq!(env.get(&ident("x")).unwrap(), Value::Number(1.0));
    }

    #[test]
    fn redefinition_replaces() {
        let mut env = Environment::new();
        env.define("x".to_string(), Value::Number(1.0));
        env.define("x".to_string(), Value::String("one".to_string()));
        assert_eq!(env.get(&ident("x")).unwrap(), Value::String("one".to_string()));
    }

    #[test]
    fn get_walks_the_parent_chain() {
        let root = Rc::new(RefCell::new(Environment::new()));
        root.borrow_mut().define("x".to_string(), Value::Number(1.0));

        let middle = Rc::new(RefCell::new(Environment::with_parent(root)));
        let leaf = Environment::with_parent(middle);

        assert_eq!(leaf.get(&ident("x")).unwrap(), Value::Number(1.0));
    }

    #[test]
    fn assign_mutates_the_nearest_enclosing_binding() {
        let root = Rc::new(RefCell::new(Environment::new()));
        root.borrow_mut().define("x".to_string(), Value::Number(1.0));

        let mut leaf = Environment::with_parent(root.clone());
        leaf.assign(&ident("x"), Value::Number(2.0)).unwrap();

        // The write landed in the root scope, not the leaf.
        assert_eq!(root.borrow().get(&ident("x")).unwrap(), Value::Number(2.0));
        assert_eq!(leaf.get(&ident("x")).unwrap(), Value::Number(2.0));
    }

    #[test]
    fn shadowing_hides_but_does_not_overwrite() {
        let root = Rc::new(RefCell::new(Environment::new()));
        root.borrow_mut().define("x".to_string(), Value::Number(1.0));

        let mut leaf = Environment::with_parent(root.clone());
        leaf.define("x".to_string(), Value::Number(99.0));

        assert_eq!(leaf.get(&ident("x")).unwrap(), Value::Number(99.0));
        assert_eq!(root.borrow().get(&ident("x")).unwrap(), Value::Number(1.0));
    }

    #[test]
    fn missing_names_error() {
        let mut env = Environment::new();
        let err = env.get(&ident("ghost")).unwrap_err();
        assert_eq!(err.message(), "Undefined variable 'ghost'.");

        let err = env.assign(&ident("ghost"), Value::Nil).unwrap_err();
        assert_eq!(err.message(), "Undefined variable 'ghost'.");
    }
}
