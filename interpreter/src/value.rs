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

use crate::Environment;

use lox_ast::{Identifier, Statement};
use lox_errors::RuntimeError;

use std::{cell::RefCell, fmt, rc::Rc};

/// The signature of a host function: the caller's environment and the
/// evaluated arguments, in positional order.
pub type BuiltinFn = fn(Rc<RefCell<Environment>>, &[Value]) -> Result<Value, RuntimeError>;

/// A host function registered into the global environment before execution.
pub struct Builtin {
    /// The display name, also the name it is bound under.
    pub name: &'static str,
    /// The number of arguments the function takes.
    pub arity: usize,
    /// The invocation capability.
    pub func: BuiltinFn,
}

/// A user function: parameters, a shared body, and the environment captured
/// at definition time.
pub struct LoxFunction {
    /// The function's name, for display and call-site diagnostics.
    pub name: Identifier,
    /// The parameter names, in positional order.
    pub parameters: Vec<Identifier>,
    /// The body statement; shared so it outlives its declaring statement.
    pub body: Rc<Statement>,
    /// The closure: the environment in scope where the function was defined.
    pub closure: Rc<RefCell<Environment>>,
}

/// Something a call expression can invoke.
pub enum Callable {
    /// A host function.
    Builtin(Builtin),
    /// A user function closing over its defining environment.
    Function(LoxFunction),
}

impl Callable {
    /// The callable's display name.
    pub fn name(&self) -> &str {
        match self {
            Callable::Builtin(builtin) => builtin.name,
            Callable::Function(function) => &function.name.name,
        }
    }

    /// The number of arguments the callable expects.
    pub fn arity(&self) -> usize {
        match self {
            Callable::Builtin(builtin) => builtin.arity,
            Callable::Function(function) => function.parameters.len(),
        }
    }
}

// Keep callables opaque when debugging values; recursing into a closure would
// walk the whole environment chain.
impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Callable::Builtin(builtin) => write!(f, "Builtin({})", builtin.name),
            Callable::Function(function) => write!(f, "Function({})", function.name),
        }
    }
}

/// A Lox runtime value.
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// The absent value.
    #[default]
    Nil,
    /// A boolean.
    Boolean(bool),
    /// An IEEE-754 double.
    Number(f64),
    /// An owned string.
    String(String),
    /// A callable: a builtin or a user function. Shared, so copies of a
    /// function value compare equal by identity.
    Callable(Rc<Callable>),
}

impl Value {
    /// The truthiness rule: nil and false are false, everything else is true.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Nil => false,
            Value::Boolean(b) => *b,
            _ => true,
        }
    }
}

impl PartialEq for Value {
    /// Same-tag value equality; values of different kinds are never equal,
    /// and callables compare by identity.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Boolean(l), Value::Boolean(r)) => l == r,
            (Value::Number(l), Value::Number(r)) => l == r,
            (Value::String(l), Value::String(r)) => l == r,
            (Value::Callable(l), Value::Callable(r)) => Rc::ptr_eq(l, r),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "<nil>"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s}"),
            Value::Callable(callable) => match &**callable {
                Callable::Builtin(builtin) => write!(f, "<native fn {}>", builtin.name),
                Callable::Function(function) => write!(f, "<fn {}>", function.name),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lox_span::Span;

    fn callable() -> Value {
        Value::Callable(Rc::new(Callable::Builtin(Builtin {
            name: "probe",
            arity: 0,
            func: |_, _| Ok(Value::Nil),
        })))
    }

    #[test]
    fn truthiness() {
        assert!(!Value::Nil.is_truthy());
        assert!(!Value::Boolean(false).is_truthy());
        assert!(Value::Boolean(true).is_truthy());
        assert!(Value::Number(0.0).is_truthy());
        assert!(Value::String(String::new()).is_truthy());
        assert!(callable().is_truthy());
    }

    #[test]
    fn cross_kind_comparisons_are_unequal() {
        assert_ne!(Value::Number(1.0), Value::String("1".to_string()));
        assert_ne!(Value::Boolean(true), Value::Number(1.0));
        assert_ne!(Value::Nil, Value::Boolean(false));
    }

    #[test]
    fn callables_compare_by_identity() {
        let a = callable();
        let b = a.clone();
        assert_eq!(a, b);
        assert_ne!(a, callable());
    }

    #[test]
    fn display_formats() {
        assert_eq!(Value::Nil.to_string(), "<nil>");
        assert_eq!(Value::Boolean(true).to_string(), "true");
        assert_eq!(Value::Number(7.0).to_string(), "7");
        assert_eq!(Value::Number(0.5).to_string(), "0.5");
        assert_eq!(Value::String("hi".to_string()).to_string(), "hi");
        assert_eq!(callable().to_string(), "<native fn probe>");

        let function = Value::Callable(Rc::new(Callable::Function(LoxFunction {
            name: Identifier::new("add".to_string(), Span::dummy()),
            parameters: Vec::new(),
            body: Rc::new(Statement::dummy(Span::dummy())),
            closure: Rc::new(RefCell::new(Environment::new())),
        })));
        assert_eq!(function.to_string(), "<fn add>");
    }
}
