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

use crate::{builtins, Builtin, Callable, Environment, Value};

use lox_ast::Program;
use lox_errors::{Result, RuntimeError};
use lox_span::Span;

use std::{
    cell::RefCell,
    io::{self, Write},
    rc::Rc,
};

/// A signal unwinding the evaluator.
///
/// `Return` is control flow, not an error: it is raised by a `return`
/// statement and caught by the enclosing call. `Fault` is a genuine runtime
/// error and unwinds all the way to [`Interpreter::interpret`].
pub(crate) enum Interrupt {
    Return(Value, Span),
    Fault(RuntimeError),
}

impl From<RuntimeError> for Interrupt {
    fn from(err: RuntimeError) -> Self {
        Interrupt::Fault(err)
    }
}

/// The result of evaluating one node.
pub(crate) type Evaluation<T> = std::result::Result<T, Interrupt>;

/// The tree-walking evaluator.
///
/// Holds the global scope (pre-populated with builtins), the environment the
/// next statement runs in, and the writer `print` goes to.
pub struct Interpreter {
    pub(crate) globals: Rc<RefCell<Environment>>,
    pub(crate) environment: Rc<RefCell<Environment>>,
    pub(crate) output: Box<dyn Write>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Returns a new interpreter printing to stdout.
    pub fn new() -> Self {
        Self::with_output(Box::new(io::stdout()))
    }

    /// Returns a new interpreter printing to `output`.
    pub fn with_output(output: Box<dyn Write>) -> Self {
        let globals = Rc::new(RefCell::new(Environment::new()));
        let mut interpreter = Self { environment: globals.clone(), globals, output };

        for builtin in builtins::defaults() {
            interpreter.register_builtin(builtin);
        }

        interpreter
    }

    /// Registers a host function into the global environment.
    ///
    /// This is the whole extension interface: a builtin is just a callable
    /// value bound to a name before execution begins.
    pub fn register_builtin(&mut self, builtin: Builtin) {
        let name = builtin.name.to_string();
        self.globals.borrow_mut().define(name, Value::Callable(Rc::new(Callable::Builtin(builtin))));
    }

    /// A handle on the global environment.
    pub fn globals(&self) -> Rc<RefCell<Environment>> {
        self.globals.clone()
    }

    /// Evaluates `program` statement by statement.
    ///
    /// Returns the value of the last statement, which the REPL echoes. A
    /// runtime error aborts the remainder of the program; a `return` that
    /// escapes every call frame is reported as one.
    pub fn interpret(&mut self, program: &Program) -> Result<Value> {
        let mut last = Value::Nil;

        for statement in &program.statements {
            last = match self.execute_statement(statement) {
                Ok(value) => value,
                Err(Interrupt::Fault(err)) => return Err(err.into()),
                Err(Interrupt::Return(_, span)) => {
                    return Err(RuntimeError::return_outside_function(&span).into());
                }
            };
        }

        tracing::debug!(statements = program.statements.len(), "interpreted program");

        Ok(last)
    }
}
