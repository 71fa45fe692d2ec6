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

use crate::{
    interpreter::{Evaluation, Interrupt},
    Callable, Environment, Interpreter, LoxFunction, Value,
};

use lox_ast::*;
use lox_errors::RuntimeError;

use std::{cell::RefCell, io::Write, mem, rc::Rc};

impl Interpreter {
    /// Executes `statement` in the current environment.
    ///
    /// Every statement yields a value: the last value the statement produced,
    /// or nil. User code only observes these through function call results,
    /// but the REPL echoes the top-level one.
    pub(crate) fn execute_statement(&mut self, statement: &Statement) -> Evaluation<Value> {
        match statement {
            Statement::Expression(statement) => self.evaluate_expression(&statement.expression),
            Statement::Print(statement) => {
                let value = self.evaluate_expression(&statement.expression)?;
                writeln!(self.output, "{value}")
                    .map_err(|err| Interrupt::from(RuntimeError::output_write_failed(err, &statement.span)))?;
                Ok(Value::Nil)
            }
            Statement::Definition(statement) => {
                let value = match &statement.initializer {
                    Some(initializer) => self.evaluate_expression(initializer)?,
                    None => Value::Nil,
                };
                self.environment.borrow_mut().define(statement.name.name.clone(), value.clone());
                Ok(value)
            }
            Statement::Block(block) => self.execute_block(block),
            Statement::Conditional(statement) => {
                if self.evaluate_expression(&statement.condition)?.is_truthy() {
                    self.execute_statement(&statement.then)
                } else if let Some(otherwise) = &statement.otherwise {
                    self.execute_statement(otherwise)
                } else {
                    Ok(Value::Nil)
                }
            }
            Statement::While(statement) => {
                let mut last = Value::Nil;
                // The condition re-evaluates in the enclosing environment on
                // every iteration; only the body gets a child scope, via its
                // own block.
                while self.evaluate_expression(&statement.condition)?.is_truthy() {
                    last = self.execute_statement(&statement.body)?;
                }
                Ok(last)
            }
            Statement::Function(declaration) => {
                // The closure is the environment current right now; the body
                // sees its defining scope, not its caller's.
                let function = LoxFunction {
                    name: declaration.name.clone(),
                    parameters: declaration.parameters.clone(),
                    body: Rc::new((*declaration.body).clone()),
                    closure: self.environment.clone(),
                };

                let value = Value::Callable(Rc::new(Callable::Function(function)));
                self.environment.borrow_mut().define(declaration.name.name.clone(), value.clone());
                Ok(value)
            }
            Statement::Return(statement) => {
                let value = match &statement.expression {
                    Some(expression) => self.evaluate_expression(expression)?,
                    None => Value::Nil,
                };
                Err(Interrupt::Return(value, statement.span.clone()))
            }
        }
    }

    /// Executes a block in a fresh child environment, restoring the enclosing
    /// one afterwards even when the block unwinds.
    fn execute_block(&mut self, block: &Block) -> Evaluation<Value> {
        let child = Environment::with_parent(self.environment.clone());
        let enclosing = mem::replace(&mut self.environment, Rc::new(RefCell::new(child)));

        let mut result = Ok(Value::Nil);
        for statement in &block.statements {
            result = self.execute_statement(statement);
            if result.is_err() {
                break;
            }
        }

        self.environment = enclosing;
        result
    }
}
