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
use lox_span::Span;

use std::{cell::RefCell, mem, rc::Rc};

impl Interpreter {
    /// Evaluates `expression` in the current environment.
    pub(crate) fn evaluate_expression(&mut self, expression: &Expression) -> Evaluation<Value> {
        match expression {
            Expression::Literal(literal) => Ok(Self::literal_value(literal)),
            Expression::Grouping(grouping) => self.evaluate_expression(&grouping.expression),
            Expression::Unary(unary) => self.evaluate_unary_expression(unary),
            Expression::Binary(binary) => self.evaluate_binary_expression(binary),
            Expression::Logical(logical) => self.evaluate_logical_expression(logical),
            Expression::Identifier(name) => Ok(self.environment.borrow().get(name)?),
            Expression::Assign(assign) => self.evaluate_assign_expression(assign),
            Expression::Call(call) => self.evaluate_call_expression(call),
        }
    }

    fn literal_value(literal: &LiteralExpression) -> Value {
        match literal {
            LiteralExpression::Boolean(value, _) => Value::Boolean(*value),
            LiteralExpression::Nil(_) => Value::Nil,
            LiteralExpression::Number(value, _) => Value::Number(*value),
            LiteralExpression::String(value, _) => Value::String(value.clone()),
        }
    }

    fn evaluate_unary_expression(&mut self, unary: &UnaryExpression) -> Evaluation<Value> {
        let value = self.evaluate_expression(&unary.receiver)?;

        match unary.op {
            UnaryOperation::Negate => match value {
                Value::Number(n) => Ok(Value::Number(-n)),
                _ => Err(RuntimeError::operand_must_be_a_number(&unary.span).into()),
            },
            UnaryOperation::Not => Ok(Value::Boolean(!value.is_truthy())),
        }
    }

    /// Unwraps two number operands, or raises the shared operand type error.
    fn as_numbers(left: &Value, right: &Value, span: &Span) -> Evaluation<(f64, f64)> {
        match (left, right) {
            (Value::Number(l), Value::Number(r)) => Ok((*l, *r)),
            _ => Err(RuntimeError::operands_must_be_numbers(span).into()),
        }
    }

    fn evaluate_binary_expression(&mut self, binary: &BinaryExpression) -> Evaluation<Value> {
        // Left before right; the order is observable through side effects.
        let left = self.evaluate_expression(&binary.left)?;
        let right = self.evaluate_expression(&binary.right)?;

        use BinaryOperation::*;
        Ok(match binary.op {
            Add => match (left, right) {
                (Value::Number(l), Value::Number(r)) => Value::Number(l + r),
                (Value::String(l), Value::String(r)) => Value::String(format!("{l}{r}")),
                _ => return Err(RuntimeError::operands_must_be_numbers_or_strings(&binary.span).into()),
            },
            Sub => {
                let (l, r) = Self::as_numbers(&left, &right, &binary.span)?;
                Value::Number(l - r)
            }
            Mul => {
                let (l, r) = Self::as_numbers(&left, &right, &binary.span)?;
                Value::Number(l * r)
            }
            // Division by zero is not an error; IEEE-754 yields inf/nan.
            Div => {
                let (l, r) = Self::as_numbers(&left, &right, &binary.span)?;
                Value::Number(l / r)
            }
            Lt => {
                let (l, r) = Self::as_numbers(&left, &right, &binary.span)?;
                Value::Boolean(l < r)
            }
            Le => {
                let (l, r) = Self::as_numbers(&left, &right, &binary.span)?;
                Value::Boolean(l <= r)
            }
            Gt => {
                let (l, r) = Self::as_numbers(&left, &right, &binary.span)?;
                Value::Boolean(l > r)
            }
            Ge => {
                let (l, r) = Self::as_numbers(&left, &right, &binary.span)?;
                Value::Boolean(l >= r)
            }
            Eq => Value::Boolean(left == right),
            Neq => Value::Boolean(left != right),
        })
    }

    fn evaluate_logical_expression(&mut self, logical: &LogicalExpression) -> Evaluation<Value> {
        let left = self.evaluate_expression(&logical.left)?;

        // When the left operand decides the outcome, return it as-is; the
        // result is the deciding operand, never a coerced boolean.
        match logical.op {
            LogicalOperation::Or if left.is_truthy() => Ok(left),
            LogicalOperation::And if !left.is_truthy() => Ok(left),
            _ => self.evaluate_expression(&logical.right),
        }
    }

    fn evaluate_assign_expression(&mut self, assign: &AssignExpression) -> Evaluation<Value> {
        let value = self.evaluate_expression(&assign.value)?;
        self.environment.borrow_mut().assign(&assign.place, value.clone())?;
        Ok(value)
    }

    fn evaluate_call_expression(&mut self, call: &CallExpression) -> Evaluation<Value> {
        let callee = self.evaluate_expression(&call.function)?;

        // Arguments evaluate left-to-right before the call.
        let mut arguments = Vec::with_capacity(call.arguments.len());
        for argument in &call.arguments {
            arguments.push(self.evaluate_expression(argument)?);
        }

        let callable = match callee {
            Value::Callable(callable) => callable,
            _ => return Err(RuntimeError::not_callable(&call.span).into()),
        };

        if arguments.len() != callable.arity() {
            return Err(RuntimeError::arity_mismatch(callable.arity(), arguments.len(), &call.span).into());
        }

        match &*callable {
            Callable::Builtin(builtin) => Ok((builtin.func)(self.environment.clone(), &arguments)?),
            Callable::Function(function) => self.call_function(function, arguments),
        }
    }

    /// Invokes a user function: binds arguments positionally in a fresh frame
    /// whose parent is the captured closure environment, then runs the body.
    fn call_function(&mut self, function: &LoxFunction, arguments: Vec<Value>) -> Evaluation<Value> {
        let mut frame = Environment::with_parent(function.closure.clone());
        for (parameter, argument) in function.parameters.iter().zip(arguments) {
            frame.define(parameter.name.clone(), argument);
        }

        let enclosing = mem::replace(&mut self.environment, Rc::new(RefCell::new(frame)));
        let result = self.execute_statement(&function.body);
        self.environment = enclosing;

        match result {
            // Without an explicit `return`, the call's result is the body's
            // statement value.
            Ok(value) => Ok(value),
            Err(Interrupt::Return(value, _)) => Ok(value),
            Err(fault) => Err(fault),
        }
    }
}
