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

use crate::{simple_node_impl, Expression, Node};
use lox_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

/// An arithmetic, comparison, or equality operator.
///
/// The short-circuiting `and`/`or` are deliberately not here; they live in
/// [`crate::LogicalOperation`] so evaluation order stays a property of the
/// node kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOperation {
    /// Addition or string concatenation, i.e. `+`.
    Add,
    /// Division, i.e. `/`.
    Div,
    /// Equality, i.e. `==`.
    Eq,
    /// Greater-or-equal comparison, i.e. `>=`.
    Ge,
    /// Greater-than comparison, i.e. `>`.
    Gt,
    /// Less-or-equal comparison, i.e. `<=`.
    Le,
    /// Less-than comparison, i.e. `<`.
    Lt,
    /// Multiplication, i.e. `*`.
    Mul,
    /// Inequality, i.e. `!=`.
    Neq,
    /// Subtraction, i.e. `-`.
    Sub,
}

impl fmt::Display for BinaryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperation::*;
        let symbol = match self {
            Add => "+",
            Div => "/",
            Eq => "==",
            Ge => ">=",
            Gt => ">",
            Le => "<=",
            Lt => "<",
            Mul => "*",
            Neq => "!=",
            Sub => "-",
        };
        write!(f, "{symbol}")
    }
}

/// A binary operation, e.g. `left + right`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpression {
    /// The left operand.
    pub left: Box<Expression>,
    /// The operator.
    pub op: BinaryOperation,
    /// The right operand.
    pub right: Box<Expression>,
    /// The span covering both operands.
    pub span: Span,
}

simple_node_impl!(BinaryExpression);

impl fmt::Display for BinaryExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.op, self.right)
    }
}
