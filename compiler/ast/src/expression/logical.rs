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

/// A short-circuiting logical operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicalOperation {
    /// `and`; the right operand is skipped when the left is falsy.
    And,
    /// `or`; the right operand is skipped when the left is truthy.
    Or,
}

impl fmt::Display for LogicalOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalOperation::And => write!(f, "and"),
            LogicalOperation::Or => write!(f, "or"),
        }
    }
}

/// A short-circuiting `and`/`or` operation.
///
/// Kept distinct from [`crate::BinaryExpression`] so the evaluator never has
/// to inspect an operator to decide whether the right operand runs, and so
/// the original operand value (not a coerced boolean) can be returned.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogicalExpression {
    /// The left operand, always evaluated.
    pub left: Box<Expression>,
    /// The operator.
    pub op: LogicalOperation,
    /// The right operand, evaluated only when the left does not decide.
    pub right: Box<Expression>,
    /// The span covering both operands.
    pub span: Span,
}

simple_node_impl!(LogicalExpression);

impl fmt::Display for LogicalExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.op, self.right)
    }
}
