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

/// A unary operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOperation {
    /// Arithmetic negation, i.e. `-`.
    Negate,
    /// Logical negation of truthiness, i.e. `!`.
    Not,
}

impl fmt::Display for UnaryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOperation::Negate => write!(f, "-"),
            UnaryOperation::Not => write!(f, "!"),
        }
    }
}

/// A unary operation, e.g. `!ready` or `-x`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnaryExpression {
    /// The operator.
    pub op: UnaryOperation,
    /// The operand the operator is applied to.
    pub receiver: Box<Expression>,
    /// The span covering the operator and the operand.
    pub span: Span,
}

simple_node_impl!(UnaryExpression);

impl fmt::Display for UnaryExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.op, self.receiver)
    }
}
