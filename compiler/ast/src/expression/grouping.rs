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

/// A parenthesized expression.
///
/// Kept as its own node so the printed tree round-trips the source shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroupingExpression {
    /// The expression inside the parentheses.
    pub expression: Box<Expression>,
    /// The span covering the parentheses.
    pub span: Span,
}

simple_node_impl!(GroupingExpression);

impl fmt::Display for GroupingExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.expression)
    }
}
