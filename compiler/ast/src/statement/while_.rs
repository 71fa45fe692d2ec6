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

use crate::{simple_node_impl, Expression, Node, Statement};
use lox_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A `while` loop.
///
/// This is the only loop node; the parser rewrites `for` loops into a block
/// wrapping one of these, so the evaluator never sees a `for`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WhileStatement {
    /// The loop condition, re-evaluated before every iteration.
    pub condition: Expression,
    /// The loop body.
    pub body: Box<Statement>,
    /// The span from the loop keyword through the body.
    pub span: Span,
}

simple_node_impl!(WhileStatement);

impl fmt::Display for WhileStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "while ({}) {}", self.condition, self.body)
    }
}
