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

/// An `if` statement with an optional `else` branch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConditionalStatement {
    /// The branch condition, tested for truthiness.
    pub condition: Expression,
    /// The statement run when the condition is truthy.
    pub then: Box<Statement>,
    /// The statement run otherwise, if any.
    pub otherwise: Option<Box<Statement>>,
    /// The span from the `if` keyword through the last branch.
    pub span: Span,
}

simple_node_impl!(ConditionalStatement);

impl fmt::Display for ConditionalStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "if ({}) {}", self.condition, self.then)?;
        if let Some(otherwise) = &self.otherwise {
            write!(f, " else {otherwise}")?;
        }
        Ok(())
    }
}
