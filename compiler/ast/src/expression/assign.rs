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

use crate::{simple_node_impl, Expression, Identifier, Node};
use lox_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

/// An assignment to an existing variable, e.g. `x = 1`.
///
/// Only ever constructed when the left-hand side of the `=` parsed as a plain
/// variable reference; anything else is rejected with "Invalid assignment.".
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssignExpression {
    /// The variable being assigned to.
    pub place: Identifier,
    /// The value to store.
    pub value: Box<Expression>,
    /// The span covering the place and the value.
    pub span: Span,
}

simple_node_impl!(AssignExpression);

impl fmt::Display for AssignExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.place, self.value)
    }
}
