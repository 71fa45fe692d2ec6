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

use crate::{simple_node_impl, Identifier, Node, Statement};
use lox_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A `fun` declaration.
///
/// The body outlives this statement whenever a callable value captures it, so
/// the evaluator shares it out of an `Rc` clone at definition time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    /// The function's name.
    pub name: Identifier,
    /// The parameter names, in positional order.
    pub parameters: Vec<Identifier>,
    /// The function body.
    pub body: Box<Statement>,
    /// The span from the `fun` keyword through the body.
    pub span: Span,
}

simple_node_impl!(FunctionDeclaration);

impl fmt::Display for FunctionDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fun {}(", self.name)?;
        for (i, parameter) in self.parameters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            parameter.fmt(f)?;
        }
        write!(f, ") {}", self.body)
    }
}
