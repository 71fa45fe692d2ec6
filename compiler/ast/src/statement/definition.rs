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

/// A `var` declaration; a missing initializer defaults the binding to nil.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DefinitionStatement {
    /// The name being declared.
    pub name: Identifier,
    /// The initializer expression, if one was written.
    pub initializer: Option<Expression>,
    /// The span from the `var` keyword through the semicolon.
    pub span: Span,
}

simple_node_impl!(DefinitionStatement);

impl fmt::Display for DefinitionStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.initializer {
            Some(initializer) => write!(f, "var {} = {initializer};", self.name),
            None => write!(f, "var {};", self.name),
        }
    }
}
