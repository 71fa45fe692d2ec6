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

use crate::{simple_node_impl, Node};
use lox_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A name in the program: a variable, function, or parameter.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Identifier {
    /// The name, verbatim from the source.
    pub name: String,
    /// Where the name was written.
    pub span: Span,
}

impl Identifier {
    /// Returns a new identifier from a name and the span it was read at.
    pub fn new(name: String, span: Span) -> Self {
        Self { name, span }
    }
}

simple_node_impl!(Identifier);

// Two mentions of the same name are the same identifier regardless of where
// they appear.
impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Identifier {}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
