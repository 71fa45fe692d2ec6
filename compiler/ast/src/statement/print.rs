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

/// A `print` statement; writes the formatted value and a newline to stdout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PrintStatement {
    /// The expression whose value is printed.
    pub expression: Expression,
    /// The span from the `print` keyword through the semicolon.
    pub span: Span,
}

simple_node_impl!(PrintStatement);

impl fmt::Display for PrintStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "print {};", self.expression)
    }
}
