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

use crate::Node;
use lox_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A literal value written directly in the source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum LiteralExpression {
    /// A `true` or `false` literal.
    Boolean(bool, Span),
    /// The `nil` literal.
    Nil(Span),
    /// A number literal; Lox numbers are IEEE-754 doubles.
    Number(f64, Span),
    /// A string literal, without the enclosing quotes.
    String(String, Span),
}

impl Node for LiteralExpression {
    fn span(&self) -> Span {
        use LiteralExpression::*;
        match self {
            Boolean(_, span) | Nil(span) | Number(_, span) | String(_, span) => span.clone(),
        }
    }

    fn set_span(&mut self, new: Span) {
        use LiteralExpression::*;
        match self {
            Boolean(_, span) | Nil(span) | Number(_, span) | String(_, span) => *span = new,
        }
    }
}

impl fmt::Display for LiteralExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use LiteralExpression::*;
        match self {
            Boolean(value, _) => write!(f, "{value}"),
            Nil(_) => write!(f, "nil"),
            Number(value, _) => write!(f, "{value}"),
            String(value, _) => write!(f, "\"{value}\""),
        }
    }
}
