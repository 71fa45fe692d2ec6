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

use crate::{Identifier, Node};
use lox_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod assign;
pub use assign::*;

pub mod binary;
pub use binary::*;

pub mod call;
pub use call::*;

pub mod grouping;
pub use grouping::*;

pub mod literal;
pub use literal::*;

pub mod logical;
pub use logical::*;

pub mod unary;
pub use unary::*;

/// An expression in the program.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// A variable assignment, e.g. `x = 1`.
    Assign(AssignExpression),
    /// An arithmetic, comparison, or equality operation.
    Binary(BinaryExpression),
    /// A function call.
    Call(CallExpression),
    /// A parenthesized expression.
    Grouping(GroupingExpression),
    /// A variable reference.
    Identifier(Identifier),
    /// A literal value.
    Literal(LiteralExpression),
    /// A short-circuiting `and`/`or` operation.
    Logical(LogicalExpression),
    /// A unary `!` or `-` operation.
    Unary(UnaryExpression),
}

impl Node for Expression {
    fn span(&self) -> Span {
        use Expression::*;
        match self {
            Assign(n) => n.span(),
            Binary(n) => n.span(),
            Call(n) => n.span(),
            Grouping(n) => n.span(),
            Identifier(n) => n.span(),
            Literal(n) => n.span(),
            Logical(n) => n.span(),
            Unary(n) => n.span(),
        }
    }

    fn set_span(&mut self, span: Span) {
        use Expression::*;
        match self {
            Assign(n) => n.set_span(span),
            Binary(n) => n.set_span(span),
            Call(n) => n.set_span(span),
            Grouping(n) => n.set_span(span),
            Identifier(n) => n.set_span(span),
            Literal(n) => n.set_span(span),
            Logical(n) => n.set_span(span),
            Unary(n) => n.set_span(span),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Expression::*;
        match self {
            Assign(n) => n.fmt(f),
            Binary(n) => n.fmt(f),
            Call(n) => n.fmt(f),
            Grouping(n) => n.fmt(f),
            Identifier(n) => n.fmt(f),
            Literal(n) => n.fmt(f),
            Logical(n) => n.fmt(f),
            Unary(n) => n.fmt(f),
        }
    }
}
