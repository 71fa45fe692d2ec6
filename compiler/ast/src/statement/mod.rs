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

pub mod block;
pub use block::*;

pub mod conditional;
pub use conditional::*;

pub mod definition;
pub use definition::*;

pub mod expression;
pub use expression::*;

pub mod function;
pub use function::*;

pub mod print;
pub use print::*;

pub mod return_;
pub use return_::*;

pub mod while_;
pub use while_::*;

/// Program statement that defines some action (or expression) to be carried out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    /// A brace-delimited list of statements with its own scope.
    Block(Block),
    /// An `if` statement.
    Conditional(ConditionalStatement),
    /// A `var` declaration.
    Definition(DefinitionStatement),
    /// An expression evaluated for its effect.
    Expression(ExpressionStatement),
    /// A `fun` declaration.
    Function(FunctionDeclaration),
    /// A `print` statement.
    Print(PrintStatement),
    /// A `return` statement.
    Return(ReturnStatement),
    /// A `while` loop; `for` loops desugar to this at parse time.
    While(WhileStatement),
}

impl Statement {
    /// Returns a dummy statement made from an empty block `{}`.
    pub fn dummy(span: Span) -> Self {
        Self::Block(Block { statements: Vec::new(), span })
    }
}

impl Node for Statement {
    fn span(&self) -> Span {
        use Statement::*;
        match self {
            Block(n) => n.span(),
            Conditional(n) => n.span(),
            Definition(n) => n.span(),
            Expression(n) => n.span(),
            Function(n) => n.span(),
            Print(n) => n.span(),
            Return(n) => n.span(),
            While(n) => n.span(),
        }
    }

    fn set_span(&mut self, span: Span) {
        use Statement::*;
        match self {
            Block(n) => n.set_span(span),
            Conditional(n) => n.set_span(span),
            Definition(n) => n.set_span(span),
            Expression(n) => n.set_span(span),
            Function(n) => n.set_span(span),
            Print(n) => n.set_span(span),
            Return(n) => n.set_span(span),
            While(n) => n.set_span(span),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Statement::*;
        match self {
            Block(n) => n.fmt(f),
            Conditional(n) => n.fmt(f),
            Definition(n) => n.fmt(f),
            Expression(n) => n.fmt(f),
            Function(n) => n.fmt(f),
            Print(n) => n.fmt(f),
            Return(n) => n.fmt(f),
            While(n) => n.fmt(f),
        }
    }
}
