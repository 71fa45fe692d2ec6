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

//! The abstract syntax tree of the Lox interpreter.
//!
//! Expressions and statements are closed enums with one struct per variant,
//! matched exhaustively by every consumer. Nodes are immutable after
//! construction and each carries the [`lox_span::Span`] it was parsed from.

#![forbid(unsafe_code)]

pub mod ast;
pub use ast::Ast;

pub mod common;
pub use common::*;

pub mod expression;
pub use expression::*;

pub mod program;
pub use program::Program;

pub mod statement;
pub use statement::*;
