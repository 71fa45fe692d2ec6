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

//! The tree-walking evaluator for Lox.
//!
//! An [`Interpreter`] walks a parsed [`lox_ast::Program`] statement by
//! statement against a chain of lexical [`Environment`]s rooted at the
//! globals, which host the builtins. Execution is single-threaded and
//! synchronous; statements run in source order and operands evaluate
//! left-to-right.

#![forbid(unsafe_code)]

pub mod builtins;

pub mod environment;
pub use environment::Environment;

pub mod interpreter;
pub use interpreter::Interpreter;

pub mod value;
pub use value::{Builtin, BuiltinFn, Callable, LoxFunction, Value};

mod expression;
mod statement;
