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

//! The Lox interpreter: a small dynamically typed scripting language with
//! C-like syntax, first-class functions, and lexical block scoping.
//!
//! Source text flows through the member crates in a straight line:
//! [`lox_parser`] turns it into tokens and then a [`lox_ast::Program`], and
//! [`lox_interpreter`] walks that tree against a chain of environments. The
//! [`cli`] module drives the pipeline for script files and the interactive
//! prompt.

#![forbid(unsafe_code)]

pub mod cli;
