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

//! The parser to convert Lox code text into a [`Program`] AST type.
//!
//! This module contains the [`parse()`] method which calls the underlying
//! [`tokenize()`] method to create a new program AST.

#![forbid(unsafe_code)]

pub mod tokenizer;
pub use tokenizer::{tokenize, SpannedToken, KEYWORD_TOKENS};
pub(crate) use tokenizer::*;

pub mod parser;
pub use parser::*;

use lox_ast::Program;
use lox_errors::{emitter::Handler, Result};

#[cfg(test)]
mod test;

/// Creates a new program from the given source code text.
///
/// Lexical errors surface through the `handler`; parsing proceeds only on a
/// clean token stream.
pub fn parse(handler: &Handler, source: &str) -> Result<Program> {
    let tokens = tokenize(handler, source);

    ParserContext::new(handler, tokens).parse_program()
}
