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

use thiserror::Error;

pub mod cli;
pub use cli::*;

pub mod parser;
pub use parser::*;

pub mod runtime;
pub use runtime::*;

/// The umbrella error type for the whole interpreter pipeline.
#[derive(Clone, Debug, Error, PartialEq, Eq, Hash)]
pub enum LoxError {
    /// A driver-level error, e.g. an unreadable script file.
    #[error(transparent)]
    CliError(#[from] CliError),

    /// A lexical or syntactic error.
    #[error(transparent)]
    ParserError(#[from] ParserError),

    /// An evaluation-time error.
    #[error(transparent)]
    RuntimeError(#[from] RuntimeError),
}

impl LoxError {
    /// The exit code reported to the operating system for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            LoxError::CliError(_) => 1,
            LoxError::ParserError(e) => e.exit_code(),
            LoxError::RuntimeError(e) => e.exit_code(),
        }
    }
}
