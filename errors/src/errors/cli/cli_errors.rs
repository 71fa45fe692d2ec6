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

use std::fmt::Display;
use thiserror::Error;

/// Driver-level failures that occur before any source text is scanned.
///
/// These carry no source span; causes are captured as strings at
/// construction so the error stays cheaply clonable.
#[derive(Clone, Debug, Error, PartialEq, Eq, Hash)]
pub enum CliError {
    #[error("Cannot read from the provided file path '{path}': {error}")]
    FileReadError { path: String, error: String },
}

impl CliError {
    /// Returns a new error for a script file that could not be read.
    pub fn file_read_error(path: impl Display, error: impl Display) -> Self {
        Self::FileReadError { path: path.to_string(), error: error.to_string() }
    }
}
