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

//! Error machinery for the Lox interpreter.
//!
//! Every user-facing failure is a [`FormattedError`] carrying an error code,
//! a message, and the span that produced it. Errors are grouped into families
//! by pipeline stage ([`ParserError`], [`RuntimeError`], [`CliError`]) and
//! funneled through the [`LoxError`] umbrella type. Components report errors
//! through a shared [`emitter::Handler`] rather than printing directly.

#![forbid(unsafe_code)]

pub mod common;
pub use common::*;

pub mod emitter;
pub use emitter::{BufferEmitter, Emitter, Handler, StderrEmitter};

pub mod errors;
pub use errors::*;

/// The crate-wide result type with a pre-filled error cause.
pub type Result<T, E = LoxError> = core::result::Result<T, E>;
