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

//! Source positions for the Lox interpreter.
//!
//! A [`Span`] names the region of source text a token or syntax tree node was
//! produced from, and carries the covered source line(s) so diagnostics can be
//! rendered without going back to the file.

#![forbid(unsafe_code)]

pub mod span;
pub use span::Span;
