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

//! The recursive-descent parser for Lox.
//!
//! Parse errors inside one declaration are reported through the handler and
//! the parser synchronizes to the next statement boundary, so a corrupted
//! statement costs one diagnostic instead of a cascade.

mod context;
pub use context::*;

pub mod expression;
pub mod file;
pub mod statement;
