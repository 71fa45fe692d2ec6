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

use crate::Program;

use serde::{Deserialize, Serialize};

/// A Lox program's abstract syntax tree, with (de)serialization helpers.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Ast {
    ast: Program,
}

impl Ast {
    /// Creates a new AST from a given program tree.
    pub fn new(program: Program) -> Self {
        Self { ast: program }
    }

    /// Returns a reference to the inner program syntax tree.
    pub fn as_repr(&self) -> &Program {
        &self.ast
    }

    /// Consumes the AST, yielding the inner program syntax tree.
    pub fn into_repr(self) -> Program {
        self.ast
    }

    /// Serializes the AST into a JSON string.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.ast)
    }

    /// Deserializes a JSON string into an AST.
    pub fn from_json_string(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self { ast: serde_json::from_str(json)? })
    }
}
