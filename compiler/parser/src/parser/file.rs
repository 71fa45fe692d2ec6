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

use super::*;

use lox_ast::Program;
use lox_errors::Result;

impl ParserContext<'_> {
    /// Returns a [`Program`] AST if all tokens parse as a list of declarations.
    ///
    /// A failed declaration is reported through the handler and skipped via
    /// panic-mode recovery, so the caller gets one diagnostic per corrupted
    /// statement and a best-effort tree for everything else. The tree must be
    /// considered unusable when `handler.had_errors()`.
    pub fn parse_program(&mut self) -> Result<Program> {
        let mut statements = Vec::new();

        while self.has_next() {
            match self.parse_declaration() {
                Ok(statement) => statements.push(statement),
                Err(err) => self.recover(err),
            }
        }

        tracing::debug!(statements = statements.len(), errors = self.handler.err_count(), "parsed program");

        Ok(Program::new(statements))
    }
}
