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

use crate::FormattedError;
use lox_span::Span;

use std::fmt::Display;
use thiserror::Error;

/// A lexical or syntactic error, one constructor per message.
#[derive(Clone, Debug, Error, PartialEq, Eq, Hash)]
#[error(transparent)]
pub struct ParserError(#[from] FormattedError);

impl ParserError {
    const CODE_MASK: i32 = 370_000;
    const CODE_PREFIX: &'static str = "PAR";

    fn new_from_span(message: String, help: Option<String>, index: i32, span: &Span) -> Self {
        let code = format!("E{}{:07}", Self::CODE_PREFIX, Self::CODE_MASK + index);
        Self(FormattedError::new_from_span(message, help, code, span))
    }

    /// The stable code of this error, e.g. `EPAR0370003`.
    pub fn error_code(&self) -> &str {
        &self.0.code
    }

    /// The bare error explanation, without location or rendering.
    pub fn message(&self) -> &str {
        &self.0.message
    }

    /// Where in the source the error occurred.
    pub fn span(&self) -> &Span {
        &self.0.span
    }

    /// The exit code reported to the operating system for this error.
    pub fn exit_code(&self) -> i32 {
        self.0.exit_code()
    }

    // Lexical errors.

    /// A character outside the language's alphabet.
    pub fn lexer_unexpected_character(character: char, span: &Span) -> Self {
        Self::new_from_span(format!("Unexpected character '{character}'."), None, 1, span)
    }

    /// A string literal that was still open at the end of the file.
    pub fn lexer_string_not_closed(contents: impl Display, span: &Span) -> Self {
        Self::new_from_span(
            format!("Unterminated string \"{contents}\"."),
            Some("Close the string with a '\"'.".to_string()),
            2,
            span,
        )
    }

    /// A block comment that was still open at the end of the file.
    pub fn lexer_block_comment_not_closed(span: &Span) -> Self {
        Self::new_from_span("Block comment does not close before the end of the file.".to_string(), None, 3, span)
    }

    /// A numeric literal the lexer accepted but the host float parser did not.
    pub fn lexer_invalid_number(text: impl Display, span: &Span) -> Self {
        Self::new_from_span(format!("Could not parse '{text}' as a number."), None, 4, span)
    }

    // Syntactic errors.

    /// The catch-all "found X, wanted Y" parse error.
    pub fn unexpected(found: impl Display, expected: impl Display, span: &Span) -> Self {
        Self::new_from_span(format!("Expected {expected} -- found '{found}'."), None, 5, span)
    }

    /// As [`ParserError::unexpected`], but the token stream ran out.
    pub fn unexpected_eof(expected: impl Display, span: &Span) -> Self {
        Self::new_from_span(format!("Expected {expected} at EOF."), None, 6, span)
    }

    /// The left-hand side of an `=` was not a plain variable.
    pub fn invalid_assignment_target(span: &Span) -> Self {
        Self::new_from_span("Invalid assignment.".to_string(), None, 7, span)
    }

    /// A call supplied more arguments than the language allows.
    pub fn too_many_call_arguments(span: &Span) -> Self {
        Self::new_from_span("Functions can have a maximum of 255 arguments.".to_string(), None, 8, span)
    }

    /// A keyword that tokenizes but has no implemented grammar production.
    pub fn reserved_keyword(keyword: impl Display, span: &Span) -> Self {
        Self::new_from_span(format!("The '{keyword}' keyword is reserved but not implemented."), None, 9, span)
    }
}
