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

/// An evaluation-time error, one constructor per message.
#[derive(Clone, Debug, Error, PartialEq, Eq, Hash)]
#[error(transparent)]
pub struct RuntimeError(#[from] FormattedError);

impl RuntimeError {
    const CODE_MASK: i32 = 371_000;
    const CODE_PREFIX: &'static str = "RUN";

    fn new_from_span(message: String, help: Option<String>, index: i32, span: &Span) -> Self {
        let code = format!("E{}{:07}", Self::CODE_PREFIX, Self::CODE_MASK + index);
        Self(FormattedError::new_from_span(message, help, code, span))
    }

    /// The stable code of this error, e.g. `ERUN0371002`.
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

    /// An arithmetic, ordering, or division operator applied to a non-number.
    pub fn operands_must_be_numbers(span: &Span) -> Self {
        Self::new_from_span("Operands must be numbers.".to_string(), None, 1, span)
    }

    /// `+` applied to anything but two numbers or two strings.
    pub fn operands_must_be_numbers_or_strings(span: &Span) -> Self {
        Self::new_from_span("Operands must be numbers or strings.".to_string(), None, 2, span)
    }

    /// Unary `-` applied to a non-number.
    pub fn operand_must_be_a_number(span: &Span) -> Self {
        Self::new_from_span("Operand must be a number.".to_string(), None, 3, span)
    }

    /// A read or assignment of a name with no binding anywhere in scope.
    pub fn undefined_variable(name: impl Display, span: &Span) -> Self {
        Self::new_from_span(format!("Undefined variable '{name}'."), None, 4, span)
    }

    /// A call whose callee evaluated to a non-callable value.
    pub fn not_callable(span: &Span) -> Self {
        Self::new_from_span("Object is not callable.".to_string(), None, 5, span)
    }

    /// A call whose argument count does not match the function's parameters.
    pub fn arity_mismatch(expected: usize, got: usize, span: &Span) -> Self {
        Self::new_from_span(format!("Expected {expected} arguments but got {got}."), None, 6, span)
    }

    /// A `return` that escaped every call frame.
    pub fn return_outside_function(span: &Span) -> Self {
        Self::new_from_span("Cannot return from top-level code.".to_string(), None, 7, span)
    }

    /// `print` could not write to its output.
    pub fn output_write_failed(error: impl Display, span: &Span) -> Self {
        Self::new_from_span(format!("Could not write output: {error}."), None, 8, span)
    }
}
