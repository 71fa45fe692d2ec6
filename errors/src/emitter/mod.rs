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

use crate::LoxError;

use core::fmt;
use std::{cell::RefCell, rc::Rc};

/// A sink that consumes rendered diagnostics.
pub trait Emitter {
    /// Emit the error `err`.
    fn emit_err(&mut self, err: &LoxError);
}

/// An [`Emitter`] that prints to standard error.
#[derive(Clone, Copy, Debug, Default)]
pub struct StderrEmitter;

impl Emitter for StderrEmitter {
    fn emit_err(&mut self, err: &LoxError) {
        eprintln!("{err}");
    }
}

/// An ordered collection of emitted errors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Buffer(Vec<LoxError>);

impl Buffer {
    /// Pushes `err` onto the buffer.
    pub fn push(&mut self, err: LoxError) {
        self.0.push(err);
    }

    /// The last error pushed, if any.
    pub fn last(&self) -> Option<&LoxError> {
        self.0.last()
    }

    /// The number of buffered errors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the buffer holds no errors.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the buffer, yielding the errors in emission order.
    pub fn into_inner(self) -> Vec<LoxError> {
        self.0
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for err in &self.0 {
            writeln!(f, "{err}")?;
        }
        Ok(())
    }
}

/// An [`Emitter`] that accumulates errors in a shared buffer, for tests and
/// the REPL.
#[derive(Clone, Debug, Default)]
pub struct BufferEmitter(Rc<RefCell<Buffer>>);

impl BufferEmitter {
    /// Returns a new buffering emitter with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the accumulated errors, leaving the buffer empty.
    pub fn extract_errs(&self) -> Buffer {
        self.0.take()
    }
}

impl Emitter for BufferEmitter {
    fn emit_err(&mut self, err: &LoxError) {
        self.0.borrow_mut().push(err.clone());
    }
}

struct HandlerInner {
    /// The number of errors emitted so far.
    err_count: usize,
    /// A clone of the most recent error.
    last_err: Option<LoxError>,
    /// The sink errors are forwarded to.
    emitter: Box<dyn Emitter>,
}

/// The shared diagnostics handler.
///
/// Components hold a `&Handler` and side-channel errors through it; interior
/// mutability keeps the borrow story simple for a deeply recursive parser.
pub struct Handler {
    inner: RefCell<HandlerInner>,
}

impl Default for Handler {
    fn default() -> Self {
        Self::new(Box::new(StderrEmitter))
    }
}

impl Handler {
    /// Returns a new handler forwarding to `emitter`.
    pub fn new(emitter: Box<dyn Emitter>) -> Self {
        Self { inner: RefCell::new(HandlerInner { err_count: 0, last_err: None, emitter }) }
    }

    /// Returns a new handler paired with the buffer its errors land in.
    pub fn new_with_buffer() -> (Self, BufferEmitter) {
        let buffer = BufferEmitter::new();
        (Self::new(Box::new(buffer.clone())), buffer)
    }

    /// Emit the error `err`.
    pub fn emit_err<E: Into<LoxError>>(&self, err: E) {
        let err = err.into();
        let mut inner = self.inner.borrow_mut();
        inner.err_count += 1;
        inner.emitter.emit_err(&err);
        inner.last_err = Some(err);
    }

    /// Whether any errors have been emitted through this handler.
    pub fn had_errors(&self) -> bool {
        self.inner.borrow().err_count > 0
    }

    /// The number of errors emitted through this handler.
    pub fn err_count(&self) -> usize {
        self.inner.borrow().err_count
    }

    /// A clone of the most recently emitted error.
    pub fn last_err(&self) -> Option<LoxError> {
        self.inner.borrow().last_err.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParserError;
    use lox_span::Span;

    #[test]
    fn handler_counts_and_buffers() {
        let (handler, buffer) = Handler::new_with_buffer();
        assert!(!handler.had_errors());

        let span = Span::new(1, 1, 1, 2, "@".to_string());
        handler.emit_err(ParserError::lexer_unexpected_character('@', &span));
        handler.emit_err(ParserError::unexpected_eof("an expression", &span));

        assert!(handler.had_errors());
        assert_eq!(handler.err_count(), 2);

        let errs = buffer.extract_errs();
        assert_eq!(errs.len(), 2);
        assert_eq!(handler.last_err().as_ref(), errs.last());
        assert!(buffer.extract_errs().is_empty());
    }
}
