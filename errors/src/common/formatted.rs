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

use lox_span::Span;

use colored::Colorize;
use std::fmt;

const INDENT: &str = "    ";

/// A user-facing error tied to a region of source text.
///
/// Rendered as:
/// ```text
/// error[ERUN0371002]: Undefined variable 'x'.
///     --> 2:9
///      |
///    2 | print a + x;
///      |         ^
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct FormattedError {
    /// The stable error code, e.g. `EPAR0370003`.
    pub code: String,
    /// The error explanation.
    pub message: String,
    /// An optional hint on how to fix the error.
    pub help: Option<String>,
    /// Where in the source the error occurred.
    pub span: Span,
}

impl FormattedError {
    /// Returns a new formatted error at `span`.
    pub fn new_from_span(message: String, help: Option<String>, code: String, span: &Span) -> Self {
        Self { code, message, help, span: span.clone() }
    }

    /// The exit code reported to the operating system for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// Renders the caret line pointing at columns `start..stop` (1-based).
fn underline(mut start: usize, mut stop: usize) -> String {
    if stop < start {
        std::mem::swap(&mut start, &mut stop);
    }
    let start = start.saturating_sub(1);
    let width = (stop.saturating_sub(1) - start).max(1);

    let mut underline = String::new();
    for _ in 0..start {
        underline.push(' ');
    }
    for _ in 0..width {
        underline.push('^');
    }

    underline
}

impl fmt::Display for FormattedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let error = "error".bold().red();
        let code = format!("[{}]", self.code).bold();

        writeln!(f, "{error}{code}: {message}", message = self.message)?;
        writeln!(f, "{INDENT}--> {location}", location = self.span)?;
        writeln!(f, "{INDENT} |")?;

        for (offset, line) in self.span.content.lines().enumerate() {
            writeln!(f, "{line_no:width$} | {line}", line_no = self.span.line_start + offset, width = INDENT.len())?;
        }

        // The caret line only makes sense when the error sits on one line.
        if self.span.line_start == self.span.line_stop {
            writeln!(f, "{INDENT} | {carets}", carets = underline(self.span.col_start, self.span.col_stop))?;
        }

        if let Some(help) = &self.help {
            writeln!(f, "{INDENT} |")?;
            writeln!(f, "{INDENT} = {help}")?;
        }

        Ok(())
    }
}

impl std::error::Error for FormattedError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_location_and_caret() {
        colored::control::set_override(false);
        let span = Span::new(2, 2, 9, 10, "print a + x;".to_string());
        let err = FormattedError::new_from_span(
            "Undefined variable 'x'.".to_string(),
            None,
            "ERUN0371002".to_string(),
            &span,
        );

        let rendered = err.to_string();
        assert!(rendered.starts_with("error[ERUN0371002]: Undefined variable 'x'."));
        assert!(rendered.contains("--> 2:9"));
        assert!(rendered.contains("   2 | print a + x;"));
        assert!(rendered.contains("|         ^"));
    }

    #[test]
    fn underline_is_at_least_one_caret() {
        assert_eq!(underline(1, 1), "^");
        assert_eq!(underline(3, 5), "  ^^");
    }
}
