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

use serde::{Deserialize, Serialize};
use std::{
    fmt,
    hash::{Hash, Hasher},
    ops::Add,
};

/// A region of source text.
///
/// Lines and columns are 1-based. `content` holds the verbatim source line(s)
/// the region covers; it participates in diagnostics rendering but not in
/// equality or hashing.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Span {
    /// The line the region starts on.
    pub line_start: usize,
    /// The line the region ends on.
    pub line_stop: usize,
    /// The column the region starts at, on `line_start`.
    pub col_start: usize,
    /// The column one past the region's end, on `line_stop`.
    pub col_stop: usize,
    /// The source line(s) covered by the region.
    pub content: String,
}

impl Span {
    /// Returns a new span from line/column bounds and the covered source text.
    pub fn new(line_start: usize, line_stop: usize, col_start: usize, col_stop: usize, content: String) -> Self {
        Self { line_start, line_stop, col_start, col_stop, content }
    }

    /// Returns a span pointing at nothing, for synthesized nodes.
    pub fn dummy() -> Self {
        Self::new(0, 0, 0, 0, String::new())
    }
}

impl PartialEq for Span {
    fn eq(&self, other: &Self) -> bool {
        self.line_start == other.line_start
            && self.line_stop == other.line_stop
            && self.col_start == other.col_start
            && self.col_stop == other.col_stop
    }
}

impl Eq for Span {}

impl Hash for Span {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.line_start.hash(state);
        self.line_stop.hash(state);
        self.col_start.hash(state);
        self.col_stop.hash(state);
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line_start, self.col_start)
    }
}

impl Add<&Span> for &Span {
    type Output = Span;

    fn add(self, other: &Span) -> Span {
        self.clone() + other.clone()
    }
}

impl Add for Span {
    type Output = Self;

    /// Merges two spans into one covering both regions.
    fn add(self, other: Self) -> Self {
        if self == other {
            return self;
        }

        // Order the operands by start position; spans produced while parsing
        // are not guaranteed to arrive left-to-right.
        let (first, second) = if (self.line_start, self.col_start) <= (other.line_start, other.col_start) {
            (self, other)
        } else {
            (other, self)
        };

        if first.line_stop == second.line_stop {
            let content = if first.line_start == first.line_stop {
                first.content.clone()
            } else {
                format!("{}\n{}", first.content, second.content)
            };
            Span::new(
                first.line_start,
                second.line_stop,
                first.col_start,
                first.col_stop.max(second.col_stop),
                content,
            )
        } else {
            let content = format!("{}\n...\n{}", first.content, second.content);
            Span::new(first.line_start, second.line_stop, first.col_start, second.col_stop, content)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(line: usize, col_start: usize, col_stop: usize, content: &str) -> Span {
        Span::new(line, line, col_start, col_stop, content.to_string())
    }

    #[test]
    fn display_is_start_position() {
        assert_eq!(span(3, 7, 9, "print x;").to_string(), "3:7");
    }

    #[test]
    fn add_same_line_extends_columns() {
        let merged = span(1, 1, 2, "a + b") + span(1, 5, 6, "a + b");
        assert_eq!(merged, span(1, 1, 6, "a + b"));
        assert_eq!(merged.content, "a + b");
    }

    #[test]
    fn add_is_insensitive_to_operand_order() {
        let left = span(2, 3, 4, "x = y;");
        let right = span(2, 7, 8, "x = y;");
        assert_eq!(left.clone() + right.clone(), right + left);
    }

    #[test]
    fn add_across_lines_joins_content() {
        let merged = span(1, 5, 8, "var a =") + span(3, 1, 3, "1;");
        assert_eq!(merged.line_start, 1);
        assert_eq!(merged.line_stop, 3);
        assert_eq!(merged.content, "var a =\n...\n1;");
    }

    #[test]
    fn equality_ignores_content() {
        assert_eq!(span(1, 1, 2, "x"), span(1, 1, 2, "y"));
    }
}
