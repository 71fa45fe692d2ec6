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

//! The tokenizer to convert Lox code text into tokens.
//!
//! This module contains the [`tokenize()`] method which breaks down string
//! text into tokens, separated by whitespace.

pub(crate) mod token;

pub use self::token::KEYWORD_TOKENS;
pub(crate) use self::token::*;

pub(crate) mod lexer;
pub use self::lexer::SpannedToken;
pub(crate) use self::lexer::*;

use lox_errors::{emitter::Handler, ParserError};
use lox_span::Span;

/// Creates a new vector of spanned tokens from the given source code text.
///
/// Every lexical error is reported through the `handler` and scanning
/// continues past it, so one pass surfaces all of them. Whitespace is
/// dropped here; comment tokens survive until the parser strips them. The
/// stream always ends with a single `Eof` token, but callers must treat it
/// as unusable when `handler.had_errors()`.
pub fn tokenize(handler: &Handler, source: &str) -> Vec<SpannedToken> {
    let lines: Vec<&str> = source.lines().collect();
    let content = |line_start: usize, line_stop: usize| -> String {
        let slice = (line_start..=line_stop)
            .map(|line| *lines.get(line - 1).unwrap_or(&""))
            .collect::<Vec<_>>();
        slice.join("\n")
    };

    let mut tokens = Vec::new();
    let mut index = 0usize;
    let mut line = 1usize;
    let mut col = 1usize;

    while index < source.len() {
        let (len, scanned) = match Token::eat(&source[index..]) {
            Ok((len, token)) => (len, Ok(token)),
            Err((len, error)) => (len.max(1), Err(error)),
        };

        // Walk the consumed text to keep the line/column cursor honest;
        // strings and block comments span lines.
        let consumed = &source[index..(index + len).min(source.len())];
        let (line_start, col_start) = (line, col);
        for c in consumed.chars() {
            if c == '\n' {
                line += 1;
                col = 1;
            } else {
                col += 1;
            }
        }
        index += consumed.len();

        let span = Span::new(line_start, line, col_start, col, content(line_start, line));

        match scanned {
            Ok(Token::WhiteSpace) => continue,
            Ok(token) => tokens.push(SpannedToken { token, span }),
            Err(LexicalError::UnexpectedCharacter(c)) => {
                handler.emit_err(ParserError::lexer_unexpected_character(c, &span));
            }
            Err(LexicalError::UnterminatedString(contents)) => {
                handler.emit_err(ParserError::lexer_string_not_closed(contents, &span));
            }
            Err(LexicalError::UnterminatedBlockComment) => {
                handler.emit_err(ParserError::lexer_block_comment_not_closed(&span));
            }
        }
    }

    tokens.push(SpannedToken {
        token: Token::Eof,
        span: Span::new(line, line, col, col, content(line, line)),
    });

    tracing::debug!(count = tokens.len(), errors = handler.err_count(), "tokenized source");

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean_tokenize(source: &str) -> Vec<SpannedToken> {
        let (handler, _) = Handler::new_with_buffer();
        let tokens = tokenize(&handler, source);
        assert!(!handler.had_errors(), "unexpected lexical errors in {source:?}");
        tokens
    }

    #[test]
    fn test_tokenizer() {
        let raw = r#"
    "test"
    "test with spaces"
    test_ident
    _underscore
    12345
    123.25
    and or if else class true false fun for nil print return super this var while abort anon
    !
    !=
    =
    ==
    >
    >=
    <
    <=
    (
    )
    {
    }
    ,
    .
    -
    +
    ;
    /
    *
    // line comment
    /* block comment */
    "#;
        let tokens = clean_tokenize(raw);
        let mut output = String::new();
        for SpannedToken { token, .. } in tokens.iter() {
            output += &format!("{token} ");
        }

        assert_eq!(
            output,
            r#""test" "test with spaces" test_ident _underscore 12345 123.25 and or if else class true false fun for nil print return super this var while abort anon ! != = == > >= < <= ( ) { } , . - + ; / * // line comment /* block comment */ <eof> "#
        );
    }

    #[test]
    fn stream_ends_with_single_eof() {
        let tokens = clean_tokenize("print 1;");
        assert_eq!(tokens.last().map(|t| &t.token), Some(&Token::Eof));
        assert_eq!(tokens.iter().filter(|t| t.token == Token::Eof).count(), 1);

        // An empty source produces just the sentinel.
        let tokens = clean_tokenize("");
        assert_eq!(tokens.len(), 1);
    }

    #[test]
    fn spans_track_lines_and_columns() {
        let tokens = clean_tokenize("var a = 1;\nprint a;\n");

        let var = &tokens[0];
        assert_eq!(var.token, Token::Var);
        assert_eq!((var.span.line_start, var.span.col_start, var.span.col_stop), (1, 1, 4));
        assert_eq!(var.span.content, "var a = 1;");

        let print = tokens.iter().find(|t| t.token == Token::Print).unwrap();
        assert_eq!((print.span.line_start, print.span.col_start), (2, 1));
        assert_eq!(print.span.content, "print a;");
    }

    #[test]
    fn strings_may_span_lines() {
        let tokens = clean_tokenize("\"one\ntwo\" x");
        assert_eq!(tokens[0].token, Token::StringLit("one\ntwo".to_string()));
        assert_eq!(tokens[0].span.line_start, 1);
        assert_eq!(tokens[0].span.line_stop, 2);

        // The cursor keeps counting past the literal.
        let x = tokens.iter().find(|t| matches!(t.token, Token::Ident(_))).unwrap();
        assert_eq!(x.span.line_start, 2);
    }

    #[test]
    fn block_comments_nest() {
        let tokens = clean_tokenize("1 /* outer /* inner */ still outer */ 2");
        let numbers: Vec<_> = tokens.iter().filter(|t| matches!(t.token, Token::Number(_))).collect();
        assert_eq!(numbers.len(), 2);
    }

    #[test]
    fn number_dot_needs_a_following_digit() {
        let tokens = clean_tokenize("1.foo");
        assert_eq!(tokens[0].token, Token::Number("1".to_string()));
        assert_eq!(tokens[1].token, Token::Dot);
        assert_eq!(tokens[2].token, Token::Ident("foo".to_string()));
    }

    #[test]
    fn lexical_errors_are_reported_and_scanning_continues() {
        let (handler, buffer) = Handler::new_with_buffer();
        let tokens = tokenize(&handler, "var @ x; #");

        assert_eq!(handler.err_count(), 2);
        assert!(buffer.extract_errs().to_string().contains("Unexpected character '@'."));

        // The healthy tokens around the garbage all survive.
        assert!(tokens.iter().any(|t| t.token == Token::Var));
        assert!(tokens.iter().any(|t| t.token == Token::Ident("x".to_string())));
        assert!(tokens.iter().any(|t| t.token == Token::Semicolon));
    }

    #[test]
    fn unterminated_string_is_an_error() {
        let (handler, buffer) = Handler::new_with_buffer();
        tokenize(&handler, "\"never closed");

        assert!(handler.had_errors());
        assert!(buffer.extract_errs().to_string().contains("Unterminated string"));
    }

    #[test]
    fn unterminated_block_comment_is_an_error() {
        let (handler, _) = Handler::new_with_buffer();
        tokenize(&handler, "/* open /* nested */ still open");
        assert!(handler.had_errors());
    }
}
