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

use crate::tokenizer::{Token, KEYWORDS};
use lox_span::Span;

use serde::{Deserialize, Serialize};
use std::{
    fmt,
    iter::{from_fn, Peekable},
};

/// A lexical failure and the number of source bytes it invalidated.
///
/// [`Token::eat`] stays position-agnostic; the tokenizer driver turns these
/// into spanned [`lox_errors::ParserError`]s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum LexicalError {
    /// A character outside the language's alphabet.
    UnexpectedCharacter(char),
    /// A string literal still open at the end of the input.
    UnterminatedString(String),
    /// A block comment still open at the end of the input.
    UnterminatedBlockComment,
}

/// Eat an identifier, that is, a string matching '[a-zA-Z_][a-zA-Z\d_]*', if any.
fn eat_identifier(input: &mut Peekable<impl Iterator<Item = char>>) -> Option<String> {
    input.peek().filter(|c| c.is_ascii_alphabetic() || **c == '_')?;
    Some(from_fn(|| input.next_if(|c| c.is_ascii_alphanumeric() || c == &'_')).collect())
}

impl Token {
    /// Returns a tuple: [(number length, number token)] eaten from the front
    /// of the given `input` string.
    ///
    /// A number is an integer part optionally followed by `.` and a fraction;
    /// the `.` is only part of the number when a digit follows it, so `1.foo`
    /// lexes as `1` `.` `foo`.
    fn eat_number(input: &str) -> (usize, Token) {
        let bytes = input.as_bytes();
        let mut len = 0;

        while len < bytes.len() && bytes[len].is_ascii_digit() {
            len += 1;
        }

        if len < bytes.len()
            && bytes[len] == b'.'
            && bytes.get(len + 1).map_or(false, |byte| byte.is_ascii_digit())
        {
            len += 1;
            while len < bytes.len() && bytes[len].is_ascii_digit() {
                len += 1;
            }
        }

        (len, Token::Number(input[..len].to_string()))
    }

    /// Returns a tuple: [(token length, token)] if the next token can be eaten,
    /// otherwise a [`LexicalError`] with the number of bytes it covers.
    ///
    /// The next token can be eaten if the bytes at the front of the given
    /// `input` string can be scanned into a token. Lengths are in bytes.
    pub(crate) fn eat(input: &str) -> Result<(usize, Token), (usize, LexicalError)> {
        let mut chars = input.chars().peekable();

        // Consumes a single character token.
        let single = |input: &mut Peekable<_>, token| {
            input.next();
            Ok((1, token))
        };
        // Consumes a character followed by `on` with `then` if found or `els` otherwise.
        let followed_by = |input: &mut Peekable<_>, on, then, els| {
            input.next();
            Ok(if input.next_if_eq(&on).is_some() { (2, then) } else { (1, els) })
        };

        let pivot = match chars.peek() {
            Some(c) => *c,
            None => return Err((0, LexicalError::UnexpectedCharacter('\0'))),
        };

        match pivot {
            x if x.is_ascii_whitespace() => return single(&mut chars, Token::WhiteSpace),
            '(' => return single(&mut chars, Token::LeftParen),
            ')' => return single(&mut chars, Token::RightParen),
            '{' => return single(&mut chars, Token::LeftCurly),
            '}' => return single(&mut chars, Token::RightCurly),
            ',' => return single(&mut chars, Token::Comma),
            '.' => return single(&mut chars, Token::Dot),
            '-' => return single(&mut chars, Token::Minus),
            '+' => return single(&mut chars, Token::Add),
            ';' => return single(&mut chars, Token::Semicolon),
            '*' => return single(&mut chars, Token::Mul),
            '!' => return followed_by(&mut chars, '=', Token::NotEq, Token::Not),
            '=' => return followed_by(&mut chars, '=', Token::Eq, Token::Assign),
            '>' => return followed_by(&mut chars, '=', Token::GtEq, Token::Gt),
            '<' => return followed_by(&mut chars, '=', Token::LtEq, Token::Lt),
            '/' => {
                chars.next();
                if chars.next_if_eq(&'/').is_some() {
                    let mut comment = String::from("//");

                    while let Some(c) = chars.next_if(|c| c != &'\n') {
                        comment.push(c);
                    }

                    return Ok((comment.len(), Token::CommentLine(comment)));
                } else if chars.next_if_eq(&'*').is_some() {
                    let mut comment = String::from("/*");
                    // Block comments nest; track the depth.
                    let mut depth = 1usize;

                    while depth > 0 {
                        let c = match chars.next() {
                            Some(c) => c,
                            None => return Err((comment.len(), LexicalError::UnterminatedBlockComment)),
                        };
                        comment.push(c);

                        if c == '*' && chars.next_if_eq(&'/').is_some() {
                            comment.push('/');
                            depth -= 1;
                        } else if c == '/' && chars.next_if_eq(&'*').is_some() {
                            comment.push('*');
                            depth += 1;
                        }
                    }

                    return Ok((comment.len(), Token::CommentBlock(comment)));
                }
                return Ok((1, Token::Div));
            }
            '"' => {
                chars.next();
                let mut string = String::new();

                let mut ended = false;
                while let Some(c) = chars.next() {
                    // Check for the end string quotation mark; embedded
                    // newlines are legal.
                    if c == '"' {
                        ended = true;
                        break;
                    }
                    string.push(c);
                }

                if !ended {
                    let len = string.len() + 1;
                    return Err((len, LexicalError::UnterminatedString(string)));
                }

                // + 2 to account for the quotation marks.
                return Ok((string.len() + 2, Token::StringLit(string)));
            }
            x if x.is_ascii_digit() => return Ok(Self::eat_number(input)),
            _ => (),
        }

        if let Some(ident) = eat_identifier(&mut chars) {
            let token = match KEYWORDS.get(&*ident) {
                Some(keyword) => keyword.clone(),
                None => Token::Ident(ident.clone()),
            };
            return Ok((ident.len(), token));
        }

        Err((pivot.len_utf8(), LexicalError::UnexpectedCharacter(pivot)))
    }
}

/// A token paired with the region of source it was read from.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Span,
}

impl SpannedToken {
    /// Returns a dummy token at a dummy span.
    ///
    /// Deliberately not `Eof`: the parser seeds its cursors with this and the
    /// end-of-stream checks must not fire before the first real token.
    pub fn dummy() -> Self {
        Self { token: Token::WhiteSpace, span: Span::dummy() }
    }
}

impl fmt::Display for SpannedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' @ ", self.token.to_string().trim())?;
        self.span.fmt(f)
    }
}

impl fmt::Debug for SpannedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        <SpannedToken as fmt::Display>::fmt(self, f)
    }
}
