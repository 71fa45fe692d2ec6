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

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt};

/// Represents all valid Lox syntax tokens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    // Lexical Grammar
    // Literals
    CommentLine(String),
    CommentBlock(String),
    StringLit(String),
    Ident(String),
    /// A number literal, kept verbatim; parsed to a double when the AST
    /// literal is built.
    Number(String),
    WhiteSpace,

    // Symbols
    Not,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Add,
    Minus,
    Mul,
    Div,
    Assign,
    LeftParen,
    RightParen,
    LeftCurly,
    RightCurly,
    Comma,
    Dot,
    Semicolon,

    // Keywords
    And,
    Class,
    Else,
    False,
    For,
    Fun,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,
    // Reserved by the original language but without a grammar production;
    // they tokenize and the parser rejects them.
    Abort,
    Anon,

    // Meta Tokens
    Eof,
}

/// Represents all valid Lox keyword tokens.
pub const KEYWORD_TOKENS: &[Token] = &[
    Token::Abort,
    Token::And,
    Token::Anon,
    Token::Class,
    Token::Else,
    Token::False,
    Token::For,
    Token::Fun,
    Token::If,
    Token::Nil,
    Token::Or,
    Token::Print,
    Token::Return,
    Token::Super,
    Token::This,
    Token::True,
    Token::Var,
    Token::While,
];

lazy_static! {
    /// Maps a keyword lexeme to its token.
    pub(crate) static ref KEYWORDS: HashMap<&'static str, Token> = {
        let mut map = HashMap::new();
        map.insert("abort", Token::Abort);
        map.insert("and", Token::And);
        map.insert("anon", Token::Anon);
        map.insert("class", Token::Class);
        map.insert("else", Token::Else);
        map.insert("false", Token::False);
        map.insert("for", Token::For);
        map.insert("fun", Token::Fun);
        map.insert("if", Token::If);
        map.insert("nil", Token::Nil);
        map.insert("or", Token::Or);
        map.insert("print", Token::Print);
        map.insert("return", Token::Return);
        map.insert("super", Token::Super);
        map.insert("this", Token::This);
        map.insert("true", Token::True);
        map.insert("var", Token::Var);
        map.insert("while", Token::While);
        map
    };
}

impl Token {
    /// Returns `true` if the `self` token equals a Lox keyword.
    pub fn is_keyword(&self) -> bool {
        KEYWORD_TOKENS.contains(self)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Token::*;
        match self {
            CommentLine(s) => write!(f, "{s}"),
            CommentBlock(s) => write!(f, "{s}"),
            StringLit(s) => write!(f, "\"{s}\""),
            Ident(s) => write!(f, "{s}"),
            Number(s) => write!(f, "{s}"),
            WhiteSpace => write!(f, "whitespace"),

            Not => write!(f, "!"),
            Eq => write!(f, "=="),
            NotEq => write!(f, "!="),
            Lt => write!(f, "<"),
            LtEq => write!(f, "<="),
            Gt => write!(f, ">"),
            GtEq => write!(f, ">="),
            Add => write!(f, "+"),
            Minus => write!(f, "-"),
            Mul => write!(f, "*"),
            Div => write!(f, "/"),
            Assign => write!(f, "="),
            LeftParen => write!(f, "("),
            RightParen => write!(f, ")"),
            LeftCurly => write!(f, "{{"),
            RightCurly => write!(f, "}}"),
            Comma => write!(f, ","),
            Dot => write!(f, "."),
            Semicolon => write!(f, ";"),

            And => write!(f, "and"),
            Class => write!(f, "class"),
            Else => write!(f, "else"),
            False => write!(f, "false"),
            For => write!(f, "for"),
            Fun => write!(f, "fun"),
            If => write!(f, "if"),
            Nil => write!(f, "nil"),
            Or => write!(f, "or"),
            Print => write!(f, "print"),
            Return => write!(f, "return"),
            Super => write!(f, "super"),
            This => write!(f, "this"),
            True => write!(f, "true"),
            Var => write!(f, "var"),
            While => write!(f, "while"),
            Abort => write!(f, "abort"),
            Anon => write!(f, "anon"),

            Eof => write!(f, "<eof>"),
        }
    }
}
