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
use crate::tokenizer::*;

use lox_ast::*;
use lox_errors::{ParserError, Result};

impl ParserContext<'_> {
    /// Returns an [`Expression`] AST node if the next tokens represent an expression.
    pub(crate) fn parse_expression(&mut self) -> Result<Expression> {
        self.parse_assignment_expression()
    }

    /// Returns an [`Expression`] AST node if the next tokens represent an
    /// assignment, e.g. `x = 1`.
    ///
    /// Otherwise, tries to parse the next tokens using [`parse_logical_or_expression`].
    fn parse_assignment_expression(&mut self) -> Result<Expression> {
        let expr = self.parse_logical_or_expression()?;

        if self.eat(&Token::Assign) {
            let equals_span = self.prev_token.span.clone();
            // Right-associative: `a = b = c` assigns `b = c` first.
            let value = self.parse_assignment_expression()?;

            return Ok(match expr {
                Expression::Identifier(place) => {
                    let span = &place.span + &value.span();
                    Expression::Assign(AssignExpression { place, value: Box::new(value), span })
                }
                expr => {
                    // Anything else is not assignable; report and keep the
                    // left-hand side so parsing continues.
                    self.emit_err(ParserError::invalid_assignment_target(&equals_span));
                    expr
                }
            });
        }

        Ok(expr)
    }

    /// Constructs a binary expression `left op right`.
    fn bin_expr(left: Expression, right: Expression, op: BinaryOperation) -> Expression {
        Expression::Binary(BinaryExpression {
            span: &left.span() + &right.span(),
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Constructs a logical expression `left op right`.
    fn logical_expr(left: Expression, right: Expression, op: LogicalOperation) -> Expression {
        Expression::Logical(LogicalExpression {
            span: &left.span() + &right.span(),
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Parses a left-associative binary expression `<left> token <right>` using `f` for left/right.
    /// The `token` is translated to `op` in the AST.
    fn parse_bin_expr(
        &mut self,
        tokens: &[Token],
        mut f: impl FnMut(&mut Self) -> Result<Expression>,
    ) -> Result<Expression> {
        let mut expr = f(self)?;
        while let Some(op) = self.eat_bin_op(tokens) {
            expr = Self::bin_expr(expr, f(self)?, op);
        }
        Ok(expr)
    }

    /// Eats one of binary operators matching any in `tokens`.
    fn eat_bin_op(&mut self, tokens: &[Token]) -> Option<BinaryOperation> {
        self.eat_any(tokens).then(|| match &self.prev_token.token {
            Token::Eq => BinaryOperation::Eq,
            Token::NotEq => BinaryOperation::Neq,
            Token::Lt => BinaryOperation::Lt,
            Token::LtEq => BinaryOperation::Le,
            Token::Gt => BinaryOperation::Gt,
            Token::GtEq => BinaryOperation::Ge,
            Token::Add => BinaryOperation::Add,
            Token::Minus => BinaryOperation::Sub,
            Token::Mul => BinaryOperation::Mul,
            Token::Div => BinaryOperation::Div,
            _ => unreachable!("`eat_bin_op` shouldn't produce this"),
        })
    }

    /// Returns an [`Expression`] AST node if the next tokens represent a
    /// short-circuiting OR expression.
    ///
    /// Otherwise, tries to parse the next tokens using [`parse_logical_and_expression`].
    fn parse_logical_or_expression(&mut self) -> Result<Expression> {
        let mut expr = self.parse_logical_and_expression()?;
        while self.eat(&Token::Or) {
            let right = self.parse_logical_and_expression()?;
            expr = Self::logical_expr(expr, right, LogicalOperation::Or);
        }
        Ok(expr)
    }

    /// Returns an [`Expression`] AST node if the next tokens represent a
    /// short-circuiting AND expression.
    ///
    /// Otherwise, tries to parse the next tokens using [`parse_equality_expression`].
    fn parse_logical_and_expression(&mut self) -> Result<Expression> {
        let mut expr = self.parse_equality_expression()?;
        while self.eat(&Token::And) {
            let right = self.parse_equality_expression()?;
            expr = Self::logical_expr(expr, right, LogicalOperation::And);
        }
        Ok(expr)
    }

    /// Returns an [`Expression`] AST node if the next tokens represent a
    /// binary equals or not equals expression.
    ///
    /// Otherwise, tries to parse the next tokens using [`parse_ordering_expression`].
    fn parse_equality_expression(&mut self) -> Result<Expression> {
        self.parse_bin_expr(&[Token::Eq, Token::NotEq], Self::parse_ordering_expression)
    }

    /// Returns an [`Expression`] AST node if the next tokens represent a
    /// binary relational expression: less than, less than or equals, greater than, greater than or equals.
    ///
    /// Otherwise, tries to parse the next tokens using [`parse_additive_expression`].
    fn parse_ordering_expression(&mut self) -> Result<Expression> {
        self.parse_bin_expr(
            &[Token::Lt, Token::LtEq, Token::Gt, Token::GtEq],
            Self::parse_additive_expression,
        )
    }

    /// Returns an [`Expression`] AST node if the next tokens represent a
    /// binary addition or subtraction expression.
    ///
    /// Otherwise, tries to parse the next tokens using [`parse_multiplicative_expression`].
    fn parse_additive_expression(&mut self) -> Result<Expression> {
        self.parse_bin_expr(&[Token::Add, Token::Minus], Self::parse_multiplicative_expression)
    }

    /// Returns an [`Expression`] AST node if the next tokens represent a
    /// binary multiplication or division expression.
    ///
    /// Otherwise, tries to parse the next tokens using [`parse_unary_expression`].
    fn parse_multiplicative_expression(&mut self) -> Result<Expression> {
        self.parse_bin_expr(&[Token::Mul, Token::Div], Self::parse_unary_expression)
    }

    /// Returns an [`Expression`] AST node if the next tokens represent a
    /// unary not or negate expression.
    ///
    /// Otherwise, tries to parse the next tokens using [`parse_call_expression`].
    pub(super) fn parse_unary_expression(&mut self) -> Result<Expression> {
        let mut ops = Vec::new();
        while self.eat_any(&[Token::Not, Token::Minus]) {
            let operation = match self.prev_token.token {
                Token::Not => UnaryOperation::Not,
                Token::Minus => UnaryOperation::Negate,
                _ => unreachable!("`parse_unary_expression` shouldn't produce this"),
            };
            ops.push((operation, self.prev_token.span.clone()));
        }

        let mut inner = self.parse_call_expression()?;
        for (op, op_span) in ops.into_iter().rev() {
            inner = Expression::Unary(UnaryExpression {
                span: &op_span + &inner.span(),
                op,
                receiver: Box::new(inner),
            });
        }
        Ok(inner)
    }

    /// Returns an [`Expression`] AST node if the next tokens represent a
    /// function call expression.
    ///
    /// Otherwise, tries to parse the next tokens using [`parse_primary_expression`].
    fn parse_call_expression(&mut self) -> Result<Expression> {
        let mut expr = self.parse_primary_expression()?;

        // Each `(` wraps the expression parsed so far, so `f(1)(2)` calls the
        // result of `f(1)`.
        while self.check(&Token::LeftParen) {
            let (arguments, _, args_span) = self.parse_paren_comma_list(|p| p.parse_expression().map(Some))?;

            if arguments.len() > 255 {
                self.emit_err(ParserError::too_many_call_arguments(&args_span));
            }

            expr = Expression::Call(CallExpression {
                span: &expr.span() + &args_span,
                function: Box::new(expr),
                arguments,
            });
        }

        Ok(expr)
    }

    /// Returns an [`Expression`] AST node if the next token is a primary expression:
    /// - Literals: number, string, boolean, nil
    /// - Parenthesized expressions
    /// - Identifiers
    ///
    /// Returns an expression error if the token cannot be matched.
    fn parse_primary_expression(&mut self) -> Result<Expression> {
        if self.check(&Token::LeftParen) {
            let open = self.expect(&Token::LeftParen)?;
            let expression = self.parse_expression()?;
            let close = self.expect(&Token::RightParen)?;
            return Ok(Expression::Grouping(GroupingExpression {
                expression: Box::new(expression),
                span: &open + &close,
            }));
        }

        if !self.has_next() {
            return self.unexpected("an expression");
        }

        let SpannedToken { token, span } = self.token.clone();
        self.bump();

        Ok(match token {
            Token::True => Expression::Literal(LiteralExpression::Boolean(true, span)),
            Token::False => Expression::Literal(LiteralExpression::Boolean(false, span)),
            Token::Nil => Expression::Literal(LiteralExpression::Nil(span)),
            Token::Number(value) => match value.parse::<f64>() {
                Ok(number) => Expression::Literal(LiteralExpression::Number(number, span)),
                Err(_) => return Err(ParserError::lexer_invalid_number(value, &span).into()),
            },
            Token::StringLit(value) => Expression::Literal(LiteralExpression::String(value, span)),
            Token::Ident(name) => Expression::Identifier(Identifier::new(name, span)),
            token @ (Token::Class | Token::Super | Token::This | Token::Abort | Token::Anon) => {
                return Err(ParserError::reserved_keyword(token, &span).into());
            }
            token => {
                return Err(ParserError::unexpected(token, "an expression", &span).into());
            }
        })
    }
}
