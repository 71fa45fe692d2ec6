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
use lox_errors::Result;

impl ParserContext<'_> {
    /// Returns a [`Statement`] AST node if the next tokens represent a
    /// declaration: a `var` binding or any other statement.
    pub(crate) fn parse_declaration(&mut self) -> Result<Statement> {
        if self.check(&Token::Var) {
            return Ok(Statement::Definition(self.parse_definition_statement()?));
        }
        self.parse_statement()
    }

    /// Returns a [`Statement`] AST node if the next tokens represent a statement.
    pub(crate) fn parse_statement(&mut self) -> Result<Statement> {
        match &self.token.token {
            Token::Print => Ok(Statement::Print(self.parse_print_statement()?)),
            Token::Return => Ok(Statement::Return(self.parse_return_statement()?)),
            Token::Fun => Ok(Statement::Function(self.parse_function_declaration()?)),
            Token::LeftCurly => Ok(Statement::Block(self.parse_block()?)),
            Token::If => Ok(Statement::Conditional(self.parse_conditional_statement()?)),
            Token::While => Ok(Statement::While(self.parse_while_statement()?)),
            Token::For => self.parse_for_statement(),
            _ => Ok(Statement::Expression(self.parse_expression_statement()?)),
        }
    }

    /// Returns a [`DefinitionStatement`] AST node if the next tokens represent
    /// a `var` declaration.
    pub(super) fn parse_definition_statement(&mut self) -> Result<DefinitionStatement> {
        let start = self.expect(&Token::Var)?;
        let name = self.expect_ident()?;

        let initializer = if self.eat(&Token::Assign) { Some(self.parse_expression()?) } else { None };

        let end = self.expect(&Token::Semicolon)?;
        Ok(DefinitionStatement { span: &start + &end, name, initializer })
    }

    /// Returns a [`PrintStatement`] AST node if the next tokens represent a
    /// print statement.
    fn parse_print_statement(&mut self) -> Result<PrintStatement> {
        let start = self.expect(&Token::Print)?;
        let expression = self.parse_expression()?;
        let end = self.expect(&Token::Semicolon)?;
        Ok(PrintStatement { span: &start + &end, expression })
    }

    /// Returns a [`ReturnStatement`] AST node if the next tokens represent a
    /// return statement; the expression is optional.
    fn parse_return_statement(&mut self) -> Result<ReturnStatement> {
        let start = self.expect(&Token::Return)?;

        let expression = if self.check(&Token::Semicolon) { None } else { Some(self.parse_expression()?) };

        let end = self.expect(&Token::Semicolon)?;
        Ok(ReturnStatement { span: &start + &end, expression })
    }

    /// Returns a [`FunctionDeclaration`] AST node if the next tokens represent
    /// a `fun` declaration.
    fn parse_function_declaration(&mut self) -> Result<FunctionDeclaration> {
        let start = self.expect(&Token::Fun)?;
        let name = self.expect_ident()?;

        let (parameters, _, _) = self.parse_paren_comma_list(|p| p.expect_ident().map(Some))?;

        let body = self.parse_statement()?;
        Ok(FunctionDeclaration { span: &start + &body.span(), name, parameters, body: Box::new(body) })
    }

    /// Returns a [`Block`] AST node if the next tokens represent a block of
    /// statements.
    ///
    /// A parse error inside the block is reported and recovered from here, so
    /// one bad statement does not take the rest of the block with it.
    pub(super) fn parse_block(&mut self) -> Result<Block> {
        let open = self.expect(&Token::LeftCurly)?;

        let mut statements = Vec::new();
        while !self.check(&Token::RightCurly) && self.has_next() {
            match self.parse_declaration() {
                Ok(statement) => statements.push(statement),
                Err(err) => self.recover(err),
            }
        }

        let close = self.expect(&Token::RightCurly)?;
        Ok(Block { statements, span: &open + &close })
    }

    /// Returns a [`ConditionalStatement`] AST node if the next tokens
    /// represent an `if` statement.
    fn parse_conditional_statement(&mut self) -> Result<ConditionalStatement> {
        let start = self.expect(&Token::If)?;
        self.expect(&Token::LeftParen)?;
        let condition = self.parse_expression()?;
        self.expect(&Token::RightParen)?;

        let then = Box::new(self.parse_statement()?);
        let otherwise = if self.eat(&Token::Else) { Some(Box::new(self.parse_statement()?)) } else { None };

        let end = otherwise.as_ref().map(|s| s.span()).unwrap_or_else(|| then.span());
        Ok(ConditionalStatement { span: &start + &end, condition, then, otherwise })
    }

    /// Returns a [`WhileStatement`] AST node if the next tokens represent a
    /// `while` loop.
    fn parse_while_statement(&mut self) -> Result<WhileStatement> {
        let start = self.expect(&Token::While)?;
        self.expect(&Token::LeftParen)?;
        let condition = self.parse_expression()?;
        self.expect(&Token::RightParen)?;

        let body = self.parse_statement()?;
        Ok(WhileStatement { span: &start + &body.span(), condition, body: Box::new(body) })
    }

    /// Parses a `for` loop and desugars it to a [`WhileStatement`].
    ///
    /// `for (init; cond; step) body` becomes
    /// `{ init; while (cond) { body; step; } }` with each piece optional; a
    /// missing condition is an always-true literal.
    fn parse_for_statement(&mut self) -> Result<Statement> {
        let start = self.expect(&Token::For)?;
        self.expect(&Token::LeftParen)?;

        let initializer = if self.eat(&Token::Semicolon) {
            None
        } else if self.check(&Token::Var) {
            Some(Statement::Definition(self.parse_definition_statement()?))
        } else {
            Some(Statement::Expression(self.parse_expression_statement()?))
        };

        let condition = if self.check(&Token::Semicolon) { None } else { Some(self.parse_expression()?) };
        self.expect(&Token::Semicolon)?;

        let step = if self.check(&Token::RightParen) { None } else { Some(self.parse_expression()?) };
        let close = self.expect(&Token::RightParen)?;

        let mut body = self.parse_statement()?;
        let loop_span = &start + &body.span();

        if let Some(step) = step {
            let step_span = step.span();
            body = Statement::Block(Block {
                span: body.span() + step_span.clone(),
                statements: vec![body, Statement::Expression(ExpressionStatement { expression: step, span: step_span })],
            });
        }

        let condition =
            condition.unwrap_or_else(|| Expression::Literal(LiteralExpression::Boolean(true, close)));

        body = Statement::While(WhileStatement { condition, body: Box::new(body), span: loop_span.clone() });

        if let Some(initializer) = initializer {
            body = Statement::Block(Block { statements: vec![initializer, body], span: loop_span });
        }

        Ok(body)
    }

    /// Returns an [`ExpressionStatement`] AST node if the next tokens
    /// represent an expression followed by a semicolon.
    pub(super) fn parse_expression_statement(&mut self) -> Result<ExpressionStatement> {
        let expression = self.parse_expression()?;
        let end = self.expect(&Token::Semicolon)?;
        Ok(ExpressionStatement { span: &expression.span() + &end, expression })
    }
}
