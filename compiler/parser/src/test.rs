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

use crate::parse;

use lox_ast::*;
use lox_errors::emitter::{BufferEmitter, Handler};

fn parse_clean(source: &str) -> Program {
    let (handler, _) = Handler::new_with_buffer();
    let program = parse(&handler, source).expect("parse failed");
    assert!(!handler.had_errors(), "unexpected parse errors in {source:?}");
    program
}

fn parse_with_errors(source: &str) -> (Program, Handler, BufferEmitter) {
    let (handler, buffer) = Handler::new_with_buffer();
    let program = parse(&handler, source).expect("parse failed");
    (program, handler, buffer)
}

#[test]
fn empty_source_parses_to_an_empty_program() {
    assert!(parse_clean("").is_empty());
    assert!(parse_clean("// just a comment\n").is_empty());
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let program = parse_clean("print 1 + 2 * 3;");

    let Statement::Print(print) = &program.statements[0] else {
        panic!("expected a print statement");
    };
    let Expression::Binary(add) = &print.expression else {
        panic!("expected a binary expression");
    };
    assert_eq!(add.op, BinaryOperation::Add);
    assert!(matches!(*add.left, Expression::Literal(LiteralExpression::Number(n, _)) if n == 1.0));

    let Expression::Binary(mul) = &*add.right else {
        panic!("expected the right operand to be the multiplication");
    };
    assert_eq!(mul.op, BinaryOperation::Mul);
}

#[test]
fn comparison_binds_tighter_than_logic() {
    let program = parse_clean("print a == b and c;");

    let Statement::Print(print) = &program.statements[0] else {
        panic!("expected a print statement");
    };
    let Expression::Logical(and) = &print.expression else {
        panic!("expected a logical expression at the top");
    };
    assert_eq!(and.op, LogicalOperation::And);
    assert!(matches!(&*and.left, Expression::Binary(eq) if eq.op == BinaryOperation::Eq));
}

#[test]
fn unary_operators_stack() {
    let program = parse_clean("print !!ok;");

    let Statement::Print(print) = &program.statements[0] else {
        panic!("expected a print statement");
    };
    let Expression::Unary(outer) = &print.expression else {
        panic!("expected a unary expression");
    };
    assert_eq!(outer.op, UnaryOperation::Not);
    assert!(matches!(&*outer.receiver, Expression::Unary(inner) if inner.op == UnaryOperation::Not));
}

#[test]
fn assignment_is_right_associative() {
    let program = parse_clean("a = b = 1;");

    let Statement::Expression(statement) = &program.statements[0] else {
        panic!("expected an expression statement");
    };
    let Expression::Assign(outer) = &statement.expression else {
        panic!("expected an assignment");
    };
    assert_eq!(outer.place.name, "a");
    assert!(matches!(&*outer.value, Expression::Assign(inner) if inner.place.name == "b"));
}

#[test]
fn calls_chain_left_to_right() {
    let program = parse_clean("f(1)(2);");

    let Statement::Expression(statement) = &program.statements[0] else {
        panic!("expected an expression statement");
    };
    let Expression::Call(outer) = &statement.expression else {
        panic!("expected a call");
    };
    assert_eq!(outer.arguments.len(), 1);
    assert!(matches!(&*outer.function, Expression::Call(inner) if inner.arguments.len() == 1));
}

#[test]
fn for_loops_desugar_to_while() {
    let program = parse_clean("for (var i = 0; i < 3; i = i + 1) print i;");

    // The initializer wraps the loop in a block.
    let Statement::Block(block) = &program.statements[0] else {
        panic!("expected the desugared block");
    };
    assert!(matches!(block.statements[0], Statement::Definition(_)));

    // The loop itself is a while whose body ends with the step.
    let Statement::While(while_) = &block.statements[1] else {
        panic!("expected the desugared while");
    };
    let Statement::Block(body) = &*while_.body else {
        panic!("expected the step-appending body block");
    };
    assert_eq!(body.statements.len(), 2);
    assert!(matches!(body.statements[0], Statement::Print(_)));
    assert!(matches!(&body.statements[1], Statement::Expression(s) if matches!(s.expression, Expression::Assign(_))));
}

#[test]
fn for_loop_without_condition_loops_on_true() {
    let program = parse_clean("for (;;) print 1;");

    let Statement::While(while_) = &program.statements[0] else {
        panic!("expected a bare while; no initializer or step was given");
    };
    assert!(matches!(while_.condition, Expression::Literal(LiteralExpression::Boolean(true, _))));
    assert!(matches!(&*while_.body, Statement::Print(_)));
}

#[test]
fn function_declarations_carry_parameters_in_order() {
    let program = parse_clean("fun add(a, b) { return a + b; }");

    let Statement::Function(function) = &program.statements[0] else {
        panic!("expected a function declaration");
    };
    assert_eq!(function.name.name, "add");
    let names: Vec<_> = function.parameters.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["a", "b"]);
    assert!(matches!(&*function.body, Statement::Block(_)));
}

#[test]
fn every_statement_carries_a_span() {
    let program = parse_clean("var x = 1;\nprint x;\n{ x = 2; }\nif (x) print x; else print 0;\nwhile (false) x = 3;\n");

    for statement in &program.statements {
        let span = statement.span();
        assert_ne!(span.line_start, 0, "statement lost its span: {statement}");
        assert!(!span.content.is_empty());
    }
}

#[test]
fn invalid_assignment_target_reports_and_continues() {
    let (program, handler, buffer) = parse_with_errors("1 = 2;\nprint 3;");

    assert_eq!(handler.err_count(), 1);
    assert!(buffer.extract_errs().to_string().contains("Invalid assignment."));

    // Both statements survive; the bad one decays to its left-hand side.
    assert_eq!(program.statements.len(), 2);
}

#[test]
fn parser_synchronizes_at_statement_boundaries() {
    let (program, handler, _) = parse_with_errors("var = 1;\nprint 2;\nvar + 3;\nprint 4;");

    // One diagnostic per corrupted statement, not a cascade.
    assert_eq!(handler.err_count(), 2);

    let survivors: Vec<_> = program.statements.iter().filter(|s| matches!(s, Statement::Print(_))).collect();
    assert_eq!(survivors.len(), 2);
}

#[test]
fn errors_inside_a_block_do_not_leak_out_of_it() {
    let (program, handler, _) = parse_with_errors("{ var = 1; print 2; }\nprint 3;");

    assert_eq!(handler.err_count(), 1);
    assert_eq!(program.statements.len(), 2);
    assert!(matches!(program.statements[0], Statement::Block(_)));
}

#[test]
fn reserved_keywords_are_rejected() {
    for source in ["class Foo {}", "print this;", "super.method();", "abort;", "anon (x) { return x; };"] {
        let (_, handler, buffer) = parse_with_errors(source);
        assert!(handler.had_errors(), "expected a parse error for {source:?}");
        assert!(buffer.extract_errs().to_string().contains("reserved"), "wrong error for {source:?}");
    }
}

#[test]
fn missing_expression_at_eof_reads_as_eof() {
    let (_, handler, buffer) = parse_with_errors("print");

    assert!(handler.had_errors());
    assert!(buffer.extract_errs().to_string().contains("at EOF"));
}

#[test]
fn too_many_arguments_reports_but_still_builds_the_call() {
    let arguments: Vec<String> = (0..=256).map(|i| i.to_string()).collect();
    let source = format!("f({});", arguments.join(", "));
    let (program, handler, buffer) = parse_with_errors(&source);

    assert_eq!(handler.err_count(), 1);
    assert!(buffer.extract_errs().to_string().contains("maximum of 255"));

    let Statement::Expression(statement) = &program.statements[0] else {
        panic!("expected an expression statement");
    };
    assert!(matches!(&statement.expression, Expression::Call(call) if call.arguments.len() == 257));
}

#[test]
fn ast_round_trips_through_json() {
    let program = parse_clean("fun make(n) { fun add(m) { return n + m; } return add; } var f = make(10); print f(5);");
    let ast = Ast::new(program);

    let json = ast.to_json_string().expect("serialization failed");
    let back = Ast::from_json_string(&json).expect("deserialization failed");

    assert_eq!(ast, back);
}
