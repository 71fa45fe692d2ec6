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

//! End-to-end language tests: parse a program, run it, check what it printed.

use lox_errors::{emitter::Handler, LoxError, Result};
use lox_interpreter::{Interpreter, Value};

use std::{
    cell::RefCell,
    io::{self, Write},
    rc::Rc,
};

/// A `print` sink the test can read back after the interpreter is done.
#[derive(Clone, Default)]
struct Sink(Rc<RefCell<Vec<u8>>>);

impl Sink {
    fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).expect("print wrote invalid utf-8")
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `source` and returns (result, captured stdout).
fn run(source: &str) -> (Result<Value>, String) {
    let (handler, _) = Handler::new_with_buffer();
    let program = lox_parser::parse(&handler, source).expect("parse failed");
    assert!(!handler.had_errors(), "unexpected parse errors in {source:?}");

    let sink = Sink::default();
    let mut interpreter = Interpreter::with_output(Box::new(sink.clone()));
    let result = interpreter.interpret(&program);

    (result, sink.contents())
}

fn expect_output(source: &str, expected: &str) {
    let (result, output) = run(source);
    result.expect("runtime error");
    assert_eq!(output, expected, "wrong output for {source:?}");
}

fn expect_runtime_error(source: &str, message: &str) {
    let (result, _) = run(source);
    match result {
        Err(LoxError::RuntimeError(err)) => assert_eq!(err.message(), message, "wrong error for {source:?}"),
        other => panic!("expected a runtime error for {source:?}, got {other:?}"),
    }
}

#[test]
fn arithmetic_precedence() {
    expect_output("print 1 + 2 * 3;", "7\n");
}

#[test]
fn string_concatenation() {
    expect_output("var a = \"hi\"; var b = \" there\"; print a + b;", "hi there\n");
}

#[test]
fn for_loop_accumulates() {
    expect_output("var x = 0; for (var i = 0; i < 3; i = i + 1) { x = x + i; } print x;", "3\n");
}

#[test]
fn closures_capture_their_defining_scope() {
    expect_output(
        "fun make(n) { fun add(m) { return n + m; } return add; } \
         var f = make(10); print f(5); print f(7);",
        "15\n17\n",
    );
}

#[test]
fn logical_operators_return_the_deciding_operand() {
    expect_output("print 1 < 2 and \"ok\";", "ok\n");
    expect_output("print nil or \"fallback\";", "fallback\n");
    expect_output("print false and \"skipped\";", "false\n");
    expect_output("print 1 or \"skipped\";", "1\n");
}

#[test]
fn while_loop_accumulates() {
    expect_output("var s = 0; var i = 1; while (i <= 4) { s = s + i; i = i + 1; } print s;", "10\n");
}

#[test]
fn subtracting_a_string_is_a_type_error() {
    expect_runtime_error("print \"a\" - 1;", "Operands must be numbers.");
}

#[test]
fn reading_an_undefined_variable_is_an_error() {
    expect_runtime_error("print foo;", "Undefined variable 'foo'.");
}

#[test]
fn adding_mixed_kinds_is_a_type_error() {
    expect_runtime_error("print \"a\" + 1;", "Operands must be numbers or strings.");
    expect_runtime_error("print nil + nil;", "Operands must be numbers or strings.");
}

#[test]
fn comparing_non_numbers_is_a_type_error() {
    expect_runtime_error("print \"a\" < \"b\";", "Operands must be numbers.");
}

#[test]
fn negating_a_non_number_is_a_type_error() {
    expect_runtime_error("print -\"a\";", "Operand must be a number.");
}

#[test]
fn calling_a_non_callable_is_an_error() {
    expect_runtime_error("var x = 1; x();", "Object is not callable.");
}

#[test]
fn arity_is_checked() {
    expect_runtime_error("fun f(a, b) { return a; } f(1);", "Expected 2 arguments but got 1.");
    expect_runtime_error("fun g() { return 1; } g(1, 2);", "Expected 0 arguments but got 2.");
}

#[test]
fn return_at_top_level_is_an_error() {
    expect_runtime_error("return 1;", "Cannot return from top-level code.");
}

#[test]
fn assignment_writes_through_to_the_declaring_scope() {
    expect_output("var x = 1; { x = 2; } print x;", "2\n");
    expect_output("var x = 1; { var x = 9; x = 10; } print x;", "1\n");
}

#[test]
fn block_scoped_variables_do_not_leak() {
    expect_runtime_error("{ var inner = 1; } print inner;", "Undefined variable 'inner'.");
}

#[test]
fn shadowing_restores_after_the_block() {
    expect_output("var x = \"outer\"; { var x = \"inner\"; print x; } print x;", "inner\nouter\n");
}

#[test]
fn short_circuit_skips_the_right_operand() {
    // The right operands would write if they ran.
    expect_output(
        "var log = \"\"; \
         fun note(v) { log = log + \"x\"; return v; } \
         false and note(true); \
         true or note(true); \
         print log;",
        "\n",
    );
    // And they do run when the left side does not decide.
    expect_output(
        "var log = \"\"; \
         fun note(v) { log = log + \"x\"; return v; } \
         true and note(true); \
         false or note(true); \
         print log;",
        "xx\n",
    );
}

#[test]
fn operands_evaluate_left_to_right() {
    expect_output(
        "var log = \"\"; \
         fun side(label, v) { log = log + label; return v; } \
         side(\"a\", 1) + side(\"b\", 2); \
         side(\"f\", 0); \
         print log;",
        "abf\n",
    );
}

#[test]
fn division_by_zero_follows_ieee() {
    expect_output("print 1 / 0;", "inf\n");
    expect_output("print -1 / 0;", "-inf\n");
    expect_output("print 0 / 0;", "NaN\n");
}

#[test]
fn equality_follows_the_value_model() {
    expect_output("print 1 == 1;", "true\n");
    expect_output("print 1 == \"1\";", "false\n");
    expect_output("print nil == nil;", "true\n");
    expect_output("print nil == false;", "false\n");
    expect_output("print \"a\" != \"b\";", "true\n");
}

#[test]
fn nil_prints_with_angle_brackets() {
    expect_output("var x; print x;", "<nil>\n");
}

#[test]
fn if_else_branches() {
    expect_output("if (1 < 2) print \"then\"; else print \"else\";", "then\n");
    expect_output("if (nil) print \"then\"; else print \"else\";", "else\n");
    expect_output("if (false) print \"then\";", "");
}

#[test]
fn functions_print_as_tagged_names() {
    expect_output("fun f() { return 1; } print f;", "<fn f>\n");
    expect_output("print time;", "<native fn time>\n");
}

#[test]
fn the_time_builtin_returns_a_number() {
    let (result, _) = run("print time() >= 0;");
    result.expect("time() failed");
}

#[test]
fn recursion_works() {
    expect_output(
        "fun fib(n) { if (n < 2) return n; return fib(n - 1) + fib(n - 2); } print fib(10);",
        "55\n",
    );
}

#[test]
fn runtime_errors_abort_the_rest_of_the_program() {
    let (result, output) = run("print 1; print foo; print 2;");
    assert!(result.is_err());
    assert_eq!(output, "1\n");
}

#[test]
fn evaluation_is_deterministic() {
    let source = "var x = 0; for (var i = 0; i < 10; i = i + 1) { x = x + i * i; } print x; \
                  fun make(n) { fun add(m) { return n + m; } return add; } print make(3)(4);";
    let (_, first) = run(source);
    let (_, second) = run(source);
    assert_eq!(first, second);
    assert_eq!(first, "285\n7\n");
}

#[test]
fn interpret_returns_the_last_statement_value() {
    let (result, _) = run("1 + 2;");
    assert_eq!(result.unwrap(), Value::Number(3.0));

    let (result, _) = run("var x = 5; x * 2;");
    assert_eq!(result.unwrap(), Value::Number(10.0));

    // A print statement's own value is nil.
    let (result, _) = run("print 1;");
    assert_eq!(result.unwrap(), Value::Nil);
}

#[test]
fn functions_without_return_yield_their_last_statement_value() {
    expect_output("fun last() { 1; 2; 3; } print last();", "3\n");
}

#[test]
fn builtin_registration_binds_a_callable() {
    use lox_interpreter::Builtin;

    let sink = Sink::default();
    let mut interpreter = Interpreter::with_output(Box::new(sink.clone()));
    interpreter.register_builtin(Builtin { name: "answer", arity: 0, func: |_, _| Ok(Value::Number(42.0)) });

    let (handler, _) = Handler::new_with_buffer();
    let program = lox_parser::parse(&handler, "print answer();").expect("parse failed");
    interpreter.interpret(&program).expect("runtime error");

    assert_eq!(sink.contents(), "42\n");
}
