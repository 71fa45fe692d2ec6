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

//! The driver: argument dispatch, the script runner, and the interactive
//! prompt.

use lox_ast::{Program, Statement};
use lox_errors::{emitter::Handler, CliError};
use lox_interpreter::{Interpreter, Value};
use lox_parser::ParserContext;

use clap::Parser;
use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

/// The Lox interpreter.
#[derive(Debug, Parser)]
#[command(name = "lox", about = "The Lox interpreter", version)]
pub struct Cli {
    /// The script to run; omit it to start an interactive session.
    pub script: Option<PathBuf>,
}

/// The three-valued driver status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// The source unit ran to completion.
    Good,
    /// A scan, parse, or runtime error was reported.
    Error,
    /// The interactive session was asked to end.
    Exit,
}

impl Status {
    /// The process exit code for this status.
    pub fn code(self) -> i32 {
        match self {
            Status::Good | Status::Exit => 0,
            Status::Error => 1,
        }
    }
}

/// Dispatches the parsed command line and returns the process exit code.
pub fn run_with_args(cli: Cli) -> i32 {
    match cli.script {
        Some(script) => run_file(&script).code(),
        None => run_prompt().code(),
    }
}

/// Runs one source unit through the full pipeline.
///
/// All errors surface through the `handler`; `None` means the unit failed at
/// some stage. Tokens are only handed to the parser when scanning was clean,
/// and the tree is only evaluated when parsing was clean.
fn evaluate_source(handler: &Handler, source: &str, interpreter: &mut Interpreter) -> Option<(Program, Value)> {
    let before_scan = handler.err_count();
    let tokens = lox_parser::tokenize(handler, source);
    if handler.err_count() > before_scan {
        return None;
    }

    let before_parse = handler.err_count();
    let program = match ParserContext::new(handler, tokens).parse_program() {
        Ok(program) => program,
        Err(err) => {
            handler.emit_err(err);
            return None;
        }
    };
    if handler.err_count() > before_parse {
        return None;
    }

    match interpreter.interpret(&program) {
        Ok(value) => Some((program, value)),
        Err(err) => {
            handler.emit_err(err);
            None
        }
    }
}

/// Reads and runs a script file; exit status is nonzero on any error.
pub fn run_file(path: &Path) -> Status {
    let handler = Handler::default();

    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            handler.emit_err(CliError::file_read_error(path.display(), err));
            return Status::Error;
        }
    };

    tracing::debug!(path = %path.display(), bytes = source.len(), "running script");

    let mut interpreter = Interpreter::new();
    match evaluate_source(&handler, &source, &mut interpreter) {
        Some(_) => Status::Good,
        None => Status::Error,
    }
}

/// The interactive prompt: one statement per line against a persistent
/// interpreter, until `exit` or end of input.
pub fn run_prompt() -> Status {
    let stdin = io::stdin();
    let mut interpreter = Interpreter::new();

    loop {
        print!(">> ");
        io::stdout().flush().ok();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => return Status::Exit,
            Ok(_) => {}
            Err(_) => return Status::Error,
        }

        if line.trim() == "exit" {
            return Status::Exit;
        }

        // A failed line reports its errors and comes back to the prompt; the
        // interpreter and its globals live on.
        let handler = Handler::default();
        if let Some((program, value)) = evaluate_source(&handler, &line, &mut interpreter) {
            // Echo the value of a trailing expression statement.
            if matches!(program.statements.last(), Some(Statement::Expression(_))) && value != Value::Nil {
                println!("{value}");
            }
        }
    }
}
