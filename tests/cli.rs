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

//! Driver tests: the file runner's three-valued status and exit codes.

use lox_lang::cli::{run_file, Status};

use std::io::Write;
use tempfile::NamedTempFile;

fn script(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("could not create temp script");
    file.write_all(contents.as_bytes()).expect("could not write temp script");
    file
}

#[test]
fn a_clean_script_exits_zero() {
    let file = script("var x = 1 + 2; print x;");
    let status = run_file(file.path());
    assert_eq!(status, Status::Good);
    assert_eq!(status.code(), 0);
}

#[test]
fn a_missing_file_is_an_error() {
    let status = run_file("definitely/not/a/real/script.lox".as_ref());
    assert_eq!(status, Status::Error);
    assert_ne!(status.code(), 0);
}

#[test]
fn a_lexical_error_is_nonzero() {
    let file = script("var x = @;");
    assert_eq!(run_file(file.path()), Status::Error);
}

#[test]
fn a_parse_error_is_nonzero() {
    let file = script("print 1 +;");
    assert_eq!(run_file(file.path()), Status::Error);
}

#[test]
fn a_runtime_error_is_nonzero() {
    let file = script("print 1; print missing;");
    assert_eq!(run_file(file.path()), Status::Error);
}

#[test]
fn exit_status_maps_to_zero() {
    assert_eq!(Status::Exit.code(), 0);
}
