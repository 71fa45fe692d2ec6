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

use crate::{Builtin, Environment, Value};

use lox_errors::RuntimeError;

use std::{cell::RefCell, rc::Rc};

/// `time()`: wall-clock seconds since the Unix epoch, as a number.
fn time(_env: Rc<RefCell<Environment>>, _arguments: &[Value]) -> Result<Value, RuntimeError> {
    Ok(Value::Number(chrono::Utc::now().timestamp() as f64))
}

pub(crate) fn builtin() -> Builtin {
    Builtin { name: "time", arity: 0, func: time }
}
