//! JSON output for CLI commands
//!
//! One JSON object per command on stdout, UTF-8, newline-terminated.

use std::io::{self, Write};

use serde_json::{json, Value};

use super::errors::CliResult;

/// `{"status":"ok","data":...}`
pub fn write_response(data: Value) -> CliResult<()> {
    emit(&json!({
        "status": "ok",
        "data": data
    }))
}

/// `{"status":"error","code":...,"message":...}`
pub fn write_error(code: &str, message: &str) -> CliResult<()> {
    emit(&json!({
        "status": "error",
        "code": code,
        "message": message
    }))
}

fn emit(value: &Value) -> CliResult<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, value)?;
    writeln!(stdout)?;
    stdout.flush()?;
    Ok(())
}
