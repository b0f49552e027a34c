//! JSON line command implementation.

use crate::collapse::Value;
use crate::internal;
use crate::kind::MessageKind;
use crate::logger::Logger;
use serde::Deserialize;
use std::io::{self, BufRead};
use std::process::ExitCode;

/// JSON line format: `{"kind": "warn", "args": ["disk", {"free": 0}]}`.
#[derive(Debug, Deserialize)]
struct JsonEntry {
    kind: String,
    #[serde(default)]
    args: Vec<serde_json::Value>,
}

fn process_line(line: &str, logger: &Logger) -> Result<(), String> {
    let entry: JsonEntry = serde_json::from_str(line).map_err(|e| format!("invalid JSON: {e}"))?;
    let kind = entry.kind.parse::<MessageKind>().map_err(|e| e.to_string())?;
    if !matches!(
        kind,
        MessageKind::Log
            | MessageKind::Info
            | MessageKind::Warn
            | MessageKind::Error
            | MessageKind::Blank
    ) {
        return Err(format!("kind '{kind}' cannot be printed from JSON"));
    }

    let args: Vec<Value> = entry
        .args
        .into_iter()
        .map(|arg| match arg {
            serde_json::Value::String(text) => Value::Text(text),
            other => Value::Structured(other),
        })
        .collect();
    logger.emit(kind, &args);
    Ok(())
}

/// Handles `conlog json [<json>]`.
#[must_use]
pub fn cmd_json(input: Option<&str>, logger: &Logger) -> ExitCode {
    let mut processed = 0u64;
    let mut failed = 0u64;

    match input {
        None | Some("-") => {
            for line in io::stdin().lock().lines() {
                match line {
                    Ok(l) if !l.trim().is_empty() => {
                        if let Err(e) = process_line(&l, logger) {
                            internal::error("JSON", &e);
                            failed += 1;
                        } else {
                            processed += 1;
                        }
                    }
                    Ok(_) => {}
                    Err(e) => {
                        internal::error("JSON", &format!("Error reading stdin: {e}"));
                        return ExitCode::FAILURE;
                    }
                }
            }
            internal::info(
                "JSON",
                &format!("Processed {processed} entries, {failed} failed"),
            );
            if failed == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Some(json) => match process_line(json, logger) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                internal::error("JSON", &e);
                ExitCode::FAILURE
            }
        },
    }
}
