//! Subcommands that touch the terminal itself rather than just printing a line.

use crate::cli::util::{message_values, runtime};
use crate::error::Error;
use crate::internal;
use crate::logger::Logger;
use std::process::ExitCode;

/// Handles `conlog art <text>...`.
#[must_use]
pub fn cmd_art(words: &[String], logger: &Logger) -> ExitCode {
    let rt = match runtime() {
        Ok(rt) => rt,
        Err(e) => {
            internal::error("ART", &format!("Failed to start runtime: {e}"));
            return ExitCode::FAILURE;
        }
    };
    let elapsed = rt.block_on(logger.art(message_values(words, false)));
    internal::info("ART", &format!("Done in {}ms", elapsed.as_millis()));
    ExitCode::SUCCESS
}

/// Handles `conlog pause [<message>...]`.
#[must_use]
pub fn cmd_pause(words: &[String], json: bool, logger: &Logger) -> ExitCode {
    let rt = match runtime() {
        Ok(rt) => rt,
        Err(e) => {
            internal::error("PAUSE", &format!("Failed to start runtime: {e}"));
            return ExitCode::FAILURE;
        }
    };
    match rt.block_on(logger.pause(message_values(words, json))) {
        Ok(waited) => {
            internal::info("PAUSE", &format!("Resumed after {}ms", waited.as_millis()));
            ExitCode::SUCCESS
        }
        Err(Error::UnsupportedEnvironment(_)) => ExitCode::FAILURE,
        Err(e) => {
            internal::error("PAUSE", &format!("Waiting for input failed: {e}"));
            ExitCode::FAILURE
        }
    }
}

/// Handles `conlog clear`.
#[must_use]
pub fn cmd_clear(logger: &Logger) -> ExitCode {
    match logger.clear() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            internal::error("CLEAR", &format!("Failed to clear screen: {e}"));
            ExitCode::FAILURE
        }
    }
}
