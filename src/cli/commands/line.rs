//! The common case: print one leveled line and exit.

use crate::cli::util::message_values;
use crate::kind::MessageKind;
use crate::logger::Logger;
use std::process::ExitCode;

/// Handles `conlog log|info|warn|error|blank <message>...`.
#[must_use]
pub fn cmd_message(kind: MessageKind, words: &[String], json: bool, logger: &Logger) -> ExitCode {
    logger.emit(kind, &message_values(words, json));
    ExitCode::SUCCESS
}
