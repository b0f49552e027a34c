//! Fallback sink for hosts without process streams: lines go to the `log` facade.

use super::{Channel, Output};
use crate::fmt::strip_ansi;

/// Forwards each line to `log::info!` / `log::error!` under the `conlog` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleOutput;

impl ConsoleOutput {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Output for ConsoleOutput {
    fn write(&self, line: &str, channel: Channel) -> Result<(), crate::Error> {
        let line = strip_ansi(line.strip_suffix('\n').unwrap_or(line));
        match channel {
            Channel::Normal => log::info!(target: "conlog", "{line}"),
            Channel::Error => log::error!(target: "conlog", "{line}"),
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        log::logger().flush();
        Ok(())
    }
}
