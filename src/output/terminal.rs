//! Process streams: stdout for the normal channel, stderr for errors.

use super::{Channel, Output};
use crossterm::cursor::{MoveTo, MoveToColumn};
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, IsTerminal, Write};

/// Writes to the real process streams.
#[derive(Debug, Clone)]
pub struct TerminalOutput {
    /// Sampled once at construction; piping never changes mid-run.
    stdout_is_terminal: bool,
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalOutput {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stdout_is_terminal: io::stdout().is_terminal(),
        }
    }
}

impl Output for TerminalOutput {
    fn write(&self, line: &str, channel: Channel) -> Result<(), crate::Error> {
        match channel {
            Channel::Normal => io::stdout().lock().write_all(line.as_bytes())?,
            Channel::Error => io::stderr().lock().write_all(line.as_bytes())?,
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        io::stdout().flush()?;
        io::stderr().flush()?;
        Ok(())
    }

    fn is_terminal(&self) -> bool {
        self.stdout_is_terminal
    }

    fn clear_screen(&self) -> Result<(), crate::Error> {
        execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }

    fn clear_line(&self) -> Result<(), crate::Error> {
        execute!(io::stdout(), Clear(ClearType::CurrentLine), MoveToColumn(0))?;
        Ok(())
    }
}
