//! The blocking "wait for one input event" primitive behind `Logger::pause`.

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;
use std::io::{self, IsTerminal, Read};

/// Blocks until the user provides one input event.
pub trait InputWait: Send + Sync {
    /// # Errors
    /// I/O errors from the input stream or terminal.
    fn wait(&self) -> Result<(), crate::Error>;
}

/// Standard input. A terminal is switched to raw mode so a single key press
/// counts; piped input resolves after one byte or at end of input.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalInput;

impl InputWait for TerminalInput {
    fn wait(&self) -> Result<(), crate::Error> {
        if !io::stdin().is_terminal() {
            io::stdin().lock().bytes().next().transpose()?;
            return Ok(());
        }

        terminal::enable_raw_mode()?;
        let pressed = wait_for_key_press();
        // Always leave raw mode, even if reading failed
        let restored = terminal::disable_raw_mode();
        pressed?;
        restored?;
        Ok(())
    }
}

fn wait_for_key_press() -> Result<(), crate::Error> {
    loop {
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            return Ok(());
        }
    }
}
