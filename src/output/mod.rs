//! Output routing: which channel a line goes to, how it is split into writes,
//! and the `Output` trait that lets hosts plug in their own sink.

mod console;
mod terminal;

pub use console::ConsoleOutput;
pub use terminal::TerminalOutput;

use std::sync::OnceLock;

/// Logical destination of a rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// stdout, or the info sink of a fallback host.
    Normal,
    /// stderr, or the error sink of a fallback host.
    Error,
}

/// `Send + Sync` bounds let one logger be shared across threads.
pub trait Output: Send + Sync {
    /// Writes one already-split, newline-terminated line.
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    fn write(&self, line: &str, channel: Channel) -> Result<(), crate::Error>;

    /// # Errors
    /// I/O errors from the underlying sink.
    fn flush(&self) -> Result<(), crate::Error>;

    /// Interactive-only behavior (screen clearing, line clearing) keys off this.
    fn is_terminal(&self) -> bool {
        false
    }

    /// # Errors
    /// I/O errors from the underlying sink.
    fn clear_screen(&self) -> Result<(), crate::Error> {
        Ok(())
    }

    /// Wipes the current line and returns the cursor to column 0.
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    fn clear_line(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}

/// Splits `text` into newline-terminated writes for `channel`.
///
/// The error channel first expands literal `\n` escapes (backslash + `n`) into a
/// real newline plus two tabs so embedded stack traces stay readable. A single
/// trailing terminator ends the last line rather than producing an empty write.
#[must_use]
pub fn split_for_channel(text: &str, channel: Channel) -> Vec<String> {
    let text = match channel {
        Channel::Error => text.replace("\\n", "\n\t\t"),
        Channel::Normal => text.to_string(),
    };
    let body = text.strip_suffix('\n').unwrap_or(&text);
    body.split('\n').map(|line| format!("{line}\n")).collect()
}

/// Writes `text` line by line; stops at the first failing write.
///
/// # Errors
/// The first I/O error reported by `output`.
pub fn dispatch(output: &dyn Output, text: &str, channel: Channel) -> Result<(), crate::Error> {
    for line in split_for_channel(text, channel) {
        output.write(&line, channel)?;
    }
    Ok(())
}

/// Kind of host the process is running in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Real process with standard streams and a terminal to talk to.
    Process,
    /// Sandboxed host without process streams; output goes through the `log` facade.
    Embedded,
}

impl Environment {
    /// Detected once per process and cached.
    pub fn current() -> Self {
        static CURRENT: OnceLock<Environment> = OnceLock::new();
        *CURRENT.get_or_init(Self::detect)
    }

    const fn detect() -> Self {
        if cfg!(all(target_family = "wasm", not(target_os = "wasi"))) {
            Self::Embedded
        } else {
            Self::Process
        }
    }

    /// Sink matching this environment.
    #[must_use]
    pub fn default_output(self) -> Box<dyn Output> {
        match self {
            Self::Process => Box::new(TerminalOutput::new()),
            Self::Embedded => Box::new(ConsoleOutput::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_terminator_is_not_an_extra_line() {
        assert_eq!(split_for_channel("a\nb\n", Channel::Normal), ["a\n", "b\n"]);
        assert_eq!(split_for_channel("a\n\n", Channel::Normal), ["a\n", "\n"]);
    }

    #[test]
    fn escapes_expand_only_on_error_channel() {
        assert_eq!(split_for_channel("x\\ny", Channel::Normal), ["x\\ny\n"]);
        assert_eq!(split_for_channel("x\\ny", Channel::Error), ["x\n", "\t\ty\n"]);
    }

    #[test]
    fn empty_text_is_one_empty_line() {
        assert_eq!(split_for_channel("", Channel::Normal), ["\n"]);
    }
}
