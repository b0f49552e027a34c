//! 24-bit colors for labels and the timestamp column.

use std::fmt;

/// A dedicated type prevents mixing up raw u8 triples and documents color intent at the type level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// `const` so per-kind label styles can be compile-time constants.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Terminals need the raw `\x1b[38;2;R;G;Bm` escape; callers shouldn't hand-build it.
    #[must_use]
    pub fn fg_ansi(self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }

    /// Labels are background blocks, which use SGR 48 instead of 38.
    #[must_use]
    pub fn bg_ansi(self) -> String {
        format!("\x1b[48;2;{};{};{}m", self.r, self.g, self.b)
    }

    /// Terminates any active SGR styling so subsequent text returns to the terminal default.
    pub const RESET: &'static str = "\x1b[0m";

    #[must_use]
    pub const fn white() -> Self {
        Self::new(255, 255, 255)
    }

    #[must_use]
    pub const fn gray() -> Self {
        Self::new(128, 128, 128)
    }

    /// `#ffa500`, the warning block.
    #[must_use]
    pub const fn orange() -> Self {
        Self::new(255, 165, 0)
    }

    #[must_use]
    pub const fn blue() -> Self {
        Self::new(0, 0, 238)
    }

    #[must_use]
    pub const fn red() -> Self {
        Self::new(205, 0, 0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Wraps `text` in a foreground color and a trailing reset.
#[must_use]
pub fn colorize(text: &str, color: Color) -> String {
    let fg = color.fg_ansi();
    let reset = Color::RESET;
    format!("{fg}{text}{reset}")
}

/// Badge-style rendering (colored background + contrasting text) needs both FG and BG escapes paired together.
#[must_use]
pub fn colorize_bg(text: &str, fg: Color, bg: Color) -> String {
    let fg_code = fg.fg_ansi();
    let bg_code = bg.bg_ansi();
    let reset = Color::RESET;
    format!("{fg_code}{bg_code}{text}{reset}")
}
