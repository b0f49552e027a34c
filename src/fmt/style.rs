//! Label and timestamp styling: the ANSI layer on top of `Color`.

use super::{Color, colorize_bg};

/// SGR attribute layered on top of the colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    /// Regular-weight text.
    Plain,
    /// Leveled labels stand out as bold blocks.
    Bold,
    /// Blank/pause labels and the timestamp recede.
    Dim,
}

impl Emphasis {
    /// SGR prefix for this attribute; empty for `Plain`.
    #[must_use]
    pub const fn ansi(self) -> &'static str {
        match self {
            Self::Plain => "",
            Self::Bold => "\x1b[1m",
            Self::Dim => "\x1b[2m",
        }
    }
}

/// Foreground, background and weight for one label block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelStyle {
    pub fg: Color,
    pub bg: Color,
    pub emphasis: Emphasis,
}

impl LabelStyle {
    #[must_use]
    pub const fn new(fg: Color, bg: Color, emphasis: Emphasis) -> Self {
        Self { fg, bg, emphasis }
    }

    /// Applies the style, or returns `text` untouched when colors are off.
    #[must_use]
    pub fn apply(&self, text: &str, colors: bool) -> String {
        if !colors {
            return text.to_string();
        }
        format!("{}{}", self.emphasis.ansi(), colorize_bg(text, self.fg, self.bg))
    }
}

/// Gray, dimmed text used for the timestamp column.
#[must_use]
pub fn dim_gray(text: &str, colors: bool) -> String {
    if !colors {
        return text.to_string();
    }
    let fg = Color::gray().fg_ansi();
    let dim = Emphasis::Dim.ansi();
    let reset = Color::RESET;
    format!("{fg}{dim}{text}{reset}")
}

/// Removes SGR escape sequences; width calculations and sinks without ANSI support need the bare text.
#[must_use]
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            // Parameters run until the final byte in 0x40..=0x7e
            for c in chars.by_ref() {
                if ('\x40'..='\x7e').contains(&c) {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }

    out
}
