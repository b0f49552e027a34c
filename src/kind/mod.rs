//! Message kinds: the closed set of line categories a `Logger` can render.

use crate::fmt::{Color, Emphasis, LabelStyle};
use crate::notify::Topic;
use crate::output::Channel;
use std::fmt;
use std::str::FromStr;

/// Every kind carries a fixed label geometry and style, so the set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MessageKind {
    /// General-purpose output.
    Log,
    /// Non-fatal anomalies worth a second look.
    Warn,
    /// Operational milestones.
    Info,
    /// Failures; the only kind routed to the error channel.
    Error,
    /// Timestamped body without a label.
    Blank,
    /// Prompt line printed before waiting for a key press.
    Pause,
    /// Pre-rendered text art, written without label or timestamp.
    Art,
}

impl MessageKind {
    /// Lowercase name, also the text that becomes the upper-cased label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Log => "log",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Error => "error",
            Self::Blank => "blank",
            Self::Pause => "pause",
            Self::Art => "art",
        }
    }

    /// `(start, end)` widths: the name is left-padded to `start`, then right-padded to `end`.
    ///
    /// The uneven start widths center the short names inside a ten-column label.
    #[must_use]
    pub const fn label_widths(self) -> (usize, usize) {
        match self {
            Self::Log => (6, 10),
            Self::Warn | Self::Info => (7, 10),
            Self::Error | Self::Blank | Self::Pause | Self::Art => (8, 10),
        }
    }

    /// Background-block styling applied to the padded label.
    #[must_use]
    pub const fn label_style(self) -> LabelStyle {
        match self {
            Self::Log => LabelStyle::new(Color::white(), Color::gray(), Emphasis::Bold),
            Self::Warn => LabelStyle::new(Color::white(), Color::orange(), Emphasis::Bold),
            Self::Info => LabelStyle::new(Color::white(), Color::blue(), Emphasis::Bold),
            Self::Error => LabelStyle::new(Color::white(), Color::red(), Emphasis::Bold),
            Self::Blank | Self::Pause | Self::Art => {
                LabelStyle::new(Color::white(), Color::gray(), Emphasis::Dim)
            }
        }
    }

    /// Only errors go to stderr; everything else shares stdout.
    #[must_use]
    pub const fn channel(self) -> Channel {
        match self {
            Self::Error => Channel::Error,
            _ => Channel::Normal,
        }
    }

    /// Notification topic emitted when a message of this kind is produced.
    #[must_use]
    pub const fn topic(self) -> Topic {
        match self {
            Self::Log => Topic::MessageLog,
            Self::Warn => Topic::MessageWarn,
            Self::Info => Topic::MessageInfo,
            Self::Error => Topic::MessageError,
            Self::Blank => Topic::MessageBlank,
            Self::Pause => Topic::Paused,
            Self::Art => Topic::Art,
        }
    }

    /// Every kind; each gets its own throttle queue so one kind never delays another.
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::Log,
            Self::Warn,
            Self::Info,
            Self::Error,
            Self::Blank,
            Self::Pause,
            Self::Art,
        ]
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can tell "unknown kind" apart from other failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKindError(String);

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown message kind: '{}'", self.0)
    }
}

impl std::error::Error for ParseKindError {}

impl FromStr for MessageKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "log" => Ok(Self::Log),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "error" | "err" => Ok(Self::Error),
            "blank" => Ok(Self::Blank),
            "pause" => Ok(Self::Pause),
            "art" => Ok(Self::Art),
            _ => Err(ParseKindError(s.to_string())),
        }
    }
}
