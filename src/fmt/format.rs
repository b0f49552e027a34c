//! Line composition: timestamp column, leveled label, body and line decorations.

use super::clock::{Clock, SystemClock};
use super::style::dim_gray;
use crate::kind::MessageKind;
use std::sync::Arc;

/// Budget for the timestamp column. The raw stamp is right-padded to
/// `TIMESTAMP_GUTTER - raw.len()` characters, which keeps the 12-character
/// `HH:MM:SS:mmm` stamp as-is and a single space as the gutter.
pub const TIMESTAMP_GUTTER: usize = 20;

/// Everything needed to render one line, assembled fresh per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayPayload {
    pub kind: MessageKind,
    pub message: String,
    pub prefix: String,
    pub suffix: String,
    pub line_prefix: String,
    pub line_suffix: String,
    pub no_type: bool,
    pub no_timestamp: bool,
}

impl DisplayPayload {
    /// Bare payload: no decorations, default `"\n"` line suffix, label and timestamp on.
    #[must_use]
    pub fn new(kind: MessageKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            prefix: String::new(),
            suffix: String::new(),
            line_prefix: String::new(),
            line_suffix: "\n".to_string(),
            no_type: false,
            no_timestamp: false,
        }
    }

    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    #[must_use]
    pub fn line_prefix(mut self, line_prefix: impl Into<String>) -> Self {
        self.line_prefix = line_prefix.into();
        self
    }

    #[must_use]
    pub fn line_suffix(mut self, line_suffix: impl Into<String>) -> Self {
        self.line_suffix = line_suffix.into();
        self
    }

    #[must_use]
    pub const fn no_type(mut self, no_type: bool) -> Self {
        self.no_type = no_type;
        self
    }

    #[must_use]
    pub const fn no_timestamp(mut self, no_timestamp: bool) -> Self {
        self.no_timestamp = no_timestamp;
        self
    }
}

/// Renders payloads into printable lines.
#[derive(Clone)]
pub struct Formatter {
    clock: Arc<dyn Clock>,
    colors: bool,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Formatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Formatter")
            .field("colors", &self.colors)
            .finish_non_exhaustive()
    }
}

impl Formatter {
    /// System clock, colors on.
    #[must_use]
    pub fn new() -> Self {
        Self {
            clock: Arc::new(SystemClock),
            colors: true,
        }
    }

    #[must_use]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors = enabled;
        self
    }

    #[must_use]
    pub const fn colors_enabled(&self) -> bool {
        self.colors
    }

    /// The rendering hot path for every line.
    #[must_use]
    pub fn format(&self, payload: &DisplayPayload) -> String {
        if payload.kind == MessageKind::Art {
            return format!("\n{}\n\n", payload.message);
        }

        let body = self.body(payload);
        let line_prefix = &payload.line_prefix;
        let line_suffix = &payload.line_suffix;

        if payload.no_type || payload.kind == MessageKind::Blank {
            format!("{line_prefix}{body}{line_suffix}")
        } else {
            let label = render_label(payload.kind, self.colors);
            format!("{line_prefix}{label} {body}{line_suffix}")
        }
    }

    /// Timestamp column (unless suppressed) followed by the trimmed prefix/message/suffix.
    #[must_use]
    pub fn body(&self, payload: &DisplayPayload) -> String {
        let composed = compose(&payload.prefix, &payload.message, &payload.suffix);
        if payload.no_timestamp {
            return composed;
        }

        let stamp = timestamp_column(&self.clock.now().render());
        format!("{} {composed}", dim_gray(&stamp, self.colors))
    }
}

/// `trim(prefix + " " + message + " " + suffix)`.
#[must_use]
pub fn compose(prefix: &str, message: &str, suffix: &str) -> String {
    format!("{prefix} {message} {suffix}").trim().to_string()
}

/// Pads a raw stamp to the gutter rule described on [`TIMESTAMP_GUTTER`].
#[must_use]
pub fn timestamp_column(raw: &str) -> String {
    let width = TIMESTAMP_GUTTER.saturating_sub(raw.chars().count());
    format!("{raw:<width$}")
}

/// Upper-cased kind name, left-padded to `start`, right-padded to `end`, then styled.
#[must_use]
pub fn render_label(kind: MessageKind, colors: bool) -> String {
    let (start, end) = kind.label_widths();
    let name = kind.as_str();
    let padded = format!("{name:>start$}");
    let padded = format!("{padded:<end$}").to_uppercase();
    kind.label_style().apply(&padded, colors)
}
