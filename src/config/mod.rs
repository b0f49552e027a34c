//! Construction-time options record.
//!
//! There is no config file of our own. Hosts that keep their settings in TOML
//! can embed a `[logger]`-style table and hand it to [`LoggerConfig::from_toml_str`];
//! every key is optional thanks to `#[serde(default)]`.

use serde::Deserialize;
use std::io::{self, IsTerminal};
use std::sync::OnceLock;

/// Whether rendered lines carry ANSI styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Colors when stdout is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// `Auto` is decided once per process.
    #[must_use]
    pub fn resolve(self) -> bool {
        static AUTO: OnceLock<bool> = OnceLock::new();
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => *AUTO.get_or_init(|| {
                io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
            }),
        }
    }
}

/// Immutable per-logger settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Text placed before the message body.
    pub prefix: String,
    /// Text placed after the message body.
    pub suffix: String,
    /// Text placed before the whole rendered line.
    pub line_prefix: String,
    /// Text placed after the whole rendered line.
    pub line_suffix: String,
    /// Hide the leveled label.
    pub no_type: bool,
    /// Hide the timestamp column.
    pub no_timestamp: bool,
    /// Include stack traces when collapsing error values.
    pub show_error_stack: bool,
    /// Observers receive the raw argument list instead of the collapsed string.
    pub passthrough: bool,
    /// Minimum spacing between observer notifications of one kind; `0` disables throttling.
    pub throttle_interval_ms: u64,
    /// Pause after writing an art block.
    pub art_delay_ms: u64,
    pub colors: ColorChoice,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            suffix: String::new(),
            line_prefix: String::new(),
            line_suffix: "\n".to_string(),
            no_type: false,
            no_timestamp: false,
            show_error_stack: false,
            passthrough: false,
            throttle_interval_ms: 0,
            art_delay_ms: 0,
            colors: ColorChoice::Auto,
        }
    }
}

impl LoggerConfig {
    /// Parses an options table; missing keys take their defaults.
    ///
    /// # Errors
    /// `ConfigParse` on malformed TOML or mistyped values.
    pub fn from_toml_str(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }
}
