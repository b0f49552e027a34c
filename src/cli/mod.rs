//! CLI module for conlog.
//!
//! Every logger option is a global flag, so `conlog --no-type warn disk full`
//! and `conlog warn disk full --no-type` mean the same thing.

pub mod commands;
pub mod util;

use crate::config::{ColorChoice, LoggerConfig};
use clap::{Args, Parser, Subcommand};

/// Color choice for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum, Default)]
pub enum ColorArg {
    #[default]
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(color: ColorArg) -> Self {
        match color {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

/// conlog - Leveled, timestamped console messages from the command line.
#[derive(Parser)]
#[command(
    name = "conlog",
    version,
    about = "Leveled, timestamped console messages from the command line"
)]
pub struct Cli {
    #[command(flatten)]
    pub options: OutputArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Line layout flags shared by every subcommand.
#[derive(Debug, Clone, Args)]
pub struct OutputArgs {
    /// Text placed before the message body
    #[arg(long, global = true, default_value = "")]
    pub prefix: String,
    /// Text placed after the message body
    #[arg(long, global = true, default_value = "")]
    pub suffix: String,
    /// Text placed before the whole line
    #[arg(long, global = true, default_value = "")]
    pub line_prefix: String,
    /// Text placed after the whole line
    #[arg(long, global = true, default_value = "\n", hide_default_value = true)]
    pub line_suffix: String,
    /// Hide the leveled label
    #[arg(long, global = true)]
    pub no_type: bool,
    /// Hide the timestamp column
    #[arg(long, global = true)]
    pub no_timestamp: bool,
    /// Include stack traces of error values
    #[arg(long, global = true)]
    pub show_error_stack: bool,
    /// When to emit ANSI colors
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub color: ColorArg,
    /// Milliseconds to wait after printing art
    #[arg(long, global = true, value_name = "MS", default_value_t = 0)]
    pub art_delay_ms: u64,
    /// Parse each message word as JSON where possible
    #[arg(long, global = true)]
    pub json: bool,
    /// Print conlog's own diagnostics
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl OutputArgs {
    #[must_use]
    pub fn to_config(&self) -> LoggerConfig {
        LoggerConfig {
            prefix: self.prefix.clone(),
            suffix: self.suffix.clone(),
            line_prefix: self.line_prefix.clone(),
            line_suffix: self.line_suffix.clone(),
            no_type: self.no_type,
            no_timestamp: self.no_timestamp,
            show_error_stack: self.show_error_stack,
            art_delay_ms: self.art_delay_ms,
            colors: self.color.into(),
            ..LoggerConfig::default()
        }
    }
}

/// CLI subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print a LOG line.
    Log {
        /// Message words
        message: Vec<String>,
    },
    /// Print an INFO line.
    Info {
        /// Message words
        message: Vec<String>,
    },
    /// Print a WARN line.
    Warn {
        /// Message words
        message: Vec<String>,
    },
    /// Print an ERROR line to stderr.
    Error {
        /// Message words
        message: Vec<String>,
    },
    /// Print a line without a label.
    Blank {
        /// Message words
        message: Vec<String>,
    },
    /// Print a block of art surrounded by blank lines.
    Art {
        /// Art text
        message: Vec<String>,
    },
    /// Print a PAUSE line and wait for a key press.
    Pause {
        /// Message words
        message: Vec<String>,
    },
    /// Clear the terminal.
    Clear,
    /// Print lines described as JSON objects.
    Json {
        /// JSON line (reads stdin if omitted or "-")
        input: Option<String>,
    },
}

pub use commands::{cmd_art, cmd_clear, cmd_json, cmd_message, cmd_pause};
pub use util::{build_logger, message_values, runtime};
