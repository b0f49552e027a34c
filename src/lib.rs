//! `conlog` - leveled, timestamped console lines with observer plugins.
//!
//! Each call collapses its arguments into one string, notifies any linked
//! observers (optionally throttled per kind), renders the line and writes it
//! to stdout, or stderr for errors:
//!
//! ```text
//!   INFO     14:03:07:412 hello
//! ```
//!
//! # Example
//!
//! ```
//! use conlog::{ColorChoice, Logger, Payload, Plugin, values};
//! use serde_json::json;
//!
//! let logger = Logger::builder()
//!     .prefix("[app]")
//!     .colors(ColorChoice::Never)
//!     .build();
//!
//! let plugin = Plugin::named("audit");
//! plugin.on_error(|payload: &Payload| {
//!     let _ = payload.as_message();
//! });
//! plugin.link(&logger).unwrap();
//!
//! logger.info(values!["Application started"]);
//! logger.warn(values!["Config:", json!({ "retries": 3 })]);
//! let line = logger.error(values!["Connection failed"]);
//! assert!(line.contains("ERROR"));
//! ```
//!
//! # Features
//!
//! - `cli` (default): the `conlog` command-line front end

pub mod collapse;
pub mod config;
mod error;
pub mod fmt;
pub mod internal;
pub mod kind;
pub mod logger;
pub mod notify;
pub mod output;
pub mod plugin;
pub mod throttle;

#[cfg(feature = "cli")]
pub mod cli;

pub use collapse::{CollapseOptions, ErrorValue, Value, collapse};
pub use config::{ColorChoice, LoggerConfig};
pub use error::Error;
pub use fmt::{Clock, DisplayPayload, FixedClock, Formatter, SystemClock, TimeOfDay};
pub use kind::MessageKind;
pub use logger::{ArtRenderer, BoxError, InputWait, Logger, LoggerBuilder, TerminalInput, logger};
pub use notify::{NotificationBus, Payload, Subscription, Topic};
pub use output::{Channel, ConsoleOutput, Environment, Output, TerminalOutput};
pub use plugin::Plugin;
pub use throttle::{ThrottleQueue, throttle};
