//! One file per family of subcommands; the match in main stays thin.

mod json;
mod line;
mod screen;

pub use json::cmd_json;
pub use line::cmd_message;
pub use screen::{cmd_art, cmd_clear, cmd_pause};
