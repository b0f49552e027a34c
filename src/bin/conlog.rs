//! `conlog` prints the same leveled, timestamped lines the library renders,
//! so shell scripts can match the output of the programs they wrap.
//!
//! Usage:
//!   conlog info <message>...             Print an INFO line
//!   conlog error <message>...            Print an ERROR line to stderr
//!   conlog art <text>...                 Print an art block
//!   conlog pause [<message>...]          Wait for a key press
//!   conlog clear                         Clear the terminal
//!   conlog json [<json>]                 Print lines described as JSON (or stdin)

use clap::Parser;
use conlog::MessageKind;
use conlog::cli::{
    Cli, Command, build_logger, cmd_art, cmd_clear, cmd_json, cmd_message, cmd_pause,
};
use conlog::internal;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let options = &cli.options;

    // Diagnostics share the user's layout and must be ready before any command runs.
    // Errors always reach stderr; --verbose adds the info chatter.
    internal::set_verbose(options.verbose);
    internal::init_with_config(&options.to_config());

    let logger = build_logger(options);
    let json = options.json;

    match &cli.command {
        Command::Log { message } => cmd_message(MessageKind::Log, message, json, &logger),
        Command::Info { message } => cmd_message(MessageKind::Info, message, json, &logger),
        Command::Warn { message } => cmd_message(MessageKind::Warn, message, json, &logger),
        Command::Error { message } => cmd_message(MessageKind::Error, message, json, &logger),
        Command::Blank { message } => cmd_message(MessageKind::Blank, message, json, &logger),
        Command::Art { message } => cmd_art(message, &logger),
        Command::Pause { message } => cmd_pause(message, json, &logger),
        Command::Clear => cmd_clear(&logger),
        Command::Json { input } => cmd_json(input.as_deref(), &logger),
    }
}
