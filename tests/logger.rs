//! Tests for rendered logger output.

use conlog::{
    Channel, ColorChoice, ErrorValue, FixedClock, Logger, LoggerBuilder, MessageKind, Output,
    TimeOfDay, Value, values,
};
use serde_json::json;
use std::sync::{Arc, Mutex};

type Lines = Arc<Mutex<Vec<(Channel, String)>>>;

struct CaptureOutput {
    lines: Lines,
}

impl Output for CaptureOutput {
    fn write(&self, line: &str, channel: Channel) -> Result<(), conlog::Error> {
        self.lines
            .lock()
            .expect("lines lock poisoned")
            .push((channel, line.to_string()));
        Ok(())
    }

    fn flush(&self) -> Result<(), conlog::Error> {
        Ok(())
    }
}

fn capture(builder: LoggerBuilder) -> (Logger, Lines) {
    let lines = Lines::default();
    let logger = builder
        .colors(ColorChoice::Never)
        .clock(FixedClock(TimeOfDay::new(14, 3, 7, 412)))
        .output(CaptureOutput {
            lines: Arc::clone(&lines),
        })
        .build();
    (logger, lines)
}

fn written(lines: &Lines) -> Vec<(Channel, String)> {
    lines.lock().expect("lines lock poisoned").clone()
}

#[test]
fn every_line_kind_renders_non_blank_text() {
    let (logger, lines) = capture(Logger::builder());
    for kind in [
        MessageKind::Log,
        MessageKind::Warn,
        MessageKind::Info,
        MessageKind::Error,
        MessageKind::Blank,
    ] {
        let line = logger.emit(kind, &values!["hello"]);
        assert!(!line.trim().is_empty(), "{kind} rendered a blank line");
        assert!(line.contains("hello"));
    }
    assert_eq!(written(&lines).len(), 5);
}

#[test]
fn info_line_matches_golden_output() {
    let (logger, lines) = capture(Logger::builder());
    let line = logger.info(values!["hello"]);

    assert_eq!(line, "   INFO    14:03:07:412 hello\n");
    assert_eq!(written(&lines), vec![(Channel::Normal, line)]);
}

#[test]
fn labels_are_ten_columns_wide() {
    let (logger, _) = capture(Logger::builder().no_timestamp(true));
    assert_eq!(logger.log(values!["x"]), "   LOG     x\n");
    assert_eq!(logger.warn(values!["x"]), "   WARN    x\n");
    assert_eq!(logger.error(values!["x"]), "   ERROR   x\n");
}

#[test]
fn blank_has_no_label() {
    let (logger, _) = capture(Logger::builder());
    assert_eq!(logger.blank(values!["x"]), "14:03:07:412 x\n");
}

#[test]
fn arguments_are_joined_by_newlines() {
    let (logger, lines) = capture(Logger::builder().no_type(true).no_timestamp(true));
    let line = logger.log(values!["first", 2, true]);

    assert_eq!(line, "first\n2\ntrue\n");
    let writes: Vec<String> = written(&lines).into_iter().map(|(_, l)| l).collect();
    assert_eq!(writes, ["first\n", "2\n", "true\n"]);
}

#[test]
fn objects_are_pretty_printed_with_tabs() {
    let (logger, _) = capture(Logger::builder());
    let line = logger.log(values![json!({ "a": 1, "b": [true] })]);
    assert!(line.contains("{\n\t\"a\": 1,\n\t\"b\": [\n\t\ttrue\n\t]\n}"));
}

#[test]
fn serializable_structs_are_pretty_printed() {
    #[derive(serde::Serialize)]
    struct Retry {
        attempts: u32,
    }

    let (logger, _) = capture(Logger::builder().no_timestamp(true));
    let line = logger.warn([Value::serialize(&Retry { attempts: 3 })]);
    assert!(line.contains("\"attempts\": 3"));
}

#[test]
fn error_stack_is_hidden_by_default() {
    let error =
        ErrorValue::new("ConnectError", "refused").stack("ConnectError: refused\n    at dial");
    let (logger, _) = capture(Logger::builder());

    let line = logger.error([Value::from(error)]);
    assert!(line.contains("\"name\": \"ConnectError\""));
    assert!(line.contains("\"message\": \"refused\""));
    assert!(!line.contains("\"stack\""));
}

#[test]
fn error_stack_is_shown_when_enabled() {
    let error = std::io::Error::other("disk on fire");
    let (logger, _) = capture(Logger::builder().show_error_stack(true));

    let line = logger.error([Value::error(&error)]);
    assert!(line.contains("\"stack\""));
    assert!(line.contains("disk on fire"));
}

#[test]
fn prefix_and_suffix_flank_the_body() {
    let (logger, lines) = capture(Logger::builder().prefix("[app]").suffix("(done)"));
    let line = logger.info(values!["hello"]);

    assert!(line.contains("[app] hello (done)"));
    assert!(written(&lines)[0].1.contains("[app] hello (done)"));
}

#[test]
fn empty_decorations_are_trimmed_away() {
    let (logger, _) = capture(Logger::builder().prefix("[app]").no_type(true).no_timestamp(true));
    assert_eq!(logger.log(values![""]), "[app]\n");
}

#[test]
fn line_prefix_starts_every_line() {
    let (logger, _) = capture(Logger::builder().line_prefix("xxx"));
    for line in [logger.log(values!["a"]), logger.warn(values!["b"])] {
        assert!(line.starts_with("xxx"), "{line:?}");
    }
}

#[test]
fn line_suffix_ends_every_line() {
    let (logger, lines) = capture(Logger::builder().line_suffix("xxx"));
    let line = logger.info(values!["a"]);

    assert!(line.ends_with("xxx"));
    assert_eq!(written(&lines)[0].1, "   INFO    14:03:07:412 axxx\n");
}

#[test]
fn no_type_keeps_prefix_suffix_and_drops_label() {
    let (logger, _) = capture(Logger::builder().prefix("🔥").suffix("❄️").no_type(true));
    let line = logger.info(values!["hello"]);

    assert!(line.contains("🔥"));
    assert!(line.contains("hello"));
    assert!(line.contains("❄️"));
    assert!(!line.contains("INFO"));
}

#[test]
fn errors_go_to_the_error_channel() {
    let (logger, lines) = capture(Logger::builder().no_timestamp(true));
    logger.info(values!["fine"]);
    logger.error(values!["broken"]);

    let channels: Vec<Channel> = written(&lines).into_iter().map(|(c, _)| c).collect();
    assert_eq!(channels, [Channel::Normal, Channel::Error]);
}

#[test]
fn error_channel_expands_escaped_newlines() {
    let (logger, lines) = capture(Logger::builder().no_type(true).no_timestamp(true));
    let line = logger.error(values!["first\\nsecond"]);

    // The returned string is untouched; only the writes are expanded
    assert_eq!(line, "first\\nsecond\n");
    let writes: Vec<String> = written(&lines).into_iter().map(|(_, l)| l).collect();
    assert_eq!(writes, ["first\n", "\t\tsecond\n"]);
}

#[test]
fn clear_on_non_terminal_output_only_notifies() {
    let (logger, lines) = capture(Logger::builder());
    let cleared = Arc::new(Mutex::new(0));
    let counter = Arc::clone(&cleared);
    logger.subscribe(conlog::Topic::Cleared, move |_| {
        *counter.lock().expect("counter lock poisoned") += 1;
    });

    logger.clear().expect("clear should not fail");
    assert_eq!(*cleared.lock().expect("counter lock poisoned"), 1);
    assert!(written(&lines).is_empty());
}

#[test]
fn from_config_applies_every_option() {
    let config = conlog::LoggerConfig {
        prefix: "[cfg]".to_string(),
        no_timestamp: true,
        colors: ColorChoice::Never,
        ..conlog::LoggerConfig::default()
    };
    let (logger, _) = capture(Logger::builder().config(config.clone()));

    assert_eq!(logger.config(), &config);
    assert_eq!(logger.log(values!["x"]), "   LOG     [cfg] x\n");
}
