//! Tests for the async `art` and `pause` operations.

use conlog::{
    Channel, ColorChoice, Environment, FixedClock, InputWait, Logger, LoggerBuilder, Output,
    Payload, TimeOfDay, Topic, values,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

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

/// Resolves immediately and counts how often it was asked to wait.
#[derive(Default)]
struct CountingInput {
    waits: Arc<AtomicUsize>,
}

impl InputWait for CountingInput {
    fn wait(&self) -> Result<(), conlog::Error> {
        self.waits.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

struct BrokenInput;

impl InputWait for BrokenInput {
    fn wait(&self) -> Result<(), conlog::Error> {
        Err(std::io::Error::other("stdin closed").into())
    }
}

fn capture(builder: LoggerBuilder) -> (Logger, Lines) {
    let lines = Lines::default();
    let logger = builder
        .colors(ColorChoice::Never)
        .clock(FixedClock(TimeOfDay::new(9, 0, 0, 5)))
        .output(CaptureOutput {
            lines: Arc::clone(&lines),
        })
        .build();
    (logger, lines)
}

fn writes(lines: &Lines) -> Vec<String> {
    lines
        .lock()
        .expect("lines lock poisoned")
        .iter()
        .map(|(_, line)| line.clone())
        .collect()
}

#[tokio::test]
async fn art_block_is_framed_by_blank_lines() {
    let (logger, lines) = capture(Logger::builder().art_renderer(|text| Ok(text.to_uppercase())));
    logger.art(values!["hello"]).await;

    assert_eq!(writes(&lines), ["\n", "HELLO\n", "\n"]);
}

#[tokio::test]
async fn art_ignores_line_decorations() {
    let (logger, lines) = capture(Logger::builder().prefix("[app]").line_prefix(">>"));
    logger.art(values!["banner"]).await;

    assert_eq!(writes(&lines), ["\n", "banner\n", "\n"]);
}

#[tokio::test]
async fn failing_renderer_falls_back_to_a_log_line() {
    let (logger, lines) = capture(Logger::builder().art_renderer(|_| Err("no font".into())));
    logger.art(values!["hello"]).await;

    assert_eq!(writes(&lines), ["   LOG     09:00:00:005 hello\n"]);
}

#[tokio::test]
async fn art_waits_for_the_configured_delay() {
    let (logger, _) = capture(Logger::builder().art_delay(Duration::from_millis(60)));
    let elapsed = logger.art(values!["slow"]).await;
    assert!(elapsed >= Duration::from_millis(60));
}

#[tokio::test]
async fn art_notifies_with_the_unrendered_message() {
    let (logger, _) = capture(Logger::builder().art_renderer(|text| Ok(format!("*{text}*"))));
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    logger.subscribe(Topic::Art, move |payload: &Payload| {
        sink.lock().expect("seen lock poisoned").push(payload.clone());
    });

    logger.art(values!["hi"]).await;
    assert_eq!(
        *seen.lock().expect("seen lock poisoned"),
        [Payload::Message("hi".to_string())]
    );
}

#[tokio::test]
async fn pause_prints_prompt_and_waits_once() {
    let input = CountingInput::default();
    let waits = Arc::clone(&input.waits);
    let (logger, lines) = capture(Logger::builder().input(input));
    let paused = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&paused);
    logger.subscribe(Topic::Paused, move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    logger
        .pause(values!["Press any key"])
        .await
        .expect("pause should resolve");

    assert_eq!(waits.load(Ordering::SeqCst), 1);
    assert_eq!(paused.load(Ordering::SeqCst), 1);
    assert_eq!(writes(&lines), ["   PAUSE   09:00:00:005 Press any key\n"]);
}

#[tokio::test]
async fn pause_outside_a_process_host_is_unsupported() {
    let input = CountingInput::default();
    let waits = Arc::clone(&input.waits);
    let (logger, lines) = capture(
        Logger::builder()
            .input(input)
            .environment(Environment::Embedded),
    );

    let result = logger.pause(values!["Press any key"]).await;

    assert!(matches!(result, Err(conlog::Error::UnsupportedEnvironment(_))));
    assert_eq!(waits.load(Ordering::SeqCst), 0);
    assert_eq!(writes(&lines).len(), 1);
}

#[tokio::test]
async fn pause_surfaces_input_errors() {
    let (logger, _) = capture(Logger::builder().input(BrokenInput));
    let result = logger.pause(values![]).await;
    assert!(matches!(result, Err(conlog::Error::Io(_))));
}
