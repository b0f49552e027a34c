//! The orchestrator: collapses arguments, notifies observers, formats the line
//! and routes it to the output, once per call.

mod art;
mod builder;
mod input;

pub use art::{ArtRenderer, BoxError, identity_renderer};
pub use builder::LoggerBuilder;
pub use input::{InputWait, TerminalInput};

use crate::collapse::{CollapseOptions, Value, collapse};
use crate::config::LoggerConfig;
use crate::fmt::{DisplayPayload, Formatter};
use crate::internal;
use crate::kind::MessageKind;
use crate::notify::{NotificationBus, Payload, Subscription, Topic};
use crate::output::{self, Environment, Output};
use crate::throttle::ThrottleQueue;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant};

/// Renders leveled lines and publishes a notification for each one.
///
/// Configuration is fixed at construction. The only mutable state is the
/// observer list and the per-kind throttle queues, both internally locked.
pub struct Logger {
    config: LoggerConfig,
    formatter: Formatter,
    output: Box<dyn Output>,
    bus: Arc<NotificationBus>,
    throttles: HashMap<MessageKind, ThrottleQueue<Payload>>,
    art_renderer: ArtRenderer,
    input: Arc<dyn InputWait>,
    environment: Environment,
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config)
            .field("formatter", &self.formatter)
            .field("bus", &self.bus)
            .field("throttled", &!self.throttles.is_empty())
            .field("environment", &self.environment)
            .finish_non_exhaustive()
    }
}

/// Queued notifications die with the logger; timer threads then release the bus.
impl Drop for Logger {
    fn drop(&mut self) {
        self.reset_throttle();
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Default options, writing to the sink that matches the host environment.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    #[must_use]
    pub fn from_config(config: LoggerConfig) -> Self {
        Self::builder().config(config).build()
    }

    #[must_use]
    pub const fn config(&self) -> &LoggerConfig {
        &self.config
    }

    #[must_use]
    pub const fn environment(&self) -> Environment {
        self.environment
    }

    /// The observer list; plugins subscribe here.
    #[must_use]
    pub const fn bus(&self) -> &Arc<NotificationBus> {
        &self.bus
    }

    /// Shorthand for `bus().subscribe(..)`.
    pub fn subscribe(
        &self,
        topic: Topic,
        handler: impl Fn(&Payload) + Send + Sync + 'static,
    ) -> Subscription {
        self.bus.subscribe(topic, handler)
    }

    /// The queue spacing out `kind` notifications, if throttling is enabled.
    #[must_use]
    pub fn throttle_queue(&self, kind: MessageKind) -> Option<&ThrottleQueue<Payload>> {
        self.throttles.get(&kind)
    }

    /// Drops every queued notification across all kinds; returns how many were discarded.
    pub fn reset_throttle(&self) -> usize {
        self.throttles.values().map(ThrottleQueue::reset).sum()
    }

    pub fn log<A: AsRef<[Value]>>(&self, args: A) -> String {
        self.emit(MessageKind::Log, args.as_ref())
    }

    pub fn warn<A: AsRef<[Value]>>(&self, args: A) -> String {
        self.emit(MessageKind::Warn, args.as_ref())
    }

    pub fn info<A: AsRef<[Value]>>(&self, args: A) -> String {
        self.emit(MessageKind::Info, args.as_ref())
    }

    /// Routed to the error channel.
    pub fn error<A: AsRef<[Value]>>(&self, args: A) -> String {
        self.emit(MessageKind::Error, args.as_ref())
    }

    /// Same pipeline without the label.
    pub fn blank<A: AsRef<[Value]>>(&self, args: A) -> String {
        self.emit(MessageKind::Blank, args.as_ref())
    }

    /// Collapse, notify (possibly throttled), then format and write. Returns the rendered line.
    pub fn emit(&self, kind: MessageKind, args: &[Value]) -> String {
        let message = collapse(args, self.collapse_options());
        self.notify(kind, args, &message);
        self.display(&self.payload(kind, message))
    }

    /// Emits `cleared`, then clears the screen if stdout is an interactive terminal.
    ///
    /// # Errors
    /// I/O errors from the terminal.
    pub fn clear(&self) -> Result<(), crate::Error> {
        self.bus.publish(Topic::Cleared, &Payload::Empty);
        if self.output.is_terminal() {
            self.output.clear_screen()?;
        }
        Ok(())
    }

    /// Flushes buffered output on both channels.
    ///
    /// # Errors
    /// I/O errors from the sink.
    pub fn flush(&self) -> Result<(), crate::Error> {
        self.output.flush()
    }

    /// Prints a `PAUSE` line, waits for one input event and returns the time spent waiting.
    ///
    /// The wait runs on tokio's blocking pool, so this must be awaited inside a tokio runtime.
    ///
    /// # Errors
    /// `UnsupportedEnvironment` outside a process host; I/O errors from the input wait.
    pub async fn pause<A: AsRef<[Value]>>(&self, args: A) -> Result<Duration, crate::Error> {
        let started = Instant::now();
        let args = args.as_ref();
        let message = collapse(args, self.collapse_options());
        self.notify(MessageKind::Pause, args, &message);
        self.display(&self.payload(MessageKind::Pause, message));
        // The prompt must be visible before blocking
        let _ = self.output.flush();

        if self.environment != Environment::Process {
            internal::error("PAUSE", "No standard input in this environment");
            return Err(crate::Error::UnsupportedEnvironment(
                "pause needs a process host with standard input".to_string(),
            ));
        }

        let input = Arc::clone(&self.input);
        tokio::task::spawn_blocking(move || input.wait())
            .await
            .map_err(|e| crate::Error::Io(std::io::Error::other(e)))??;

        if self.output.is_terminal() {
            self.output.clear_line()?;
        }
        Ok(started.elapsed())
    }

    /// Renders the message through the art renderer and writes it as a
    /// headerless block, then sleeps for the configured delay.
    ///
    /// A failing renderer falls back to a plain `log` line. Always returns the elapsed time.
    pub async fn art<A: AsRef<[Value]>>(&self, args: A) -> Duration {
        let started = Instant::now();
        let args = args.as_ref();
        let message = collapse(args, self.collapse_options());
        self.notify(MessageKind::Art, args, &message);

        match (self.art_renderer)(&message) {
            Ok(rendered) => {
                self.display(&DisplayPayload::new(MessageKind::Art, rendered));
            }
            Err(e) => {
                internal::warn("ART", &format!("Renderer failed, printing plain text: {e}"));
                self.display(&self.payload(MessageKind::Log, message));
            }
        }

        let delay = Duration::from_millis(self.config.art_delay_ms);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        started.elapsed()
    }

    const fn collapse_options(&self) -> CollapseOptions {
        CollapseOptions {
            show_error_stack: self.config.show_error_stack,
        }
    }

    fn notify(&self, kind: MessageKind, args: &[Value], message: &str) {
        let payload = if self.config.passthrough {
            Payload::Raw(args.to_vec())
        } else {
            Payload::Message(message.to_string())
        };

        match self.throttles.get(&kind) {
            Some(queue) => queue.call(payload),
            None => {
                self.bus.publish(kind.topic(), &payload);
            }
        }
    }

    fn payload(&self, kind: MessageKind, message: String) -> DisplayPayload {
        DisplayPayload::new(kind, message)
            .prefix(&self.config.prefix)
            .suffix(&self.config.suffix)
            .line_prefix(&self.config.line_prefix)
            .line_suffix(&self.config.line_suffix)
            .no_type(self.config.no_type)
            .no_timestamp(self.config.no_timestamp)
    }

    /// Sink failures are dropped: a broken pipe must not take the caller down.
    fn display(&self, payload: &DisplayPayload) -> String {
        let line = self.formatter.format(payload);
        let _ = output::dispatch(self.output.as_ref(), &line, payload.kind.channel());
        line
    }
}

/// Application-wide default logger, built with default options on first use.
///
/// Hosts that need custom options should construct their own `Logger` and
/// pass it around instead.
pub fn logger() -> &'static Logger {
    static DEFAULT: OnceLock<Logger> = OnceLock::new();
    DEFAULT.get_or_init(Logger::new)
}
