//! Stepwise construction so callers only name the options they change.

use super::art::{ArtRenderer, BoxError, identity_renderer};
use super::input::{InputWait, TerminalInput};
use super::Logger;
use crate::config::{ColorChoice, LoggerConfig};
use crate::fmt::{Clock, Formatter, SystemClock};
use crate::kind::MessageKind;
use crate::notify::{NotificationBus, Payload};
use crate::output::{Environment, Output};
use crate::throttle::ThrottleQueue;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// Collects options and collaborators for a [`Logger`].
pub struct LoggerBuilder {
    config: LoggerConfig,
    output: Option<Box<dyn Output>>,
    clock: Arc<dyn Clock>,
    art_renderer: ArtRenderer,
    input: Arc<dyn InputWait>,
    environment: Environment,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Default options, system clock, identity art renderer, terminal input.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            output: None,
            clock: Arc::new(SystemClock),
            art_renderer: identity_renderer(),
            input: Arc::new(TerminalInput),
            environment: Environment::current(),
        }
    }

    /// Replaces every option at once, e.g. with one parsed from TOML.
    #[must_use]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.config.suffix = suffix.into();
        self
    }

    #[must_use]
    pub fn line_prefix(mut self, line_prefix: impl Into<String>) -> Self {
        self.config.line_prefix = line_prefix.into();
        self
    }

    #[must_use]
    pub fn line_suffix(mut self, line_suffix: impl Into<String>) -> Self {
        self.config.line_suffix = line_suffix.into();
        self
    }

    #[must_use]
    pub const fn no_type(mut self, no_type: bool) -> Self {
        self.config.no_type = no_type;
        self
    }

    #[must_use]
    pub const fn no_timestamp(mut self, no_timestamp: bool) -> Self {
        self.config.no_timestamp = no_timestamp;
        self
    }

    #[must_use]
    pub const fn show_error_stack(mut self, show: bool) -> Self {
        self.config.show_error_stack = show;
        self
    }

    /// Observers get the raw argument list instead of the collapsed string.
    #[must_use]
    pub const fn passthrough(mut self, passthrough: bool) -> Self {
        self.config.passthrough = passthrough;
        self
    }

    /// Minimum spacing between notifications of one kind. Sub-millisecond parts are dropped.
    #[must_use]
    pub fn throttle_interval(mut self, interval: Duration) -> Self {
        self.config.throttle_interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        self
    }

    #[must_use]
    pub const fn colors(mut self, colors: ColorChoice) -> Self {
        self.config.colors = colors;
        self
    }

    /// Turns message text into art; an `Err` makes `art` fall back to a plain line.
    #[must_use]
    pub fn art_renderer(
        mut self,
        renderer: impl Fn(&str) -> Result<String, BoxError> + Send + Sync + 'static,
    ) -> Self {
        self.art_renderer = Arc::new(renderer);
        self
    }

    /// Sub-millisecond parts are dropped.
    #[must_use]
    pub fn art_delay(mut self, delay: Duration) -> Self {
        self.config.art_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Overrides the environment-selected sink.
    #[must_use]
    pub fn output(mut self, output: impl Output + 'static) -> Self {
        self.output = Some(Box::new(output));
        self
    }

    #[must_use]
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Replaces the key-press wait used by `pause`.
    #[must_use]
    pub fn input(mut self, input: impl InputWait + 'static) -> Self {
        self.input = Arc::new(input);
        self
    }

    /// Overrides the detected host environment.
    #[must_use]
    pub const fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        let formatter = Formatter::new()
            .clock(self.clock)
            .colors(self.config.colors.resolve());
        let output = self
            .output
            .unwrap_or_else(|| self.environment.default_output());
        let bus = Arc::new(NotificationBus::new());

        let interval = Duration::from_millis(self.config.throttle_interval_ms);
        let throttles = if interval.is_zero() {
            HashMap::new()
        } else {
            MessageKind::all()
                .into_iter()
                .map(|kind| (kind, throttled_publisher(&bus, kind, interval)))
                .collect()
        };

        Logger {
            config: self.config,
            formatter,
            output,
            bus,
            throttles,
            art_renderer: self.art_renderer,
            input: self.input,
            environment: self.environment,
        }
    }
}

/// One queue per kind, bound once, publishing to that kind's topic.
fn throttled_publisher(
    bus: &Arc<NotificationBus>,
    kind: MessageKind,
    interval: Duration,
) -> ThrottleQueue<Payload> {
    let bus = Arc::clone(bus);
    let topic = kind.topic();
    ThrottleQueue::new(
        move |payload: Payload| {
            bus.publish(topic, &payload);
        },
        interval,
    )
}
