//! Publish/subscribe bus that lets observers react to every produced message
//! without sitting in the logging call path.

use crate::collapse::Value;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Stable notification names other components subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    MessageLog,
    MessageWarn,
    MessageInfo,
    MessageError,
    MessageBlank,
    Cleared,
    Paused,
    Art,
}

impl Topic {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MessageLog => "message-log",
            Self::MessageWarn => "message-warn",
            Self::MessageInfo => "message-info",
            Self::MessageError => "message-error",
            Self::MessageBlank => "message-blank",
            Self::Cleared => "cleared",
            Self::Paused => "paused",
            Self::Art => "art",
        }
    }

    #[must_use]
    pub const fn all() -> [Self; 8] {
        [
            Self::MessageLog,
            Self::MessageWarn,
            Self::MessageInfo,
            Self::MessageError,
            Self::MessageBlank,
            Self::Cleared,
            Self::Paused,
            Self::Art,
        ]
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Topic {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|topic| topic.name() == s)
            .ok_or_else(|| crate::Error::InvalidArgument(format!("unknown topic: {s}")))
    }
}

/// What a notification carries.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Topics without data, such as `cleared`.
    Empty,
    /// The collapsed message string.
    Message(String),
    /// The original argument list, when the logger runs in passthrough mode.
    Raw(Vec<Value>),
}

impl Payload {
    /// The collapsed string, if this payload carries one.
    #[must_use]
    pub fn as_message(&self) -> Option<&str> {
        match self {
            Self::Message(m) => Some(m),
            _ => None,
        }
    }
}

/// Shared callback type stored by the bus.
pub type Handler = Arc<dyn Fn(&Payload) + Send + Sync>;

/// Returned by `subscribe`; hand it back to `unsubscribe` to stop delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription {
    id: u64,
    topic: Topic,
}

impl Subscription {
    #[must_use]
    pub const fn topic(&self) -> Topic {
        self.topic
    }
}

struct Entry {
    id: u64,
    topic: Topic,
    handler: Handler,
}

/// Observer list for one logger.
///
/// Handlers run outside the internal lock, so a handler may publish or
/// subscribe on the same bus without deadlocking.
#[derive(Default)]
pub struct NotificationBus {
    next_id: AtomicU64,
    entries: Mutex<Vec<Entry>>,
}

impl fmt::Debug for NotificationBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationBus")
            .field("subscribers", &self.lock().len())
            .finish()
    }
}

impl NotificationBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers `handler` for `topic`. Handlers for the same topic run in subscription order.
    pub fn subscribe(
        &self,
        topic: Topic,
        handler: impl Fn(&Payload) + Send + Sync + 'static,
    ) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.lock().push(Entry {
            id,
            topic,
            handler: Arc::new(handler),
        });
        Subscription { id, topic }
    }

    /// Returns `false` if the subscription was already gone.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        let mut entries = self.lock();
        let before = entries.len();
        entries.retain(|entry| entry.id != subscription.id);
        entries.len() != before
    }

    /// Delivers `payload` to every handler of `topic`; returns how many ran.
    pub fn publish(&self, topic: Topic, payload: &Payload) -> usize {
        let handlers: Vec<Handler> = self
            .lock()
            .iter()
            .filter(|entry| entry.topic == topic)
            .map(|entry| Arc::clone(&entry.handler))
            .collect();

        for handler in &handlers {
            handler(payload);
        }
        handlers.len()
    }

    #[must_use]
    pub fn subscriber_count(&self, topic: Topic) -> usize {
        self.lock().iter().filter(|entry| entry.topic == topic).count()
    }
}
