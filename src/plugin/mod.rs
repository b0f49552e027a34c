//! Observers with one callback slot per message kind.
//!
//! A `Plugin` links to a single `Logger` at a time and forwards the payloads of
//! `message-log`, `message-warn`, `message-info` and `message-error` to
//! whatever callback currently sits in the matching slot. Empty slots drop
//! the notification.

use crate::logger::Logger;
use crate::notify::{NotificationBus, Payload, Subscription, Topic};
use std::any::Any;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

type Callback = Arc<dyn Fn(&Payload) + Send + Sync>;

#[derive(Debug, Clone, Copy)]
enum Slot {
    Log = 0,
    Warn = 1,
    Info = 2,
    Error = 3,
}

impl Slot {
    const ALL: [(Self, Topic); 4] = [
        (Self::Log, Topic::MessageLog),
        (Self::Warn, Topic::MessageWarn),
        (Self::Info, Topic::MessageInfo),
        (Self::Error, Topic::MessageError),
    ];
}

type Slots = Arc<Mutex<[Option<Callback>; 4]>>;

struct Link {
    bus: Weak<NotificationBus>,
    subscriptions: Vec<Subscription>,
}

/// Per-kind observer of a `Logger`.
#[derive(Default)]
pub struct Plugin {
    name: Option<String>,
    slots: Slots,
    link: Mutex<Option<Link>>,
}

impl std::fmt::Debug for Plugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Plugin")
            .field("name", &self.name)
            .field("linked", &self.is_linked())
            .finish_non_exhaustive()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Plugin {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Starts receiving notifications from `target`, which must be a `Logger`
    /// or an `Arc<Logger>`. Linking again moves the plugin to the new logger.
    ///
    /// # Errors
    /// `InvalidTarget` if `target` is anything else.
    pub fn link(&self, target: &dyn Any) -> Result<(), crate::Error> {
        let logger = target
            .downcast_ref::<Logger>()
            .or_else(|| target.downcast_ref::<Arc<Logger>>().map(|logger| &**logger))
            .ok_or_else(|| {
                crate::Error::InvalidTarget(
                    "only Logger instances can be linked to plugins".to_string(),
                )
            })?;
        self.link_bus(logger.bus());
        Ok(())
    }

    fn link_bus(&self, bus: &Arc<NotificationBus>) {
        let mut link = lock(&self.link);

        if let Some(previous) = link.take()
            && let Some(old_bus) = previous.bus.upgrade()
        {
            for subscription in previous.subscriptions {
                old_bus.unsubscribe(subscription);
            }
        }

        let subscriptions = Slot::ALL
            .iter()
            .map(|&(slot, topic)| {
                let slots = Arc::clone(&self.slots);
                bus.subscribe(topic, move |payload| {
                    // Clone out of the lock so a callback may re-register itself
                    let callback = lock(&slots)[slot as usize].clone();
                    if let Some(callback) = callback {
                        callback(payload);
                    }
                })
            })
            .collect();

        *link = Some(Link {
            bus: Arc::downgrade(bus),
            subscriptions,
        });
    }

    /// Whether the linked logger is still alive.
    #[must_use]
    pub fn is_linked(&self) -> bool {
        lock(&self.link)
            .as_ref()
            .is_some_and(|link| link.bus.strong_count() > 0)
    }

    fn set(&self, slot: Slot, callback: impl Fn(&Payload) + Send + Sync + 'static) -> &Self {
        lock(&self.slots)[slot as usize] = Some(Arc::new(callback));
        self
    }

    /// Replaces the `log` callback.
    pub fn on_log(&self, callback: impl Fn(&Payload) + Send + Sync + 'static) -> &Self {
        self.set(Slot::Log, callback)
    }

    /// Replaces the `warn` callback.
    pub fn on_warn(&self, callback: impl Fn(&Payload) + Send + Sync + 'static) -> &Self {
        self.set(Slot::Warn, callback)
    }

    /// Replaces the `info` callback.
    pub fn on_info(&self, callback: impl Fn(&Payload) + Send + Sync + 'static) -> &Self {
        self.set(Slot::Info, callback)
    }

    /// Replaces the `error` callback.
    pub fn on_error(&self, callback: impl Fn(&Payload) + Send + Sync + 'static) -> &Self {
        self.set(Slot::Error, callback)
    }
}
