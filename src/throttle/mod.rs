//! FIFO rate limiter: bursts of calls are spaced out instead of dropped.
//!
//! The first call on an idle queue fires immediately on the caller's thread.
//! That arms a timer thread which, every `delay`, pops and fires one queued
//! call; when it finds the queue empty it disarms and exits, so an idle
//! queue costs nothing. `reset` bumps a generation counter and wakes the
//! timer, which then retires without firing anything else.
//!
//! A panicking callback never wedges the queue: the timer still starts after
//! a panic on the caller's thread, and the timer thread moves on to the next
//! queued call after a panic of its own.

use crate::internal;
use std::collections::VecDeque;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::Duration;

struct State<T> {
    queue: VecDeque<T>,
    armed: bool,
    generation: u64,
}

struct Inner<T> {
    callback: Box<dyn Fn(T) + Send + Sync>,
    delay: Duration,
    state: Mutex<State<T>>,
    wake: Condvar,
}

impl<T: Send + 'static> Inner<T> {
    fn lock(&self) -> MutexGuard<'_, State<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Timer loop; only the thread whose generation is current may fire.
    fn drain(&self, generation: u64) {
        let mut state = self.lock();
        loop {
            state = self
                .wake
                .wait_timeout_while(state, self.delay, |s| s.generation == generation)
                .unwrap_or_else(PoisonError::into_inner)
                .0;

            if state.generation != generation {
                return;
            }

            let Some(args) = state.queue.pop_front() else {
                state.armed = false;
                return;
            };
            drop(state);
            if panic::catch_unwind(AssertUnwindSafe(|| (self.callback)(args))).is_err() {
                internal::error("THROTTLE", "Queued callback panicked");
            }
            state = self.lock();
        }
    }
}

/// Wraps a callback so successive invocations are at least `delay` apart.
pub struct ThrottleQueue<T> {
    inner: Arc<Inner<T>>,
}

impl<T> fmt::Debug for ThrottleQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThrottleQueue")
            .field("delay", &self.inner.delay)
            .finish_non_exhaustive()
    }
}

impl<T: Send + 'static> ThrottleQueue<T> {
    #[must_use]
    pub fn new(callback: impl Fn(T) + Send + Sync + 'static, delay: Duration) -> Self {
        Self {
            inner: Arc::new(Inner {
                callback: Box::new(callback),
                delay,
                state: Mutex::new(State {
                    queue: VecDeque::new(),
                    armed: false,
                    generation: 0,
                }),
                wake: Condvar::new(),
            }),
        }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.inner.delay
    }

    /// Fires now if the queue is idle, otherwise enqueues behind earlier calls.
    ///
    /// # Panics
    /// Re-raises a panic from the callback when it fires on this thread; the
    /// timer is already running by then.
    pub fn call(&self, args: T) {
        let mut state = self.inner.lock();
        if state.armed {
            state.queue.push_back(args);
            return;
        }
        state.armed = true;
        let generation = state.generation;
        drop(state);

        let fired = panic::catch_unwind(AssertUnwindSafe(|| (self.inner.callback)(args)));
        self.start_timer(generation);
        if let Err(payload) = fired {
            panic::resume_unwind(payload);
        }
    }

    fn start_timer(&self, generation: u64) {
        let inner = Arc::clone(&self.inner);
        let spawned = thread::Builder::new()
            .name("conlog-throttle".to_string())
            .spawn(move || inner.drain(generation));

        if let Err(e) = spawned {
            internal::error("THROTTLE", &format!("Failed to start timer thread: {e}"));
            let mut state = self.inner.lock();
            if state.generation == generation {
                state.armed = false;
            }
        }
    }

    /// Cancels the timer and discards queued calls; returns how many were dropped.
    /// Calls that already fired are unaffected.
    pub fn reset(&self) -> usize {
        let mut state = self.inner.lock();
        let discarded = state.queue.len();
        state.queue.clear();
        state.generation = state.generation.wrapping_add(1);
        state.armed = false;
        drop(state);
        self.inner.wake.notify_all();

        if discarded > 0 {
            internal::warn("THROTTLE", &format!("Discarded {discarded} queued call(s)"));
        }
        discarded
    }

    /// Calls waiting for the timer.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.inner.lock().queue.len()
    }

    /// Whether a timer is currently spacing out calls.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.inner.lock().armed
    }
}

/// Builds a queue from a millisecond delay as it arrives from loosely typed input.
///
/// # Errors
/// `InvalidArgument` if `delay_ms` is negative, NaN or too large for a `Duration`.
pub fn throttle<T: Send + 'static>(
    callback: impl Fn(T) + Send + Sync + 'static,
    delay_ms: f64,
) -> Result<ThrottleQueue<T>, crate::Error> {
    if !delay_ms.is_finite() || delay_ms < 0.0 {
        return Err(crate::Error::InvalidArgument(format!(
            "throttle delay must be a non-negative number of milliseconds, got {delay_ms}"
        )));
    }
    let delay = Duration::try_from_secs_f64(delay_ms / 1000.0)
        .map_err(|e| crate::Error::InvalidArgument(format!("throttle delay {delay_ms}ms: {e}")))?;
    Ok(ThrottleQueue::new(callback, delay))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn rejects_invalid_delays() {
        assert!(throttle(|(): ()| {}, -1.0).is_err());
        assert!(throttle(|(): ()| {}, f64::NAN).is_err());
        assert!(throttle(|(): ()| {}, f64::INFINITY).is_err());
        assert!(throttle(|(): ()| {}, 0.0).is_ok());
    }

    #[test]
    fn first_call_fires_synchronously() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        let queue = ThrottleQueue::new(
            move |n: usize| {
                counter.fetch_add(n, Ordering::SeqCst);
            },
            Duration::from_millis(50),
        );

        queue.call(1);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        queue.call(1);
        assert_eq!(queue.pending(), 1);
        assert!(queue.is_armed());
    }
}
