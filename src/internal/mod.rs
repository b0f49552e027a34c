//! conlog's own diagnostic logger. Renderer failures, discarded throttle
//! queues and environment problems go through the same pipeline.
//!
//! Uses `OnceLock` so the logger is initialized exactly once, even if
//! several entry points race to call `init`. Until then every call here is a no-op.
//! Once enabled, warnings and errors always print; `info` chatter also needs
//! `set_verbose(true)`.

use crate::config::LoggerConfig;
use crate::logger::Logger;
use crate::values;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

static INTERNAL_LOGGER: OnceLock<Logger> = OnceLock::new();
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Enables diagnostics with default options.
///
/// `OnceLock` guarantees only the first call takes effect; later calls are no-ops.
pub fn init() {
    init_with_config(&LoggerConfig::default());
}

/// Enables diagnostics, borrowing the host's line layout and color choice.
pub fn init_with_config(config: &LoggerConfig) {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER.get_or_init(|| build_internal_logger(config));
    if !was_init {
        info("INTERNAL", "Diagnostics enabled");
    }
}

fn build_internal_logger(config: &LoggerConfig) -> Logger {
    // Never throttled and never passthrough: diagnostics have no observers
    let config = LoggerConfig {
        prefix: "conlog".to_string(),
        throttle_interval_ms: 0,
        passthrough: false,
        ..config.clone()
    };
    Logger::from_config(config)
}

#[must_use]
pub fn is_enabled() -> bool {
    INTERNAL_LOGGER.get().is_some()
}

/// Lets `info` diagnostics through. Can be flipped at any time.
pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);
}

#[must_use]
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Pre-init calls silently vanish rather than crashing.
fn with_logger(f: impl FnOnce(&Logger)) {
    if let Some(logger) = INTERNAL_LOGGER.get() {
        f(logger);
    }
}

pub fn info(scope: &str, msg: &str) {
    if !is_verbose() {
        return;
    }
    with_logger(|logger| {
        logger.info(values![format!("[{scope}] {msg}")]);
    });
}

pub fn warn(scope: &str, msg: &str) {
    with_logger(|logger| {
        logger.warn(values![format!("[{scope}] {msg}")]);
    });
}

pub fn error(scope: &str, msg: &str) {
    with_logger(|logger| {
        logger.error(values![format!("[{scope}] {msg}")]);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_toggles_info_chatter() {
        set_verbose(true);
        assert!(is_verbose());
        set_verbose(false);
        assert!(!is_verbose());
        // Quiet info is a no-op whether or not diagnostics are enabled
        info("TEST", "never printed");
    }
}
