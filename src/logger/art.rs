//! Pluggable text-art rendering for `Logger::art`.

use std::sync::Arc;

/// Error type a renderer may return.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Turns message text into a multi-line art block.
pub type ArtRenderer = Arc<dyn Fn(&str) -> Result<String, BoxError> + Send + Sync>;

/// Returns the text unchanged.
#[must_use]
pub fn identity_renderer() -> ArtRenderer {
    Arc::new(|text: &str| Ok(text.to_string()))
}
