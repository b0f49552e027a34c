//! Line rendering, split by concern: colors, styles, clock and composition.

pub mod clock;
mod color;
mod format;
pub mod style;

pub use clock::{Clock, FixedClock, SystemClock, TimeOfDay};
pub use color::{Color, colorize, colorize_bg};
pub use format::{
    DisplayPayload, Formatter, TIMESTAMP_GUTTER, compose, render_label, timestamp_column,
};
pub use style::{Emphasis, LabelStyle, dim_gray, strip_ansi};
