//! Constants for Stairwise Core
//!
//! Named values used across the crate, grouped by domain:
//! - **Channels**: literal sensor names shared with exported recordings
//! - **Time**: unit conversions for millisecond timestamps
//!
//! Always use these constants instead of magic numbers.

/// Literal sensor names.
pub mod channels;

/// Time-related conversions.
pub mod time;

pub use channels::{ACCELEROMETER_NAME, GYROSCOPE_NAME, UNKNOWN_NAME};
pub use time::{MS_PER_SECOND, MIN_SAMPLES_FOR_RATE};
