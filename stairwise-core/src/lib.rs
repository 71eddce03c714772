//! Core data model for Stairwise movement analysis
//!
//! Holds the pieces every analysis step needs: the immutable [`Sample`]
//! produced by the sensor source, the channel statistics computed over a
//! recorded stream, and the append-only [`SampleRecorder`] the sensor
//! callback writes into.
//!
//! Key constraints:
//! - Statistics are pure functions of their input slice
//! - Empty input never produces NaN; it produces zero-valued stats
//! - Recording order is the time axis and is never rearranged
//!
//! ```
//! use stairwise_core::{compute_stats, Channel, Sample, SampleRecorder};
//!
//! let mut recorder = SampleRecorder::new();
//! recorder.record(Sample::new(0.1, 0.2, 9.8, Channel::Accelerometer, 1_000));
//! recorder.record(Sample::new(0.0, 0.3, 9.6, Channel::Accelerometer, 1_020));
//!
//! let z: Vec<f64> = recorder.channel(Channel::Accelerometer)
//!     .map(|s| s.z() as f64)
//!     .collect();
//! let stats = compute_stats(&z);
//! assert!(stats.min <= stats.mean && stats.mean <= stats.max);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod macros;

pub mod constants;
pub mod errors;
pub mod recorder;
pub mod sample;
pub mod session;
pub mod stats;
pub mod time;

// Public API
pub use errors::{SampleError, SampleResult};
pub use recorder::SampleRecorder;
#[cfg(feature = "std")]
pub use recorder::SharedRecorder;
pub use sample::{Axis, Channel, Sample};
pub use session::SessionSummary;
pub use stats::{compute_stats, mean, population_std_dev, AxisStats, ChannelStats};
pub use time::{FixedTime, TimeSource, Timestamp};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
