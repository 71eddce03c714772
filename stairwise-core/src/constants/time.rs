//! Time Constants
//!
//! Timestamps are milliseconds since the Unix epoch, as stamped by the
//! recording device when the sensor callback fires.

/// Milliseconds per second.
pub const MS_PER_SECOND: i64 = 1000;

/// Minimum timestamps needed to estimate a sampling frequency.
///
/// One sample has no span; two give the first interval.
pub const MIN_SAMPLES_FOR_RATE: usize = 2;
