//! Recording session summary
//!
//! How long a recording lasted and how fast each sensor actually delivered.
//! Phones rarely honour the requested sensor delay exactly, so the rate is
//! estimated from the stamped timestamps rather than taken from settings.

use crate::constants::time::{MIN_SAMPLES_FOR_RATE, MS_PER_SECOND};
use crate::sample::{Channel, Sample};
use crate::time::Timestamp;

/// Duration and per-channel delivery rate of a recording
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionSummary {
    /// Total samples, any channel
    pub sample_count: usize,
    /// Accelerometer samples
    pub accelerometer_count: usize,
    /// Gyroscope samples
    pub gyroscope_count: usize,
    /// Latest minus earliest timestamp over all samples
    pub duration_ms: i64,
    /// Estimated accelerometer rate in Hz, 0 when unknown
    pub accelerometer_hz: f64,
    /// Estimated gyroscope rate in Hz, 0 when unknown
    pub gyroscope_hz: f64,
}

impl SessionSummary {
    /// Summarise a recording
    pub fn from_samples(samples: &[Sample]) -> Self {
        Self {
            sample_count: samples.len(),
            accelerometer_count: samples.iter().filter(|s| s.is(Channel::Accelerometer)).count(),
            gyroscope_count: samples.iter().filter(|s| s.is(Channel::Gyroscope)).count(),
            duration_ms: duration_ms(samples),
            accelerometer_hz: sampling_frequency(samples, Channel::Accelerometer),
            gyroscope_hz: sampling_frequency(samples, Channel::Gyroscope),
        }
    }

    /// Duration in seconds
    pub fn duration_secs(&self) -> f64 {
        self.duration_ms as f64 / MS_PER_SECOND as f64
    }
}

/// Span between the earliest and latest timestamp, `0` for fewer than two samples
///
/// Saturates at `i64::MAX` for timestamps at opposite ends of the range.
pub fn duration_ms(samples: &[Sample]) -> i64 {
    let mut stamps = samples.iter().map(Sample::timestamp);
    let Some(first) = stamps.next() else {
        return 0;
    };

    let (min, max) = stamps.fold((first, first), |(lo, hi), t| (lo.min(t), hi.max(t)));
    max.saturating_sub(min)
}

/// Estimate the delivery rate of one channel in Hz
///
/// Computed as `n / span_seconds` between the first and last sample of the
/// channel in arrival order. Returns `0.0` with fewer than two samples or a
/// non-positive span.
pub fn sampling_frequency(samples: &[Sample], channel: Channel) -> f64 {
    let mut count = 0usize;
    let mut first: Option<Timestamp> = None;
    let mut last: Timestamp = 0;

    for sample in samples.iter().filter(|s| s.is(channel)) {
        count += 1;
        first.get_or_insert(sample.timestamp());
        last = sample.timestamp();
    }

    let Some(first) = first else {
        return 0.0;
    };
    if count < MIN_SAMPLES_FOR_RATE {
        return 0.0;
    }

    let span_ms = last.saturating_sub(first);
    if span_ms <= 0 {
        return 0.0;
    }

    count as f64 / (span_ms as f64 / MS_PER_SECOND as f64)
}
