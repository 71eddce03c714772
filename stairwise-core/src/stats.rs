//! Descriptive Statistics Over One Channel
//!
//! ## Overview
//!
//! Every analysis in Stairwise reduces a list of scalars (accelerometer z,
//! gyroscope magnitude, a single axis) to four numbers: min, max, mean and
//! population standard deviation.
//!
//! ## Conventions
//!
//! ### Population, not sample, variance
//! ```text
//! mean     = Σv / n
//! variance = Σ(v - mean)² / n        (no Bessel correction)
//! std_dev  = sqrt(variance)
//! ```
//!
//! ### Empty input
//! An empty list is not an error. It yields `{0, 0, 0, 0}` so callers can
//! render "no data" without a special case, and no NaN ever escapes.
//!
//! ### Non-finite values
//! NaN and infinities are left out of [`compute_stats`]. A list with no
//! finite value at all is treated like an empty one.
//!
//! ### Pure functions
//! Nothing here keeps state. The same slice always gives the same stats.

use crate::sample::{Axis, Channel, Sample};
use alloc::vec::Vec;

/// Summary statistics for a list of scalar values
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelStats {
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
    /// Arithmetic mean
    pub mean: f64,
    /// Population standard deviation
    pub std_dev: f64,
}

impl ChannelStats {
    /// Stats of an empty list
    pub const ZERO: ChannelStats = ChannelStats {
        min: 0.0,
        max: 0.0,
        mean: 0.0,
        std_dev: 0.0,
    };

    /// Spread between the extremes
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

/// Compute min, max, mean and population standard deviation
///
/// Non-finite values are skipped. Empty input, or input with no finite
/// value, returns [`ChannelStats::ZERO`].
pub fn compute_stats(values: &[f64]) -> ChannelStats {
    if values.iter().all(|v| v.is_finite()) {
        return finite_stats(values);
    }

    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    log_warn!("Skipped {} non-finite values", values.len() - finite.len());
    finite_stats(&finite)
}

fn finite_stats(values: &[f64]) -> ChannelStats {
    if values.is_empty() {
        return ChannelStats::ZERO;
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }

    // Rounding in the sum can push the mean a ulp past an extreme
    let raw_mean = sum(values) / values.len() as f64;
    let mean = if raw_mean < min {
        min
    } else if raw_mean > max {
        max
    } else {
        raw_mean
    };

    ChannelStats {
        min,
        max,
        mean,
        std_dev: std_dev_around(values, mean),
    }
}

/// Arithmetic mean, `0.0` for an empty list
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    sum(values) / values.len() as f64
}

/// Population standard deviation, `0.0` for an empty list
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    std_dev_around(values, mean(values))
}

fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

fn std_dev_around(values: &[f64], mean: f64) -> f64 {
    let variance = values
        .iter()
        .map(|v| {
            let d = v - mean;
            d * d
        })
        .sum::<f64>()
        / values.len() as f64;

    libm::sqrt(variance)
}

/// Per-axis statistics for one channel
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisStats {
    /// X component stats
    pub x: ChannelStats,
    /// Y component stats
    pub y: ChannelStats,
    /// Z component stats
    pub z: ChannelStats,
}

impl AxisStats {
    /// Stats of every axis over the samples of `channel`, in recording order
    pub fn for_channel(samples: &[Sample], channel: Channel) -> Self {
        let of_axis = |axis: Axis| -> ChannelStats {
            let values: Vec<f64> = samples
                .iter()
                .filter(|s| s.is(channel))
                .map(|s| s.component(axis) as f64)
                .collect();
            compute_stats(&values)
        };

        Self {
            x: of_axis(Axis::X),
            y: of_axis(Axis::Y),
            z: of_axis(Axis::Z),
        }
    }

    /// Stats for a single axis
    pub fn axis(&self, axis: Axis) -> &ChannelStats {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}
