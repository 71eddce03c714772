//! Summary features the decision policy reads
//!
//! The session is partitioned by channel, order preserved:
//! ```text
//! accel = samples where channel == accelerometer
//! gyro  = samples where channel == gyroscope
//! ```
//! and reduced to two numbers: the spread of vertical acceleration and the
//! average rotation rate. Samples from unknown sensors are ignored.

use alloc::vec::Vec;
use stairwise_core::{mean, population_std_dev, Channel, Sample};

/// Features computed from one session
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovementFeatures {
    /// Mean accelerometer z
    pub avg_z: f64,
    /// Population std-dev of accelerometer z
    pub std_dev_z: f64,
    /// Mean gyroscope magnitude
    pub avg_gyro_magnitude: f64,
    /// Accelerometer samples used
    pub accelerometer_count: usize,
    /// Gyroscope samples used
    pub gyroscope_count: usize,
}

impl MovementFeatures {
    /// Extract features, or `None` when either sensor is missing or a
    /// feature is not a finite number
    ///
    /// An empty partition has no mean, and a single NaN or infinite reading
    /// poisons every feature it feeds. Either way the session is reported as
    /// lacking data rather than letting NaN reach the decision policy.
    pub fn extract(samples: &[Sample]) -> Option<Self> {
        let z_values: Vec<f64> = samples
            .iter()
            .filter(|s| s.is(Channel::Accelerometer))
            .map(|s| s.z() as f64)
            .collect();

        let gyro_magnitudes: Vec<f64> = samples
            .iter()
            .filter(|s| s.is(Channel::Gyroscope))
            .map(Sample::magnitude)
            .collect();

        if z_values.is_empty() || gyro_magnitudes.is_empty() {
            return None;
        }

        let features = Self {
            avg_z: mean(&z_values),
            std_dev_z: population_std_dev(&z_values),
            avg_gyro_magnitude: mean(&gyro_magnitudes),
            accelerometer_count: z_values.len(),
            gyroscope_count: gyro_magnitudes.len(),
        };
        features.is_finite().then_some(features)
    }

    /// All three features are finite numbers
    pub fn is_finite(&self) -> bool {
        self.avg_z.is_finite() && self.std_dev_z.is_finite() && self.avg_gyro_magnitude.is_finite()
    }
}
