//! Classifier thresholds
//!
//! One canonical threshold set ships as [`ClassifierConfig::default`]:
//!
//! | Rule   | std-dev of accel z | mean gyro magnitude |
//! |--------|--------------------|---------------------|
//! | `Up`   | > 1.8              | > 1.5               |
//! | `Down` | > 1.2              | > 1.0               |
//!
//! with a minimum of 20 samples per session. Other deployments can load
//! their own set, but a set is always used whole; values from different
//! sets are never mixed.

use crate::errors::{ConfigError, ConfigResult};
use crate::features::MovementFeatures;
use crate::{
    DEFAULT_MIN_SAMPLES, DOWN_AVG_GYRO_MAGNITUDE, DOWN_STD_DEV_Z, UP_AVG_GYRO_MAGNITUDE,
    UP_STD_DEV_Z,
};

/// Pair of lower bounds a session's features must both exceed
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Threshold {
    /// Bound on the population std-dev of accelerometer z
    pub std_dev_z: f64,
    /// Bound on the mean gyroscope magnitude
    pub avg_gyro_magnitude: f64,
}

impl Threshold {
    /// Create a threshold pair
    pub const fn new(std_dev_z: f64, avg_gyro_magnitude: f64) -> Self {
        Self { std_dev_z, avg_gyro_magnitude }
    }

    /// Both features strictly above their bound
    pub fn exceeded_by(&self, features: &MovementFeatures) -> bool {
        features.std_dev_z > self.std_dev_z && features.avg_gyro_magnitude > self.avg_gyro_magnitude
    }

    fn validate(&self, prefix: &'static [&'static str; 2]) -> ConfigResult<()> {
        check_bound(prefix[0], self.std_dev_z)?;
        check_bound(prefix[1], self.avg_gyro_magnitude)
    }
}

fn check_bound(name: &'static str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidThreshold { name, value })
    }
}

/// Configuration for the movement classifier
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClassifierConfig {
    /// Sessions with fewer samples (all channels) are `InsufficientData`
    pub min_samples: usize,
    /// Checked first
    pub up: Threshold,
    /// Checked when `up` does not match
    pub down: Threshold,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            min_samples: DEFAULT_MIN_SAMPLES,
            up: Threshold::new(UP_STD_DEV_Z, UP_AVG_GYRO_MAGNITUDE),
            down: Threshold::new(DOWN_STD_DEV_Z, DOWN_AVG_GYRO_MAGNITUDE),
        }
    }
}

impl ClassifierConfig {
    /// Verify the thresholds describe a usable decision policy
    pub fn validate(&self) -> ConfigResult<()> {
        if self.min_samples == 0 {
            return Err(ConfigError::ZeroMinSamples);
        }

        self.up.validate(&["up.std_dev_z", "up.avg_gyro_magnitude"])?;
        self.down.validate(&["down.std_dev_z", "down.avg_gyro_magnitude"])?;

        // Anything that passes a tighter-or-equal Down also passes Up
        if self.down.std_dev_z >= self.up.std_dev_z
            && self.down.avg_gyro_magnitude >= self.up.avg_gyro_magnitude
        {
            return Err(ConfigError::UnreachableDown);
        }

        Ok(())
    }

    /// Load and validate a configuration from JSON
    ///
    /// Missing fields take their default value.
    #[cfg(feature = "std")]
    pub fn from_json(text: &str) -> ConfigResult<Self> {
        use alloc::string::ToString;

        let config: ClassifierConfig =
            serde_json::from_str(text).map_err(|e| ConfigError::Json(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON
    #[cfg(feature = "std")]
    pub fn to_json(&self) -> ConfigResult<alloc::string::String> {
        use alloc::string::ToString;

        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Json(e.to_string()))
    }
}
