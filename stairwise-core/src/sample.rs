//! Sensor Samples and Channels
//!
//! ## Overview
//!
//! A [`Sample`] is one timestamped 3-axis reading tagged with the sensor it
//! came from. Samples are produced by the sensor source, appended to a
//! recording and never touched again: fields are private and only readable
//! through accessors.
//!
//! ## Channels
//!
//! The recording interleaves two sensors:
//! ```text
//! index:   0      1      2      3      4
//! channel: accel  gyro   accel  gyro   accel
//! ```
//! Anything the source cannot attribute to either sensor is tagged
//! [`Channel::Unknown`] and is ignored by the classifier.
//!
//! Channel names are the lower-case literals `"accelerometer"`,
//! `"gyroscope"` and `"unknown"`; those are also the serialized form used by
//! exported recordings (`sensorType` field).

use crate::constants::channels::{ACCELEROMETER_NAME, GYROSCOPE_NAME, UNKNOWN_NAME};
use crate::errors::{SampleError, SampleResult};
use crate::time::Timestamp;
use core::fmt;
use core::str::FromStr;

/// Sensor that produced a sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Channel {
    /// Linear acceleration, m/s²
    Accelerometer = 0,
    /// Angular velocity, rad/s
    Gyroscope = 1,
    /// Source could not be attributed
    #[cfg_attr(feature = "serde", serde(other))]
    Unknown = 2,
}

impl Channel {
    /// Get the literal channel name
    pub const fn name(&self) -> &'static str {
        match self {
            Channel::Accelerometer => ACCELEROMETER_NAME,
            Channel::Gyroscope => GYROSCOPE_NAME,
            Channel::Unknown => UNKNOWN_NAME,
        }
    }

    /// Get expected unit of measurement
    pub const fn unit(&self) -> &'static str {
        match self {
            Channel::Accelerometer => "m/s²",
            Channel::Gyroscope => "rad/s",
            Channel::Unknown => "",
        }
    }

    /// Map a sensor name to a channel; unrecognised names become `Unknown`
    pub fn from_name(name: &str) -> Self {
        match name {
            ACCELEROMETER_NAME => Channel::Accelerometer,
            GYROSCOPE_NAME => Channel::Gyroscope,
            _ => Channel::Unknown,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Channel {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

/// One of the three sample components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    /// X component
    X,
    /// Y component
    Y,
    /// Z component
    Z,
}

impl Axis {
    /// All axes in component order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Get human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Single timestamped 3-axis reading
///
/// Serialized with the field names of exported recordings:
/// `{"x", "y", "z", "sensorType", "timestamp"}`. Deserializing goes through
/// [`Sample::checked`], so a recording with a NaN or out-of-range component
/// fails to load instead of producing a non-finite sample.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSample"))]
pub struct Sample {
    x: f32,
    y: f32,
    z: f32,
    #[cfg_attr(feature = "serde", serde(rename = "sensorType"))]
    channel: Channel,
    timestamp: Timestamp,
}

/// Wire form of [`Sample`] before validation
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSample {
    x: f32,
    y: f32,
    z: f32,
    #[serde(rename = "sensorType")]
    channel: Channel,
    timestamp: Timestamp,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSample> for Sample {
    type Error = SampleError;

    fn try_from(raw: RawSample) -> SampleResult<Self> {
        Sample::checked(raw.x, raw.y, raw.z, raw.channel, raw.timestamp)
    }
}

impl Sample {
    /// Create a sample without checking the components
    pub const fn new(x: f32, y: f32, z: f32, channel: Channel, timestamp: Timestamp) -> Self {
        Self { x, y, z, channel, timestamp }
    }

    /// Create a sample, rejecting NaN or infinite components
    pub fn checked(
        x: f32,
        y: f32,
        z: f32,
        channel: Channel,
        timestamp: Timestamp,
    ) -> SampleResult<Self> {
        let sample = Self::new(x, y, z, channel, timestamp);
        sample.validate()?;
        Ok(sample)
    }

    /// Check every component is a finite number
    pub fn validate(&self) -> SampleResult<()> {
        for axis in Axis::ALL {
            if !self.component(axis).is_finite() {
                return Err(SampleError::InvalidValue { axis });
            }
        }
        Ok(())
    }

    /// X component
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Y component
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Z component
    pub fn z(&self) -> f32 {
        self.z
    }

    /// Component by axis
    pub fn component(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Originating sensor
    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Milliseconds since epoch
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Euclidean magnitude `sqrt(x² + y² + z²)`, computed in f64
    pub fn magnitude(&self) -> f64 {
        let (x, y, z) = (self.x as f64, self.y as f64, self.z as f64);
        libm::sqrt(x * x + y * y + z * z)
    }

    /// Check the originating sensor
    pub fn is(&self, channel: Channel) -> bool {
        self.channel == channel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_names_round_trip() {
        for channel in [Channel::Accelerometer, Channel::Gyroscope, Channel::Unknown] {
            assert_eq!(Channel::from_name(channel.name()), channel);
        }
        assert_eq!(Channel::from_name("magnetometer"), Channel::Unknown);
        assert_eq!("gyroscope".parse::<Channel>(), Ok(Channel::Gyroscope));
    }

    #[test]
    fn magnitude_of_unit_axes() {
        let s = Sample::new(3.0, 4.0, 0.0, Channel::Gyroscope, 0);
        assert_eq!(s.magnitude(), 5.0);

        let zero = Sample::new(0.0, 0.0, 0.0, Channel::Gyroscope, 0);
        assert_eq!(zero.magnitude(), 0.0);
    }

    #[test]
    fn checked_rejects_non_finite() {
        assert!(Sample::checked(1.0, 2.0, 3.0, Channel::Accelerometer, 10).is_ok());
        assert_eq!(
            Sample::checked(1.0, 2.0, f32::INFINITY, Channel::Accelerometer, 10),
            Err(SampleError::InvalidValue { axis: Axis::Z })
        );
        assert_eq!(
            Sample::checked(f32::NAN, 2.0, 3.0, Channel::Gyroscope, 10),
            Err(SampleError::InvalidValue { axis: Axis::X })
        );
    }

    #[test]
    fn accessors_return_constructor_values() {
        let s = Sample::new(-0.38, 2.14, 9.28, Channel::Accelerometer, 1_747_266_769_793);
        assert_eq!(s.x(), -0.38);
        assert_eq!(s.component(Axis::Y), 2.14);
        assert_eq!(s.z(), 9.28);
        assert_eq!(s.channel(), Channel::Accelerometer);
        assert_eq!(s.timestamp(), 1_747_266_769_793);
        assert!(s.is(Channel::Accelerometer));
        assert!(!s.is(Channel::Gyroscope));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_validates_components() {
        let sample: Sample = serde_json::from_str(
            r#"{"x":0.5,"y":0.0,"z":9.75,"sensorType":"accelerometer","timestamp":7}"#,
        )
        .unwrap();
        assert_eq!(sample, Sample::new(0.5, 0.0, 9.75, Channel::Accelerometer, 7));

        // 1e39 does not fit in f32 and would load as infinity
        let overflow = serde_json::from_str::<Sample>(
            r#"{"x":0.0,"y":0.0,"z":1e39,"sensorType":"accelerometer","timestamp":7}"#,
        );
        assert!(overflow.is_err());
    }
}
