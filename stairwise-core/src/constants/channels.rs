//! Literal Sensor Names
//!
//! These strings are the `sensorType` values written by the recording app
//! and read back by the analysis tools. They are matched exactly.

/// Accelerometer channel name.
pub const ACCELEROMETER_NAME: &str = "accelerometer";

/// Gyroscope channel name.
pub const GYROSCOPE_NAME: &str = "gyroscope";

/// Name for readings from any other sensor.
pub const UNKNOWN_NAME: &str = "unknown";
