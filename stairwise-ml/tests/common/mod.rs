//! Session generators for classifier tests
//!
//! Each generator returns an interleaved accel/gyro recording whose
//! features land clearly inside one decision region.

#![allow(dead_code)]

use stairwise_core::{Channel, Sample};
use stairwise_ml::Label;

/// Sensor period in milliseconds
pub const PERIOD_MS: i64 = 20;

/// `pairs` accel samples with z alternating `9.8 ± bounce`, interleaved
/// with gyro samples of magnitude `rotation`
pub fn session(pairs: usize, bounce: f32, rotation: f32) -> Vec<Sample> {
    let mut samples = Vec::with_capacity(pairs * 2);
    for i in 0..pairs {
        let t = i as i64 * PERIOD_MS;
        let z = if i % 2 == 0 { 9.8 + bounce } else { 9.8 - bounce };
        samples.push(Sample::new(0.0, 0.0, z, Channel::Accelerometer, t));
        // 3-4-5 split keeps the magnitude exact
        samples.push(Sample::new(
            rotation * 0.6,
            rotation * 0.8,
            0.0,
            Channel::Gyroscope,
            t + PERIOD_MS / 2,
        ));
    }
    samples
}

/// Session whose features fall well inside the region for `label`
pub fn session_for(label: Label, pairs: usize) -> Vec<Sample> {
    match label {
        Label::Up => session(pairs, 2.4, 2.0),
        Label::Down => session(pairs, 1.5, 1.25),
        Label::Straight => session(pairs, 0.4, 0.2),
        Label::InsufficientData => session(pairs.min(5), 0.0, 0.0),
    }
}
