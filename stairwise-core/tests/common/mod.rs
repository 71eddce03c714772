//! Shared generators for integration tests
//!
//! Produces interleaved accelerometer/gyroscope recordings the way a phone
//! delivers them: both sensors at a fixed period, gyroscope offset by half a
//! period so timestamps never collide.

#![allow(dead_code)]

use stairwise_core::{Channel, FixedTime, Sample, SampleRecorder};

/// Gravity along z for a phone held upright in a pocket
pub const GRAVITY: f32 = 9.8;

/// Build a recording of `pairs` accel/gyro samples
///
/// `bounce` is the amplitude of the z oscillation, `rotation` the gyroscope
/// x component.
pub fn walking_session(pairs: usize, period_ms: i64, bounce: f32, rotation: f32) -> Vec<Sample> {
    let mut clock = FixedTime::new(1_700_000_000_000);
    let mut recorder = SampleRecorder::with_capacity(pairs * 2);

    for i in 0..pairs {
        let z = if i % 2 == 0 { GRAVITY + bounce } else { GRAVITY - bounce };
        recorder.record_now(0.0, 0.0, z, Channel::Accelerometer, &clock);
        clock.advance(period_ms / 2);
        recorder.record_now(rotation, 0.0, 0.0, Channel::Gyroscope, &clock);
        clock.advance(period_ms - period_ms / 2);
    }

    recorder.snapshot()
}

/// First timestamp of a recording
pub fn start_of(samples: &[Sample]) -> i64 {
    samples.first().map(Sample::timestamp).unwrap_or_default()
}

/// Assert two floats agree to within `eps`
pub fn assert_close(actual: f64, expected: f64, eps: f64) {
    assert!(
        (actual - expected).abs() <= eps,
        "expected {} within {} of {}",
        actual,
        eps,
        expected
    );
}

/// Timestamps strictly increase in recording order
pub fn is_time_ordered(samples: &[Sample]) -> bool {
    samples.windows(2).all(|w| w[0].timestamp() < w[1].timestamp())
}

