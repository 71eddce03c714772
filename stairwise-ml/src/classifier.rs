//! Movement classifier
//!
//! Stateless: every call gets a full snapshot of the session and returns a
//! label computed from it alone. Calling twice on the same samples always
//! gives the same answer.
//!
//! ```text
//! samples ──len < min_samples──────────────────▶ InsufficientData
//!    │
//!    ▼
//! MovementFeatures::extract ──missing sensor───▶ InsufficientData
//!    │
//!    ▼
//! up.exceeded_by?   ──yes──▶ Up
//! down.exceeded_by? ──yes──▶ Down
//! otherwise         ───────▶ Straight
//! ```

use crate::config::ClassifierConfig;
use crate::errors::ConfigResult;
use crate::features::MovementFeatures;
use crate::label::Label;
use alloc::vec::Vec;
use stairwise_core::{compute_stats, Channel, ChannelStats, Sample};

/// Rule-based walking movement classifier
#[derive(Debug, Clone, Default)]
pub struct MotionClassifier {
    config: ClassifierConfig,
}

/// Everything an analysis screen shows for one session
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Analysis {
    /// Predicted label
    pub label: Label,
    /// Features the label was decided from, if the session had both sensors
    pub features: Option<MovementFeatures>,
    /// Statistics of accelerometer z
    pub accelerometer_z: ChannelStats,
    /// Statistics of gyroscope magnitude
    pub gyroscope_magnitude: ChannelStats,
}

impl MotionClassifier {
    /// Create a classifier with a validated configuration
    pub fn new(config: ClassifierConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Features of a session that meets the sample minimum
    pub fn features(&self, samples: &[Sample]) -> Option<MovementFeatures> {
        if samples.len() < self.config.min_samples {
            log_warn!(
                "Insufficient data: need {} samples, have {}",
                self.config.min_samples,
                samples.len()
            );
            return None;
        }

        let features = MovementFeatures::extract(samples);
        if features.is_none() {
            log_warn!("Insufficient data: a sensor is missing or produced non-finite readings");
        }
        features
    }

    /// Classify a session
    pub fn classify(&self, samples: &[Sample]) -> Label {
        match self.features(samples) {
            Some(features) => self.decide(&features),
            None => Label::InsufficientData,
        }
    }

    /// Apply the ordered decision policy to precomputed features
    pub fn decide(&self, features: &MovementFeatures) -> Label {
        let label = if self.config.up.exceeded_by(features) {
            Label::Up
        } else if self.config.down.exceeded_by(features) {
            Label::Down
        } else {
            Label::Straight
        };

        log_debug!(
            "std_dev_z={:.3} avg_gyro={:.3} -> {}",
            features.std_dev_z,
            features.avg_gyro_magnitude,
            label
        );
        label
    }

    /// Classify and compute the per-sensor statistics shown alongside
    pub fn analyze(&self, samples: &[Sample]) -> Analysis {
        let features = self.features(samples);
        let label = match &features {
            Some(f) => self.decide(f),
            None => Label::InsufficientData,
        };

        let z_values: Vec<f64> = samples
            .iter()
            .filter(|s| s.is(Channel::Accelerometer))
            .map(|s| s.z() as f64)
            .collect();
        let magnitudes: Vec<f64> = samples
            .iter()
            .filter(|s| s.is(Channel::Gyroscope))
            .map(Sample::magnitude)
            .collect();

        Analysis {
            label,
            features,
            accelerometer_z: compute_stats(&z_values),
            gyroscope_magnitude: compute_stats(&magnitudes),
        }
    }
}

/// Classify with the default thresholds
pub fn classify(samples: &[Sample]) -> Label {
    MotionClassifier::default().classify(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Threshold;

    /// `n` accel samples with z alternating `9.8 ± swing`, and `n` gyro
    /// samples of magnitude `gyro`
    fn session(n: usize, swing: f32, gyro: f32) -> Vec<Sample> {
        let mut samples = Vec::with_capacity(n * 2);
        for i in 0..n {
            let t = i as i64 * 40;
            let z = if i % 2 == 0 { 9.8 + swing } else { 9.8 - swing };
            samples.push(Sample::new(0.0, 0.0, z, Channel::Accelerometer, t));
            samples.push(Sample::new(gyro, 0.0, 0.0, Channel::Gyroscope, t + 20));
        }
        samples
    }

    #[test]
    fn decision_policy() {
        let classifier = MotionClassifier::default();
        // Alternating ±swing over an even count: std-dev == swing
        assert_eq!(classifier.classify(&session(20, 2.0, 2.0)), Label::Up);
        assert_eq!(classifier.classify(&session(20, 1.5, 1.2)), Label::Down);
        assert_eq!(classifier.classify(&session(20, 0.3, 0.05)), Label::Straight);
    }

    #[test]
    fn up_needs_both_features() {
        let classifier = MotionClassifier::default();
        // Large bounce but moderate rotation falls through to Down
        assert_eq!(classifier.classify(&session(20, 2.5, 1.2)), Label::Down);
        // Large rotation but little bounce is level walking
        assert_eq!(classifier.classify(&session(20, 0.5, 3.0)), Label::Straight);
    }

    #[test]
    fn minimum_sample_boundary() {
        let classifier = MotionClassifier::default();
        let samples = session(11, 2.0, 2.0);

        assert_eq!(classifier.classify(&samples[..19]), Label::InsufficientData);
        assert_ne!(classifier.classify(&samples[..20]), Label::InsufficientData);
        assert_ne!(classifier.classify(&samples[..21]), Label::InsufficientData);
    }

    #[test]
    fn missing_gyroscope_is_insufficient() {
        let samples: Vec<Sample> = (0..30)
            .map(|i| Sample::new(0.0, 0.0, 9.8, Channel::Accelerometer, i))
            .collect();
        assert_eq!(classify(&samples), Label::InsufficientData);
    }

    #[test]
    fn nan_reading_is_insufficient_not_straight() {
        let mut samples = session(25, 0.0, 2.0);
        samples[10] = Sample::new(0.0, 0.0, f32::NAN, Channel::Accelerometer, 200);

        let analysis = MotionClassifier::default().analyze(&samples);
        assert_eq!(analysis.label, Label::InsufficientData);
        assert!(analysis.features.is_none());

        let z = analysis.accelerometer_z;
        assert!(z.mean.is_finite() && z.std_dev.is_finite());
        assert!(z.min <= z.mean && z.mean <= z.max);
    }

    #[test]
    fn custom_thresholds() {
        let config = ClassifierConfig {
            min_samples: 4,
            up: Threshold::new(0.3, 0.045),
            down: Threshold::new(0.22, 0.035),
        };
        let classifier = MotionClassifier::new(config).unwrap();

        assert_eq!(classifier.classify(&session(2, 0.4, 0.05)), Label::Up);
        assert_eq!(classifier.classify(&session(2, 0.25, 0.04)), Label::Down);
        assert_eq!(classifier.classify(&session(1, 0.4, 0.05)), Label::InsufficientData);
    }

    #[test]
    fn invalid_config_rejected() {
        let config = ClassifierConfig { min_samples: 0, ..Default::default() };
        assert!(MotionClassifier::new(config).is_err());
    }

    #[test]
    fn analyze_reports_stats_even_without_label() {
        let classifier = MotionClassifier::default();
        let samples = session(6, 1.0, 0.5);

        let analysis = classifier.analyze(&samples);
        assert_eq!(analysis.label, Label::InsufficientData);
        assert!(analysis.features.is_none());
        assert!((analysis.accelerometer_z.mean - 9.8).abs() < 1e-3);
        assert!((analysis.gyroscope_magnitude.max - 0.5).abs() < 1e-6);
    }

    #[test]
    fn analyze_matches_classify() {
        let classifier = MotionClassifier::default();
        let samples = session(30, 2.0, 2.0);

        let analysis = classifier.analyze(&samples);
        assert_eq!(analysis.label, classifier.classify(&samples));
        assert_eq!(analysis.features.map(|f| f.gyroscope_count), Some(30));
    }
}
