//! Rule-Based Movement Classification for Walking Sessions
//!
//! ## Overview
//!
//! This crate turns a recorded accelerometer/gyroscope session into one of
//! three walking labels, and scores predicted labels against ground truth.
//! There is no training step: the classifier is a pair of fixed thresholds
//! over two summary features.
//!
//! ## Features
//!
//! From a session we compute:
//! ```text
//! std_dev_z          = population std-dev of accelerometer z
//! avg_gyro_magnitude = mean of sqrt(x² + y² + z²) over gyroscope samples
//! ```
//!
//! Vertical bounce (z spread) and body rotation (gyro magnitude) are both
//! larger on stairs than on level ground, and larger going up than down.
//!
//! ## Decision Policy
//!
//! Ordered, first match wins:
//! ```text
//! std_dev_z > 1.8 AND avg_gyro > 1.5  →  Up
//! std_dev_z > 1.2 AND avg_gyro > 1.0  →  Down
//! otherwise                           →  Straight
//! ```
//! Fewer than 20 samples, or a session missing either sensor, gives
//! `InsufficientData` instead of a movement label.
//!
//! The thresholds are empirical. There is no smoothing or outlier rejection,
//! so a single spike can move `std_dev_z` far enough to flip the label.
//!
//! ## Usage
//!
//! ```rust
//! use stairwise_core::{Channel, Sample};
//! use stairwise_ml::{calculate_accuracy, Label, MotionClassifier, PredictionResult};
//!
//! let mut samples = Vec::new();
//! for i in 0..25 {
//!     samples.push(Sample::new(0.0, 0.0, 9.8, Channel::Accelerometer, i * 40));
//!     samples.push(Sample::new(0.01, 0.0, 0.0, Channel::Gyroscope, i * 40 + 20));
//! }
//!
//! let classifier = MotionClassifier::default();
//! let predicted = classifier.classify(&samples);
//! assert_eq!(predicted, Label::Straight);
//!
//! let results = [PredictionResult::new(Label::Straight, predicted)];
//! assert_eq!(calculate_accuracy(&results), Ok(1.0));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

#[macro_use]
mod macros;

pub mod classifier;
pub mod config;
pub mod errors;
pub mod features;
pub mod hypothesis;
pub mod label;
pub mod metrics;

pub use classifier::{classify, Analysis, MotionClassifier};
pub use config::{ClassifierConfig, Threshold};
pub use errors::{ConfigError, ConfigResult, MetricsError, MetricsResult};
pub use features::MovementFeatures;
pub use hypothesis::Hypothesis;
pub use label::{Label, Language};
pub use metrics::{
    calculate_accuracy, calculate_confusion_matrix, calculate_precision,
    ClassificationReport, ConfusionMatrix, PredictionResult,
};

/// Minimum total samples (any channel) before a session is classified
pub const DEFAULT_MIN_SAMPLES: usize = 20;

/// Accelerometer z std-dev above which a session can be `Up`
pub const UP_STD_DEV_Z: f64 = 1.8;

/// Mean gyroscope magnitude above which a session can be `Up`
pub const UP_AVG_GYRO_MAGNITUDE: f64 = 1.5;

/// Accelerometer z std-dev above which a session can be `Down`
pub const DOWN_STD_DEV_Z: f64 = 1.2;

/// Mean gyroscope magnitude above which a session can be `Down`
pub const DOWN_AVG_GYRO_MAGNITUDE: f64 = 1.0;
