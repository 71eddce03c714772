//! Error types for configuration and evaluation
//!
//! Classification itself never fails: missing data is the
//! [`Label::InsufficientData`](crate::Label::InsufficientData) value. Errors
//! only arise from a bad threshold configuration or from asking for the
//! accuracy of nothing.

#[cfg(feature = "std")]
use alloc::string::String;
use thiserror_no_std::Error;

/// Result type for evaluation metrics
pub type MetricsResult<T> = Result<T, MetricsError>;

/// Result type for classifier configuration
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Evaluation errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricsError {
    /// Accuracy over zero predictions is undefined
    #[error("Cannot calculate accuracy for empty results")]
    EmptyResults,
}

/// Classifier configuration errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Threshold is NaN, infinite or negative
    #[error("Invalid threshold {name}: {value}")]
    InvalidThreshold {
        /// Which threshold failed
        name: &'static str,
        /// Rejected value
        value: f64,
    },

    /// A session with no samples cannot be classified
    #[error("Minimum sample count must be at least 1")]
    ZeroMinSamples,

    /// `Up` is checked first, so `Down` must be looser on at least one feature
    #[error("Down thresholds must be below Up thresholds on at least one feature")]
    UnreachableDown,

    /// Configuration could not be read from or written to JSON
    #[cfg(feature = "std")]
    #[error("JSON error: {0}")]
    Json(String),
}
