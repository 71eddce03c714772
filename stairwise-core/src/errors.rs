//! Error Types for Sample Ingestion
//!
//! ## Design Philosophy
//!
//! Most of Stairwise never fails: statistics over an empty slice are zero,
//! and a classifier that lacks data says so with a label value instead of an
//! error. The one place a hard error is useful is at the ingestion edge,
//! where a reading that is not a number would otherwise travel all the way
//! into a mean and come back out as NaN.
//!
//! Errors follow the same rules as the rest of the crate:
//!
//! 1. **Small Size**: variants carry only `Copy` data.
//! 2. **No Heap Allocation**: messages are `&'static str` or formatted on demand.
//! 3. **Actionable**: each variant names the axis or field at fault.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use stairwise_core::{Channel, Sample, SampleError};
//!
//! match Sample::checked(0.0, f32::NAN, 9.8, Channel::Accelerometer, 0) {
//!     Ok(_sample) => {
//!         // record it
//!     }
//!     Err(SampleError::InvalidValue { axis }) => {
//!         // drop the reading, the sensor glitched on `axis`
//!         let _ = axis;
//!     }
//! }
//! ```

use crate::sample::Axis;
use thiserror_no_std::Error;

/// Result type for sample construction
pub type SampleResult<T> = Result<T, SampleError>;

/// Sample construction errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleError {
    /// Component is NaN or infinite
    #[error("Invalid value on {axis} axis: not a finite number")]
    InvalidValue {
        /// Axis carrying the bad component
        axis: Axis,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_axis() {
        let err = SampleError::InvalidValue { axis: Axis::Y };
        assert_eq!(
            alloc::format!("{}", err),
            "Invalid value on y axis: not a finite number"
        );
    }
}
