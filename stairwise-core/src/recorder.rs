//! Append-Only Sample Recorder
//!
//! ## Overview
//!
//! The recorder is the buffer the sensor callback appends to while a
//! session is being captured. It has exactly three kinds of mutation:
//!
//! - **Append**: a new reading goes to the end
//! - **Clear**: the whole recording is discarded on reset
//! - nothing else; samples are never edited, removed or reordered
//!
//! Insertion order is the time axis. Charts plot by index and the
//! classifier scans in order, so the recorder never sorts by timestamp even
//! when the source delivers slightly out of order.
//!
//! ## Handing Off to Analysis
//!
//! Classification assumes nobody mutates the sequence while it scans.
//! Analysis therefore works on a [`SampleRecorder::snapshot`], an owned copy
//! taken at request time:
//!
//! ```text
//! sensor thread ──record()──▶ SharedRecorder ──snapshot()──▶ classifier
//!                             (Arc<Mutex<..>>)    Vec<Sample>
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use stairwise_core::{Channel, FixedTime, Sample, SampleRecorder};
//!
//! let mut recorder = SampleRecorder::new();
//! let clock = FixedTime::new(1_000);
//!
//! recorder.record(Sample::new(0.1, 0.2, 9.8, Channel::Accelerometer, 990));
//! recorder.record_now(0.01, 0.02, 0.00, Channel::Gyroscope, &clock);
//!
//! let snapshot = recorder.snapshot();
//! assert_eq!(snapshot.len(), 2);
//! assert_eq!(snapshot[1].timestamp(), 1_000);
//!
//! recorder.clear();
//! assert!(recorder.is_empty());
//! assert_eq!(snapshot.len(), 2); // the snapshot is unaffected
//! ```

use crate::errors::SampleResult;
use crate::sample::{Channel, Sample};
use crate::time::TimeSource;
use alloc::vec::Vec;

/// Growable, append-only buffer of samples in arrival order
#[derive(Debug, Clone, Default)]
pub struct SampleRecorder {
    samples: Vec<Sample>,
}

impl SampleRecorder {
    /// Creates an empty recorder
    pub const fn new() -> Self {
        Self { samples: Vec::new() }
    }

    /// Creates an empty recorder with room for `capacity` samples
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
        }
    }

    /// Append a sample
    pub fn record(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    /// Append a sample only if every component is finite
    ///
    /// A rejected reading is dropped and the error returned; the recording
    /// is left as it was.
    pub fn try_record(&mut self, sample: Sample) -> SampleResult<()> {
        if let Err(e) = sample.validate() {
            log_warn!(
                "Dropping {} sample at t={}: {}",
                sample.channel(),
                sample.timestamp(),
                e
            );
            return Err(e);
        }
        self.record(sample);
        Ok(())
    }

    /// Append a reading stamped with the current time of `clock`
    pub fn record_now<T: TimeSource>(
        &mut self,
        x: f32,
        y: f32,
        z: f32,
        channel: Channel,
        clock: &T,
    ) {
        self.record(Sample::new(x, y, z, channel, clock.now()));
    }

    /// Discard the whole recording
    pub fn clear(&mut self) {
        log_debug!("Clearing recording of {} samples", self.samples.len());
        self.samples.clear();
    }

    /// Owned copy of the recording for analysis
    pub fn snapshot(&self) -> Vec<Sample> {
        self.samples.clone()
    }

    /// Borrow the recording in arrival order
    pub fn as_slice(&self) -> &[Sample] {
        &self.samples
    }

    /// Get number of recorded samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Get the most recent sample
    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    /// Iterate over the samples of one channel, in arrival order
    pub fn channel(&self, channel: Channel) -> impl Iterator<Item = &Sample> + '_ {
        self.samples.iter().filter(move |s| s.is(channel))
    }

    /// Count samples of one channel
    pub fn count(&self, channel: Channel) -> usize {
        self.channel(channel).count()
    }
}

impl Extend<Sample> for SampleRecorder {
    fn extend<I: IntoIterator<Item = Sample>>(&mut self, iter: I) {
        self.samples.extend(iter);
    }
}

impl FromIterator<Sample> for SampleRecorder {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}

/// Recorder shared between the sensor callback thread and the analysis side
///
/// Cloning is cheap and every clone refers to the same recording.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Default)]
pub struct SharedRecorder {
    inner: std::sync::Arc<std::sync::Mutex<SampleRecorder>>,
}

#[cfg(feature = "std")]
impl SharedRecorder {
    /// Creates an empty shared recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sample
    pub fn record(&self, sample: Sample) {
        self.lock().record(sample);
    }

    /// Append a sample only if every component is finite
    pub fn try_record(&self, sample: Sample) -> SampleResult<()> {
        self.lock().try_record(sample)
    }

    /// Append a reading stamped with the current time of `clock`
    ///
    /// This is what a sensor callback calls on every delivery:
    ///
    /// ```rust
    /// use stairwise_core::time::SystemTime;
    /// use stairwise_core::{Channel, SharedRecorder};
    ///
    /// let recorder = SharedRecorder::new();
    /// let callback = {
    ///     let recorder = recorder.clone();
    ///     move |x: f32, y: f32, z: f32| {
    ///         recorder.record_now(x, y, z, Channel::Accelerometer, &SystemTime)
    ///     }
    /// };
    ///
    /// callback(0.1, 0.2, 9.8);
    /// let snapshot = recorder.snapshot();
    /// assert_eq!(snapshot.len(), 1);
    /// assert!(snapshot[0].timestamp() > 1_577_836_800_000);
    /// ```
    pub fn record_now<T: TimeSource>(&self, x: f32, y: f32, z: f32, channel: Channel, clock: &T) {
        self.lock().record_now(x, y, z, channel, clock);
    }

    /// Discard the whole recording
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Owned copy of the recording, taken under the lock
    pub fn snapshot(&self) -> Vec<Sample> {
        self.lock().snapshot()
    }

    /// Get number of recorded samples
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // The recording is append-only, so a writer that panicked mid-call
    // cannot have left it half-edited.
    fn lock(&self) -> std::sync::MutexGuard<'_, SampleRecorder> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            log_warn!("Recorder lock poisoned, recovering recording");
            poisoned.into_inner()
        })
    }
}
