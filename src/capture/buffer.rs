//! Sample buffer for the curve being drawn
//!
//! The buffer only accepts samples between `begin()` and `freeze()`.
//! Samples arriving outside a drawing session are dropped, which is the
//! only guard needed against stray pointer motion.

use thiserror::Error;

use crate::fourier::Point;

/// Fewest samples a transform can be computed from
pub const MIN_SAMPLES: usize = 2;

/// Errors that can occur when closing a drawing session
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CaptureError {
    #[error("Drawing has {got} point(s), at least 2 are needed")]
    TooFewPoints { got: usize },

    #[error("No drawing session in progress")]
    NotCapturing,
}

/// Ordered samples of the curve, relative to the drawing origin
///
/// Insertion order defines the traversal order of the curve.
#[derive(Debug, Default)]
pub struct SampleBuffer {
    samples: Vec<Point>,
    capturing: bool,
}

impl SampleBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new drawing session, discarding previous samples
    pub fn begin(&mut self) {
        self.samples.clear();
        self.capturing = true;
    }

    /// Append a sample if a session is active
    ///
    /// # Returns
    /// `true` if the sample was recorded
    pub fn push(&mut self, sample: Point) -> bool {
        if !self.capturing {
            return false;
        }
        self.samples.push(sample);
        true
    }

    /// End the drawing session
    ///
    /// The samples stay readable afterwards but no more can be added.
    ///
    /// # Returns
    /// The frozen samples, or an error if there are too few to transform
    pub fn freeze(&mut self) -> Result<&[Point], CaptureError> {
        if !self.capturing {
            return Err(CaptureError::NotCapturing);
        }
        self.capturing = false;

        if self.samples.len() < MIN_SAMPLES {
            return Err(CaptureError::TooFewPoints {
                got: self.samples.len(),
            });
        }
        Ok(&self.samples)
    }

    /// Drop all samples and leave the capturing state
    pub fn clear(&mut self) {
        self.samples.clear();
        self.capturing = false;
    }

    pub fn is_capturing(&self) -> bool {
        self.capturing
    }

    pub fn samples(&self) -> &[Point] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
