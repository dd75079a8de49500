//! Immutable sample buffer for one audio channel
//!
//! A loaded file is decoded once into a `SampleBuffer` and never mutated
//! afterwards. Opening another file replaces the buffer wholesale.
//!
//! The samples live behind an `Arc<[f64]>` so the controller and the plot
//! scene can hold the same buffer without copying it on every render.

use std::sync::Arc;

/// Ordered amplitude values, one per time step
#[derive(Debug)]
pub struct SampleBuffer {
    samples: Arc<[f64]>,
    min: f64,
    max: f64,
}

impl SampleBuffer {
    /// Wrap decoded samples, computing the buffer-wide extrema once
    pub fn new(samples: Vec<f64>) -> Self {
        let (min, max) = extrema(&samples);
        Self {
            samples: samples.into(),
            min,
            max,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Smallest amplitude in the whole buffer (0.0 when empty)
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest amplitude in the whole buffer (0.0 when empty)
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Share the buffer without copying the samples
    pub fn clone_ref(&self) -> Self {
        Self {
            samples: Arc::clone(&self.samples),
            min: self.min,
            max: self.max,
        }
    }
}

impl Clone for SampleBuffer {
    fn clone(&self) -> Self {
        self.clone_ref()
    }
}

fn extrema(samples: &[f64]) -> (f64, f64) {
    if samples.is_empty() {
        return (0.0, 0.0);
    }
    samples
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &s| {
            (lo.min(s), hi.max(s))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extrema() {
        let buffer = SampleBuffer::new(vec![3.0, -1000.0, 900.0, 12.5]);
        assert_eq!(buffer.len(), 4);
        assert_eq!(buffer.min(), -1000.0);
        assert_eq!(buffer.max(), 900.0);
    }

    #[test]
    fn test_empty_buffer_extrema_are_zero() {
        let buffer = SampleBuffer::new(Vec::new());
        assert!(buffer.is_empty());
        assert_eq!(buffer.min(), 0.0);
        assert_eq!(buffer.max(), 0.0);
    }

    #[test]
    fn test_clone_ref_shares_samples() {
        let buffer = SampleBuffer::new(vec![1.0, 2.0, 3.0]);
        let shared = buffer.clone_ref();
        assert!(std::ptr::eq(buffer.samples(), shared.samples()));
        assert_eq!(shared.max(), 3.0);
    }
}
