//! Quantized mono sample buffers.

use crate::error::{AudioError, AudioResult};

/// A finished sequence of 16-bit samples at a fixed sample rate.
///
/// Sample `i` sits at time `i / sample_rate` seconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleBuffer {
    samples: Vec<i16>,
    sample_rate: u32,
}

impl SampleBuffer {
    /// Wraps already-quantized samples.
    pub fn new(samples: Vec<i16>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// The samples, in time order.
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Largest absolute sample value.
    pub fn peak(&self) -> u16 {
        self.samples
            .iter()
            .map(|s| s.unsigned_abs())
            .max()
            .unwrap_or(0)
    }

    /// Appends another buffer recorded at the same sample rate.
    pub fn append(&mut self, other: SampleBuffer) -> AudioResult<()> {
        if other.sample_rate != self.sample_rate {
            return Err(AudioError::SampleRateMismatch {
                expected: self.sample_rate,
                found: other.sample_rate,
            });
        }
        self.samples.extend(other.samples);
        Ok(())
    }

    /// Concatenates buffers end to end.
    ///
    /// All buffers must share the sample rate of the first one.
    pub fn concat(buffers: impl IntoIterator<Item = SampleBuffer>) -> AudioResult<Self> {
        let mut iter = buffers.into_iter();
        let Some(mut out) = iter.next() else {
            return Err(AudioError::EmptyBuffer);
        };
        for buffer in iter {
            out.append(buffer)?;
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration() {
        let buffer = SampleBuffer::new(vec![0; 4410], 44100);
        assert!((buffer.duration_seconds() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_append_same_rate() {
        let mut a = SampleBuffer::new(vec![1, 2], 22050);
        a.append(SampleBuffer::new(vec![3], 22050)).unwrap();
        assert_eq!(a.samples(), &[1, 2, 3]);
    }

    #[test]
    fn test_append_rate_mismatch() {
        let mut a = SampleBuffer::new(vec![1, 2], 22050);
        let err = a.append(SampleBuffer::new(vec![3], 44100)).unwrap_err();
        assert!(matches!(
            err,
            AudioError::SampleRateMismatch {
                expected: 22050,
                found: 44100
            }
        ));
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn test_concat_empty_list() {
        assert!(matches!(
            SampleBuffer::concat(Vec::new()),
            Err(AudioError::EmptyBuffer)
        ));
    }

    #[test]
    fn test_peak_handles_min_value() {
        let buffer = SampleBuffer::new(vec![-32768, 100, 32767], 8000);
        assert_eq!(buffer.peak(), 32768);
    }
}
