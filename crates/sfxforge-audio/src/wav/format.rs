//! WAV file format parameters.

use crate::error::{AudioError, AudioResult};

/// WAV file format parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Number of channels (1 = mono).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (only 16 can be written).
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Creates a format from a channel count, a sample width in bytes and a
    /// sample rate.
    pub fn new(channels: u16, sample_width_bytes: u16, sample_rate: u32) -> Self {
        Self {
            channels,
            sample_rate,
            bits_per_sample: sample_width_bytes.saturating_mul(8),
        }
    }

    /// Creates a mono 16-bit format.
    pub fn mono(sample_rate: u32) -> Self {
        Self::new(1, 2, sample_rate)
    }

    /// Sample width in bytes (per channel).
    pub fn sample_width_bytes(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Calculates block align (bytes per sample frame).
    ///
    /// Saturates on formats that [`validate`](Self::validate) rejects.
    pub fn block_align(&self) -> u16 {
        self.channels.saturating_mul(self.sample_width_bytes())
    }

    /// Calculates byte rate (bytes per second).
    ///
    /// Saturates on formats that [`validate`](Self::validate) rejects.
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate.saturating_mul(self.block_align() as u32)
    }

    /// Checks that the writer can encode this format.
    pub fn validate(&self) -> AudioResult<()> {
        if self.sample_rate == 0 {
            return Err(AudioError::InvalidSampleRate {
                rate: self.sample_rate,
            });
        }
        if self.bits_per_sample != 16 {
            return Err(AudioError::UnsupportedSampleWidth {
                bytes: self.sample_width_bytes(),
            });
        }
        let block_align = self
            .channels
            .checked_mul(self.sample_width_bytes())
            .filter(|&align| align > 0)
            .ok_or(AudioError::InvalidChannelCount {
                channels: self.channels,
                num_samples: 0,
            })?;
        if self.sample_rate.checked_mul(block_align as u32).is_none() {
            return Err(AudioError::InvalidSampleRate {
                rate: self.sample_rate,
            });
        }
        Ok(())
    }
}
