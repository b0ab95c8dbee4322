//! WAV file writer builder pattern.

use crate::error::AudioResult;

use super::format::WavFormat;
use super::writer::write_wav_to_vec;

/// WAV file writer bound to one format.
#[derive(Debug, Clone, Copy)]
pub struct WavWriter {
    format: WavFormat,
}

impl WavWriter {
    /// Creates a writer for an explicit format.
    pub fn new(format: WavFormat) -> Self {
        Self { format }
    }

    /// Creates a new WAV writer with mono 16-bit format.
    pub fn mono(sample_rate: u32) -> Self {
        Self::new(WavFormat::mono(sample_rate))
    }

    /// The format this writer emits.
    pub fn format(&self) -> &WavFormat {
        &self.format
    }

    /// Serializes samples to a byte vector.
    pub fn write(&self, samples: &[i16]) -> AudioResult<Vec<u8>> {
        write_wav_to_vec(&self.format, samples)
    }
}
