//! WAV file generation result type.

use std::io::Write;
use std::path::Path;

use crate::buffer::SampleBuffer;
use crate::error::{AudioError, AudioResult};

use super::builder::WavWriter;
use super::pcm::extract_pcm_data;
use super::writer::write_atomic;

/// Result of WAV file generation.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of PCM data only.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples.
    pub num_samples: usize,
}

impl WavResult {
    /// Encodes a mono buffer.
    pub fn from_buffer(buffer: &SampleBuffer) -> AudioResult<Self> {
        let wav_data = WavWriter::mono(buffer.sample_rate()).write(buffer.samples())?;
        let pcm = extract_pcm_data(&wav_data)
            .ok_or_else(|| AudioError::malformed("encoded file has no data chunk"))?;
        let pcm_hash = blake3::hash(pcm).to_hex().to_string();

        Ok(Self {
            wav_data,
            pcm_hash,
            sample_rate: buffer.sample_rate(),
            num_samples: buffer.len(),
        })
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }

    /// Writes the encoded bytes to `path`, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> AudioResult<()> {
        write_atomic(path.as_ref(), |out| out.write_all(&self.wav_data))
    }
}
