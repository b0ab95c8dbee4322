//! PCM data extraction, decoding and hashing utilities.

use std::fs;
use std::path::Path;

use crate::error::{AudioError, AudioResult};

use super::format::WavFormat;

/// A decoded PCM16 WAV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedWav {
    /// Format read from the `fmt ` chunk.
    pub format: WavFormat,
    /// Interleaved samples from the `data` chunk.
    pub samples: Vec<i16>,
}

impl DecodedWav {
    /// Number of sample frames.
    pub fn num_frames(&self) -> usize {
        self.samples.len() / self.format.channels.max(1) as usize
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.format.sample_rate == 0 {
            return 0.0;
        }
        self.num_frames() as f64 / self.format.sample_rate as f64
    }
}

/// Iterates over the chunks after the `RIFF....WAVE` preamble.
fn chunks(wav_data: &[u8]) -> impl Iterator<Item = (&[u8], &[u8])> {
    let mut pos = 12;
    std::iter::from_fn(move || {
        if pos + 8 > wav_data.len() {
            return None;
        }
        let chunk_id = &wav_data[pos..pos + 4];
        let chunk_size = u32::from_le_bytes([
            wav_data[pos + 4],
            wav_data[pos + 5],
            wav_data[pos + 6],
            wav_data[pos + 7],
        ]) as usize;

        let data_start = pos + 8;
        let data_end = data_start.checked_add(chunk_size)?;
        if data_end > wav_data.len() {
            return None;
        }

        pos = data_end;
        // Align to word boundary
        if chunk_size % 2 != 0 {
            pos += 1;
        }
        Some((chunk_id, &wav_data[data_start..data_end]))
    })
}

fn has_riff_header(wav_data: &[u8]) -> bool {
    wav_data.len() >= 12 && &wav_data[0..4] == b"RIFF" && &wav_data[8..12] == b"WAVE"
}

/// Extracts PCM data from a WAV file buffer.
///
/// Used for comparing WAV files by their audio content only.
///
/// # Returns
/// PCM data if found, or None if the format is invalid
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if !has_riff_header(wav_data) {
        return None;
    }
    chunks(wav_data).find(|(id, _)| *id == b"data").map(|(_, body)| body)
}

/// Computes the PCM hash of a WAV file.
///
/// # Returns
/// BLAKE3 hash of PCM data, or None if format is invalid
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(|pcm| blake3::hash(pcm).to_hex().to_string())
}

/// Decodes a 16-bit PCM WAV file from bytes.
pub fn read_wav(wav_data: &[u8]) -> AudioResult<DecodedWav> {
    if !has_riff_header(wav_data) {
        return Err(AudioError::malformed("missing RIFF/WAVE header"));
    }

    let mut format = None;
    let mut data = None;
    for (id, body) in chunks(wav_data) {
        match id {
            b"fmt " => format = Some(parse_fmt(body)?),
            b"data" => data = Some(body),
            _ => {}
        }
    }

    let format = format.ok_or_else(|| AudioError::malformed("missing fmt chunk"))?;
    let data = data.ok_or_else(|| AudioError::malformed("missing data chunk"))?;
    if format.bits_per_sample != 16 {
        return Err(AudioError::UnsupportedSampleWidth {
            bytes: format.sample_width_bytes(),
        });
    }
    if data.len() % 2 != 0 {
        return Err(AudioError::malformed("data chunk has an odd byte count"));
    }

    let samples = data
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect();

    Ok(DecodedWav { format, samples })
}

/// Reads and decodes a 16-bit PCM WAV file from disk.
pub fn read_wav_file(path: impl AsRef<Path>) -> AudioResult<DecodedWav> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| AudioError::io(path, e))?;
    read_wav(&bytes)
}

fn parse_fmt(body: &[u8]) -> AudioResult<WavFormat> {
    if body.len() < 16 {
        return Err(AudioError::malformed("fmt chunk shorter than 16 bytes"));
    }
    let u16_at = |i: usize| u16::from_le_bytes([body[i], body[i + 1]]);
    let u32_at = |i: usize| u32::from_le_bytes([body[i], body[i + 1], body[i + 2], body[i + 3]]);

    let audio_format = u16_at(0);
    if audio_format != 1 {
        return Err(AudioError::malformed(format!(
            "audio format {} is not linear PCM",
            audio_format
        )));
    }

    Ok(WavFormat {
        channels: u16_at(2),
        sample_rate: u32_at(4),
        bits_per_sample: u16_at(14),
    })
}
