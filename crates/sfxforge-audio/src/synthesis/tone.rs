//! Steady sine tone.

use std::f64::consts::PI;

use crate::buffer::SampleBuffer;
use crate::error::AudioResult;

use super::{quantize, sample_count, validate_common, validate_frequency};

/// Generates a sine tone at a fixed frequency.
///
/// No envelope is applied. Short tones played back to back may click at
/// their boundaries.
///
/// # Arguments
/// * `frequency` - Tone frequency in Hz
/// * `duration` - Duration in seconds
/// * `sample_rate` - Sample rate in Hz
/// * `amplitude` - Peak level as a fraction of full scale, in (0, 1]
pub fn generate_tone(
    frequency: f64,
    duration: f64,
    sample_rate: u32,
    amplitude: f64,
) -> AudioResult<SampleBuffer> {
    validate_common(duration, sample_rate, amplitude)?;
    validate_frequency(frequency)?;

    let num_samples = sample_count(duration, sample_rate);
    let rate = sample_rate as f64;

    let samples = (0..num_samples)
        .map(|i| {
            let phase = 2.0 * PI * frequency * i as f64 / rate;
            quantize(amplitude * phase.sin())
        })
        .collect();

    Ok(SampleBuffer::new(samples, sample_rate))
}
