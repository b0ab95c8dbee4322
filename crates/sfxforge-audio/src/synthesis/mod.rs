//! Waveform synthesis.
//!
//! Each module renders one kind of signal straight into a quantized
//! [`SampleBuffer`]:
//! - `tone` - Steady sine tone, no envelope
//! - `sweep` - Linear frequency sweep with 1% fades
//! - `noise` - Uniform white noise burst with a percussive envelope
//!
//! Every raw value is `amplitude * envelope(i) * waveform(i)`, scaled to full
//! 16-bit scale and truncated toward zero.

pub mod noise;
pub mod sweep;
pub mod tone;

pub use noise::generate_noise_burst;
pub use sweep::{generate_sweep, sweep_frequency_at};
pub use tone::generate_tone;

use crate::error::{AudioError, AudioResult};

/// Full-scale multiplier for 16-bit output.
pub const FULL_SCALE: f64 = 32767.0;

/// Quantizes a normalized value to a 16-bit sample.
///
/// The value is scaled by [`FULL_SCALE`], clamped to the `i16` range and
/// truncated toward zero.
pub fn quantize(value: f64) -> i16 {
    (value * FULL_SCALE)
        .clamp(i16::MIN as f64, i16::MAX as f64)
        .trunc() as i16
}

/// Number of samples covering `duration` seconds: `round(duration * sample_rate)`.
pub fn sample_count(duration: f64, sample_rate: u32) -> usize {
    (duration * sample_rate as f64).round() as usize
}

/// Checks the parameters shared by every generator.
///
/// A zero duration is accepted and yields an empty buffer; the writer refuses
/// to serialize it.
pub(crate) fn validate_common(duration: f64, sample_rate: u32, amplitude: f64) -> AudioResult<()> {
    if !duration.is_finite() || duration < 0.0 {
        return Err(AudioError::InvalidDuration { duration });
    }
    if sample_rate == 0 {
        return Err(AudioError::InvalidSampleRate { rate: sample_rate });
    }
    if !(amplitude > 0.0 && amplitude <= 1.0) {
        return Err(AudioError::InvalidAmplitude { amplitude });
    }
    Ok(())
}

pub(crate) fn validate_frequency(freq: f64) -> AudioResult<()> {
    if !freq.is_finite() || freq <= 0.0 {
        return Err(AudioError::InvalidFrequency { freq });
    }
    Ok(())
}
