//! Linear frequency sweep.
//!
//! The phase at time `t` is taken as `2π · f(t) · t`, where `f(t)` is the
//! linearly interpolated frequency. This is not the integral of frequency
//! over time, so the perceived pitch overshoots the nominal sweep; output
//! must stay bit-exact with this formula.

use std::f64::consts::PI;

use crate::buffer::SampleBuffer;
use crate::envelope::RampEnvelope;
use crate::error::AudioResult;

use super::{quantize, sample_count, validate_common, validate_frequency};

/// Instantaneous frequency of a sweep at `index`.
pub fn sweep_frequency_at(
    start_frequency: f64,
    end_frequency: f64,
    duration: f64,
    sample_rate: u32,
    index: usize,
) -> f64 {
    let t = index as f64 / sample_rate as f64;
    if duration <= 0.0 {
        return start_frequency;
    }
    start_frequency + (end_frequency - start_frequency) * (t / duration)
}

/// Generates a linear sweep from `start_frequency` to `end_frequency`.
///
/// A 1% ramp at each end forces the first and last samples to zero.
///
/// # Arguments
/// * `start_frequency` - Frequency at t = 0, in Hz
/// * `end_frequency` - Frequency at t = duration, in Hz
/// * `duration` - Duration in seconds
/// * `sample_rate` - Sample rate in Hz
/// * `amplitude` - Peak level as a fraction of full scale, in (0, 1]
pub fn generate_sweep(
    start_frequency: f64,
    end_frequency: f64,
    duration: f64,
    sample_rate: u32,
    amplitude: f64,
) -> AudioResult<SampleBuffer> {
    validate_common(duration, sample_rate, amplitude)?;
    validate_frequency(start_frequency)?;
    validate_frequency(end_frequency)?;

    let num_samples = sample_count(duration, sample_rate);
    let envelope = RampEnvelope::sweep();
    let rate = sample_rate as f64;

    let samples = (0..num_samples)
        .map(|i| {
            let t = i as f64 / rate;
            let freq = sweep_frequency_at(start_frequency, end_frequency, duration, sample_rate, i);
            let value = amplitude * (2.0 * PI * freq * t).sin();
            quantize(value * envelope.gain_at(i, num_samples))
        })
        .collect();

    Ok(SampleBuffer::new(samples, sample_rate))
}
