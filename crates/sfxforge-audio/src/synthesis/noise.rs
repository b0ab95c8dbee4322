//! White noise burst.

use crate::buffer::SampleBuffer;
use crate::envelope::RampEnvelope;
use crate::error::AudioResult;
use crate::rng::NoiseSource;

use super::{quantize, sample_count, validate_common};

/// Generates a burst of uniform white noise.
///
/// The envelope ramps in over the first 0.5% of the buffer and out over the
/// last 2%, giving a percussive attack and a softer tail. Exactly one value is
/// drawn from `source` per sample.
///
/// # Arguments
/// * `duration` - Duration in seconds
/// * `sample_rate` - Sample rate in Hz
/// * `amplitude` - Peak level as a fraction of full scale, in (0, 1]
/// * `source` - Random values in [-1, 1]
pub fn generate_noise_burst<S: NoiseSource + ?Sized>(
    duration: f64,
    sample_rate: u32,
    amplitude: f64,
    source: &mut S,
) -> AudioResult<SampleBuffer> {
    validate_common(duration, sample_rate, amplitude)?;

    let num_samples = sample_count(duration, sample_rate);
    let envelope = RampEnvelope::percussive();

    let samples = (0..num_samples)
        .map(|i| {
            let value = amplitude * source.next_value().clamp(-1.0, 1.0);
            quantize(value * envelope.gain_at(i, num_samples))
        })
        .collect();

    Ok(SampleBuffer::new(samples, sample_rate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{create_rng, entropy_rng};

    /// Always returns the same value.
    struct Constant(f64);

    impl NoiseSource for Constant {
        fn next_value(&mut self) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_noise_length() {
        let mut rng = create_rng(1);
        let noise = generate_noise_burst(0.15, 44100, 0.3, &mut rng).unwrap();
        assert_eq!(noise.len(), 6615);
    }

    #[test]
    fn test_noise_boundaries_are_silent() {
        for _ in 0..10 {
            let mut rng = entropy_rng();
            let noise = generate_noise_burst(0.15, 44100, 0.3, &mut rng).unwrap();
            let s = noise.samples();
            assert!(s[0].abs() <= 1);
            assert!(s[s.len() - 1].abs() <= 1);
        }
    }

    #[test]
    fn test_noise_seeded_is_reproducible() {
        let a = generate_noise_burst(0.05, 22050, 0.5, &mut create_rng(42)).unwrap();
        let b = generate_noise_burst(0.05, 22050, 0.5, &mut create_rng(42)).unwrap();
        let c = generate_noise_burst(0.05, 22050, 0.5, &mut create_rng(43)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_noise_envelope_with_constant_source() {
        // 10000 samples: 50 sample attack, 200 sample release
        let noise = generate_noise_burst(1.0, 10_000, 1.0, &mut Constant(1.0)).unwrap();
        let s = noise.samples();
        assert_eq!(s[0], 0);
        assert_eq!(s[25], quantize(0.5));
        assert_eq!(s[5000], 32767);
        assert_eq!(s[9999 - 100], quantize(0.5));
        assert_eq!(s[9999], 0);
    }

    #[test]
    fn test_noise_out_of_range_source_is_clamped() {
        let noise = generate_noise_burst(0.01, 44100, 1.0, &mut Constant(-5.0)).unwrap();
        assert!(noise.samples().iter().all(|&s| s >= -32767));
    }

    #[test]
    fn test_noise_interior_varies() {
        let mut rng = entropy_rng();
        let noise = generate_noise_burst(0.15, 44100, 0.3, &mut rng).unwrap();
        let s = &noise.samples()[100..6000];
        let min = *s.iter().min().unwrap();
        let max = *s.iter().max().unwrap();
        // amplitude 0.3 -> roughly +/- 9830 at full envelope
        assert!(max > 5000, "max {}", max);
        assert!(min < -5000, "min {}", min);
    }
}
