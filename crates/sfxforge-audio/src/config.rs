//! Synthesis defaults.
//!
//! Defaults are plain values handed to each render, never process-wide
//! state, so every render stays a pure function of its inputs.

use serde::{Deserialize, Serialize};

use crate::error::{AudioError, AudioResult};

/// Default sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Default amplitude as a fraction of full scale.
pub const DEFAULT_AMPLITUDE: f64 = 0.3;

/// Sample rate and fallback amplitude for a batch of sounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SynthConfig {
    /// Sample rate in Hz.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    /// Amplitude used by segments that do not set their own.
    #[serde(default = "default_amplitude")]
    pub amplitude: f64,
}

fn default_sample_rate() -> u32 {
    DEFAULT_SAMPLE_RATE
}

fn default_amplitude() -> f64 {
    DEFAULT_AMPLITUDE
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            amplitude: DEFAULT_AMPLITUDE,
        }
    }
}

impl SynthConfig {
    /// Creates a config with explicit values.
    pub fn new(sample_rate: u32, amplitude: f64) -> Self {
        Self {
            sample_rate,
            amplitude,
        }
    }

    /// Returns a copy with a different sample rate.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Checks the sample rate is non-zero and the amplitude is in (0, 1].
    pub fn validate(&self) -> AudioResult<()> {
        if self.sample_rate == 0 {
            return Err(AudioError::InvalidSampleRate {
                rate: self.sample_rate,
            });
        }
        if !(self.amplitude > 0.0 && self.amplitude <= 1.0) {
            return Err(AudioError::InvalidAmplitude {
                amplitude: self.amplitude,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SynthConfig::default();
        assert_eq!(config.sample_rate, 44100);
        assert_eq!(config.amplitude, 0.3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: SynthConfig = serde_json::from_str(r#"{"sample_rate": 22050}"#).unwrap();
        assert_eq!(config, SynthConfig::new(22050, DEFAULT_AMPLITUDE));
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: Result<SynthConfig, _> = serde_json::from_str(r#"{"samplerate": 22050}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(SynthConfig::new(0, 0.3).validate().is_err());
        assert!(SynthConfig::new(44100, 0.0).validate().is_err());
        assert!(SynthConfig::new(44100, 1.5).validate().is_err());
        assert!(SynthConfig::new(44100, 1.0).validate().is_ok());
    }
}
