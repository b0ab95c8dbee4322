//! Sound recipes.
//!
//! A recipe lists named sounds, each made of one or more segments (tone,
//! sweep, noise) rendered in order and concatenated into a single buffer.
//! Recipes are plain JSON:
//!
//! ```json
//! {
//!   "config": { "sample_rate": 44100 },
//!   "sounds": [
//!     {
//!       "name": "score",
//!       "output": "score.wav",
//!       "segments": [
//!         { "type": "tone", "frequency": 523.0, "duration": 0.1, "amplitude": 0.2 },
//!         { "type": "tone", "frequency": 659.0, "duration": 0.1, "amplitude": 0.2 }
//!       ]
//!     }
//!   ]
//! }
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::buffer::SampleBuffer;
use crate::config::SynthConfig;
use crate::error::{AudioError, AudioResult};
use crate::rng::NoiseSource;
use crate::synthesis::{generate_noise_burst, generate_sweep, generate_tone};
use crate::wav::WavResult;

/// One piece of a sound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum Segment {
    /// Steady sine tone.
    Tone {
        /// Frequency in Hz.
        frequency: f64,
        /// Duration in seconds.
        duration: f64,
        /// Amplitude override.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        amplitude: Option<f64>,
    },
    /// Linear frequency sweep.
    Sweep {
        /// Start frequency in Hz.
        start_frequency: f64,
        /// End frequency in Hz.
        end_frequency: f64,
        /// Duration in seconds.
        duration: f64,
        /// Amplitude override.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        amplitude: Option<f64>,
    },
    /// White noise burst.
    Noise {
        /// Duration in seconds.
        duration: f64,
        /// Amplitude override.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        amplitude: Option<f64>,
    },
}

impl Segment {
    /// Renders the segment at the config's sample rate.
    pub fn render<S: NoiseSource + ?Sized>(
        &self,
        config: &SynthConfig,
        noise: &mut S,
    ) -> AudioResult<SampleBuffer> {
        let rate = config.sample_rate;
        match *self {
            Segment::Tone {
                frequency,
                duration,
                amplitude,
            } => generate_tone(
                frequency,
                duration,
                rate,
                amplitude.unwrap_or(config.amplitude),
            ),
            Segment::Sweep {
                start_frequency,
                end_frequency,
                duration,
                amplitude,
            } => generate_sweep(
                start_frequency,
                end_frequency,
                duration,
                rate,
                amplitude.unwrap_or(config.amplitude),
            ),
            Segment::Noise {
                duration,
                amplitude,
            } => generate_noise_burst(
                duration,
                rate,
                amplitude.unwrap_or(config.amplitude),
                noise,
            ),
        }
    }

    /// Nominal duration in seconds.
    pub fn duration(&self) -> f64 {
        match *self {
            Segment::Tone { duration, .. }
            | Segment::Sweep { duration, .. }
            | Segment::Noise { duration, .. } => duration,
        }
    }
}

/// A named sound and where to write it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SoundSpec {
    /// Identifier used in reports.
    pub name: String,
    /// Output path, relative to the output root.
    pub output: String,
    /// Segments played back to back.
    pub segments: Vec<Segment>,
}

impl SoundSpec {
    /// Creates a sound spec.
    pub fn new(name: impl Into<String>, output: impl Into<String>, segments: Vec<Segment>) -> Self {
        Self {
            name: name.into(),
            output: output.into(),
            segments,
        }
    }

    /// Renders every segment and concatenates them.
    pub fn render<S: NoiseSource + ?Sized>(
        &self,
        config: &SynthConfig,
        noise: &mut S,
    ) -> AudioResult<SampleBuffer> {
        let buffers = self
            .segments
            .iter()
            .map(|segment| segment.render(config, &mut *noise))
            .collect::<AudioResult<Vec<_>>>()?;
        SampleBuffer::concat(buffers)
    }

    /// Checks the name, the segment list and the output path.
    pub fn validate(&self) -> AudioResult<()> {
        if self.name.trim().is_empty() {
            return Err(AudioError::invalid_param("name", "sound name cannot be empty"));
        }
        if self.segments.is_empty() {
            return Err(AudioError::invalid_param(
                "segments",
                format!("sound '{}' has no segments", self.name),
            ));
        }
        validate_output_path(&self.output)
    }
}

/// Output path rules: non-empty, relative, forward slashes, no `..`.
fn validate_output_path(path: &str) -> AudioResult<()> {
    let fail = |message: String| Err(AudioError::invalid_param("output", message));

    if path.is_empty() {
        return fail("output path cannot be empty".to_string());
    }
    if path.starts_with('/') || path.starts_with('\\') {
        return fail(format!("output path must be relative, not absolute: '{}'", path));
    }
    if path.len() >= 2 && path.chars().nth(1) == Some(':') {
        return fail(format!("output path must not contain drive letter: '{}'", path));
    }
    if path.contains('\\') {
        return fail(format!("output path must use forward slashes only: '{}'", path));
    }
    if path.split('/').any(|segment| segment == "..") {
        return fail(format!("output path must not contain '..': '{}'", path));
    }
    Ok(())
}

/// A batch of sounds sharing one config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SoundRecipe {
    /// Sample rate and default amplitude.
    #[serde(default)]
    pub config: SynthConfig,
    /// Sounds to render, in order.
    pub sounds: Vec<SoundSpec>,
}

/// A sound that has been rendered and written to disk.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedSound {
    /// Sound name.
    pub name: String,
    /// Where the file was written.
    pub path: PathBuf,
    /// BLAKE3 hash of the PCM data.
    pub pcm_hash: String,
    /// Number of samples written.
    pub num_samples: usize,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Duration in seconds.
    pub duration_seconds: f64,
    /// Peak absolute sample value.
    pub peak: u16,
}

impl SoundRecipe {
    /// Parses a recipe from JSON.
    pub fn from_json(json: &str) -> AudioResult<Self> {
        serde_json::from_str(json).map_err(|e| AudioError::invalid_param("recipe", e.to_string()))
    }

    /// Serializes the recipe to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> AudioResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| AudioError::invalid_param("recipe", e.to_string()))
    }

    /// Validates the config, every sound, and name uniqueness.
    pub fn validate(&self) -> AudioResult<()> {
        self.config.validate()?;
        if self.sounds.is_empty() {
            return Err(AudioError::invalid_param("sounds", "recipe has no sounds"));
        }
        let mut names = HashSet::new();
        let mut outputs = HashSet::new();
        for sound in &self.sounds {
            sound.validate()?;
            if !names.insert(sound.name.as_str()) {
                return Err(AudioError::invalid_param(
                    "name",
                    format!("duplicate sound name '{}'", sound.name),
                ));
            }
            if !outputs.insert(sound.output.as_str()) {
                return Err(AudioError::invalid_param(
                    "output",
                    format!("duplicate output path '{}'", sound.output),
                ));
            }
        }
        Ok(())
    }

    /// Renders a single sound by name.
    pub fn render_sound<S: NoiseSource + ?Sized>(
        &self,
        name: &str,
        noise: &mut S,
    ) -> AudioResult<SampleBuffer> {
        let sound = self
            .sounds
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| AudioError::invalid_param("name", format!("no sound named '{}'", name)))?;
        sound.render(&self.config, noise)
    }

    /// Renders every sound and writes it under `out_root`.
    ///
    /// Every sound is rendered and encoded before the first file is written,
    /// so a bad parameter anywhere in the batch leaves the disk untouched.
    /// An I/O failure stops the batch; files written before it stay on disk.
    pub fn generate<S: NoiseSource + ?Sized>(
        &self,
        out_root: &Path,
        noise: &mut S,
    ) -> AudioResult<Vec<GeneratedSound>> {
        self.validate()?;

        let encoded = self
            .sounds
            .iter()
            .map(|sound| {
                let buffer = sound.render(&self.config, &mut *noise)?;
                let wav = WavResult::from_buffer(&buffer)?;
                Ok((sound, buffer, wav))
            })
            .collect::<AudioResult<Vec<_>>>()?;

        encoded
            .into_iter()
            .map(|(sound, buffer, wav)| {
                let path = out_root.join(&sound.output);
                write_encoded(&sound.name, &path, &buffer, wav)
            })
            .collect()
    }
}

/// Encodes `buffer` as mono WAV, writes it to `path` and describes the result.
pub fn save_buffer(name: &str, path: &Path, buffer: &SampleBuffer) -> AudioResult<GeneratedSound> {
    let wav = WavResult::from_buffer(buffer)?;
    write_encoded(name, path, buffer, wav)
}

fn write_encoded(
    name: &str,
    path: &Path,
    buffer: &SampleBuffer,
    wav: WavResult,
) -> AudioResult<GeneratedSound> {
    wav.save(path)?;

    Ok(GeneratedSound {
        name: name.to_string(),
        path: path.to_path_buf(),
        pcm_hash: wav.pcm_hash,
        num_samples: wav.num_samples,
        sample_rate: wav.sample_rate,
        duration_seconds: buffer.duration_seconds(),
        peak: buffer.peak(),
    })
}

/// Default directory for the placeholder set.
pub const PLACEHOLDER_DIR: &str = "FartyBird/Assets/Sounds";

/// The three placeholder game sounds.
///
/// - `fart`: sweep 400 Hz -> 150 Hz over 0.3 s at 0.25
/// - `collision`: noise burst of 0.15 s at 0.3
/// - `score`: C5 then E5, 0.1 s each at 0.2
pub fn placeholder_set(sample_rate: u32) -> SoundRecipe {
    SoundRecipe {
        config: SynthConfig::default().with_sample_rate(sample_rate),
        sounds: vec![
            SoundSpec::new(
                "fart",
                "fart.wav",
                vec![Segment::Sweep {
                    start_frequency: 400.0,
                    end_frequency: 150.0,
                    duration: 0.3,
                    amplitude: Some(0.25),
                }],
            ),
            SoundSpec::new(
                "collision",
                "collision.wav",
                vec![Segment::Noise {
                    duration: 0.15,
                    amplitude: Some(0.3),
                }],
            ),
            SoundSpec::new(
                "score",
                "score.wav",
                vec![
                    Segment::Tone {
                        frequency: 523.0,
                        duration: 0.1,
                        amplitude: Some(0.2),
                    },
                    Segment::Tone {
                        frequency: 659.0,
                        duration: 0.1,
                        amplitude: Some(0.2),
                    },
                ],
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_recipe_json() {
        let json = r#"{
            "config": { "sample_rate": 22050 },
            "sounds": [
                {
                    "name": "zap",
                    "output": "sfx/zap.wav",
                    "segments": [
                        { "type": "sweep", "start_frequency": 2000.0, "end_frequency": 200.0, "duration": 0.2 },
                        { "type": "noise", "duration": 0.05, "amplitude": 0.1 }
                    ]
                }
            ]
        }"#;
        let recipe = SoundRecipe::from_json(json).unwrap();
        assert_eq!(recipe.config, SynthConfig::new(22050, 0.3));
        assert_eq!(recipe.sounds[0].segments.len(), 2);
        assert_eq!(
            recipe.sounds[0].segments[1],
            Segment::Noise {
                duration: 0.05,
                amplitude: Some(0.1)
            }
        );
        assert!(recipe.validate().is_ok());
    }

    #[test]
    fn test_unknown_segment_type_rejected() {
        let json = r#"{ "sounds": [ { "name": "a", "output": "a.wav",
            "segments": [ { "type": "square", "duration": 0.1 } ] } ] }"#;
        assert!(matches!(
            SoundRecipe::from_json(json),
            Err(AudioError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_json_round_trip_of_placeholder_set() {
        let recipe = placeholder_set(44100);
        let json = recipe.to_json_pretty().unwrap();
        assert_eq!(SoundRecipe::from_json(&json).unwrap(), recipe);
    }

    #[test]
    fn test_score_is_two_tones() {
        let recipe = placeholder_set(44100);
        let score = recipe.render_sound("score", &mut create_rng(0)).unwrap();
        assert_eq!(score.len(), 8820);

        let first = generate_tone(523.0, 0.1, 44100, 0.2).unwrap();
        let second = generate_tone(659.0, 0.1, 44100, 0.2).unwrap();
        assert_eq!(&score.samples()[..4410], first.samples());
        assert_eq!(&score.samples()[4410..], second.samples());
    }

    #[test]
    fn test_segment_uses_config_amplitude_when_unset() {
        let config = SynthConfig::new(8000, 0.5);
        let segment = Segment::Tone {
            frequency: 2000.0,
            duration: 0.01,
            amplitude: None,
        };
        let buffer = segment.render(&config, &mut create_rng(0)).unwrap();
        // 2000 Hz at 8 kHz: sample 1 sits at sin(π/2)
        assert_eq!(buffer.samples()[1], 16383);
        assert_eq!(segment.duration(), 0.01);
    }

    #[test]
    fn test_output_path_rules() {
        assert!(validate_output_path("sounds/fart.wav").is_ok());
        assert!(validate_output_path("").is_err());
        assert!(validate_output_path("/tmp/fart.wav").is_err());
        assert!(validate_output_path("C:/fart.wav").is_err());
        assert!(validate_output_path("sounds\\fart.wav").is_err());
        assert!(validate_output_path("../fart.wav").is_err());
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let mut recipe = placeholder_set(44100);
        recipe.sounds[1].name = "fart".to_string();
        assert!(recipe.validate().is_err());

        let mut recipe = placeholder_set(44100);
        recipe.sounds[1].output = "fart.wav".to_string();
        assert!(recipe.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_sound() {
        let mut recipe = placeholder_set(44100);
        recipe.sounds[0].segments.clear();
        assert!(recipe.validate().is_err());
    }

    #[test]
    fn test_render_unknown_sound() {
        let recipe = placeholder_set(44100);
        assert!(recipe.render_sound("jump", &mut create_rng(0)).is_err());
    }

    #[test]
    fn test_generate_writes_all_sounds() {
        let dir = tempfile::tempdir().unwrap();
        let recipe = placeholder_set(44100);
        let generated = recipe.generate(dir.path(), &mut create_rng(5)).unwrap();

        let names: Vec<&str> = generated.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["fart", "collision", "score"]);
        assert_eq!(generated[0].num_samples, 13230);
        assert_eq!(generated[1].num_samples, 6615);
        assert_eq!(generated[2].num_samples, 8820);
        for sound in &generated {
            assert!(sound.path.exists());
            assert_eq!(sound.pcm_hash.len(), 64);
        }
    }

    #[test]
    fn test_generate_zero_duration_fails_in_writer() {
        let dir = tempfile::tempdir().unwrap();
        let recipe = SoundRecipe {
            config: SynthConfig::default(),
            sounds: vec![SoundSpec::new(
                "silent",
                "silent.wav",
                vec![Segment::Tone {
                    frequency: 440.0,
                    duration: 0.0,
                    amplitude: None,
                }],
            )],
        };
        let err = recipe.generate(dir.path(), &mut create_rng(0)).unwrap_err();
        assert!(matches!(err, AudioError::EmptyBuffer));
        assert!(!dir.path().join("silent.wav").exists());
    }

    #[test]
    fn test_generate_checks_whole_batch_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let recipe = SoundRecipe {
            config: SynthConfig::default(),
            sounds: vec![
                SoundSpec::new(
                    "first",
                    "first.wav",
                    vec![Segment::Tone {
                        frequency: 440.0,
                        duration: 0.05,
                        amplitude: None,
                    }],
                ),
                SoundSpec::new(
                    "second",
                    "second.wav",
                    vec![Segment::Tone {
                        frequency: 440.0,
                        duration: 0.05,
                        amplitude: Some(1.5),
                    }],
                ),
            ],
        };
        let err = recipe.generate(dir.path(), &mut create_rng(0)).unwrap_err();
        assert!(matches!(err, AudioError::InvalidAmplitude { .. }));
        assert!(!dir.path().join("first.wav").exists());
        assert!(!dir.path().join("second.wav").exists());
    }
}
