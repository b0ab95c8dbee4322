//! SFXForge Audio Core
//!
//! Procedural generation of short placeholder sound effects, written as mono
//! 16-bit PCM WAV files.
//!
//! # Overview
//!
//! Synthesis and serialization are two separate pipeline stages:
//!
//! - **Synthesis** - [`generate_tone`], [`generate_sweep`] and
//!   [`generate_noise_burst`] render a quantized [`SampleBuffer`]
//! - **Container** - [`write_wav_file`] writes a buffer with an explicit
//!   [`WavFormat`], atomically
//!
//! # Determinism
//!
//! Tones and sweeps are pure functions of their parameters. Noise draws from
//! an injected [`NoiseSource`]; seeding a PCG32 stream with
//! [`rng::create_rng`] makes it reproducible too.
//!
//! # Example
//!
//! ```no_run
//! use sfxforge_audio::{generate_tone, write_wav_file, SampleBuffer, WavFormat};
//!
//! let first = generate_tone(523.0, 0.1, 44100, 0.2)?;
//! let second = generate_tone(659.0, 0.1, 44100, 0.2)?;
//! let score = SampleBuffer::concat([first, second])?;
//!
//! write_wav_file("Sounds/score.wav", &WavFormat::mono(44100), score.samples())?;
//! # Ok::<(), sfxforge_audio::AudioError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`synthesis`] - Tone, sweep and noise generators
//! - [`envelope`] - Linear ramp envelopes
//! - [`buffer`] - Quantized sample buffers
//! - [`rng`] - Noise sources and seeded RNGs
//! - [`wav`] - Deterministic WAV writer and reader
//! - [`recipe`] - JSON sound recipes and the placeholder preset
//! - [`config`] - Synthesis defaults

pub mod buffer;
pub mod config;
pub mod envelope;
pub mod error;
pub mod recipe;
pub mod rng;
pub mod synthesis;
pub mod wav;

// Re-export main types at crate root
pub use buffer::SampleBuffer;
pub use config::SynthConfig;
pub use error::{AudioError, AudioResult};
pub use recipe::{placeholder_set, GeneratedSound, Segment, SoundRecipe, SoundSpec};
pub use rng::NoiseSource;
pub use synthesis::{generate_noise_burst, generate_sweep, generate_tone};
pub use wav::{write_wav_file, WavFormat, WavResult, WavWriter};
