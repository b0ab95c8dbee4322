//! Single-sound commands: `tone`, `sweep` and `noise`.
//!
//! Each renders one segment and writes it to an explicit output path.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use sfxforge_audio::recipe::save_buffer;
use sfxforge_audio::rng::rng_for;
use sfxforge_audio::{AudioResult, GeneratedSound, Segment, SynthConfig};

use super::reporting;

/// Options shared by the single-sound commands.
#[derive(Debug, Clone)]
pub struct SynthOptions<'a> {
    /// Output WAV path.
    pub out: &'a str,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Noise seed; `None` draws from OS entropy.
    pub seed: Option<u32>,
    /// Print a JSON report instead of colored lines.
    pub json: bool,
}

/// Run the tone command
pub fn run_tone(
    frequency: f64,
    duration: f64,
    amplitude: f64,
    opts: &SynthOptions,
) -> Result<ExitCode> {
    let segment = Segment::Tone {
        frequency,
        duration,
        amplitude: Some(amplitude),
    };
    run_segment("tone", &segment, opts)
}

/// Run the sweep command
pub fn run_sweep(
    start_frequency: f64,
    end_frequency: f64,
    duration: f64,
    amplitude: f64,
    opts: &SynthOptions,
) -> Result<ExitCode> {
    let segment = Segment::Sweep {
        start_frequency,
        end_frequency,
        duration,
        amplitude: Some(amplitude),
    };
    run_segment("sweep", &segment, opts)
}

/// Run the noise command
pub fn run_noise(duration: f64, amplitude: f64, opts: &SynthOptions) -> Result<ExitCode> {
    let segment = Segment::Noise {
        duration,
        amplitude: Some(amplitude),
    };
    run_segment("noise", &segment, opts)
}

fn run_segment(name: &str, segment: &Segment, opts: &SynthOptions) -> Result<ExitCode> {
    if !opts.json {
        println!("{} {} -> {}", "Generating:".cyan().bold(), name, opts.out);
    }

    match write_segment(name, segment, opts) {
        Ok(sound) => reporting::print_generated(std::slice::from_ref(&sound), opts.json),
        Err(e) => reporting::print_failure(&e, opts.json),
    }
}

fn write_segment(
    name: &str,
    segment: &Segment,
    opts: &SynthOptions,
) -> AudioResult<GeneratedSound> {
    let config = SynthConfig::default().with_sample_rate(opts.sample_rate);
    let mut rng = rng_for(opts.seed);

    let buffer = segment.render(&config, &mut rng)?;
    save_buffer(name, Path::new(opts.out), &buffer)
}
