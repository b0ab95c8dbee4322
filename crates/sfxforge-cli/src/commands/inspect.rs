//! Inspect command implementation
//!
//! Prints the format and basic statistics of a PCM16 WAV file.

use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use sfxforge_audio::wav::{compute_pcm_hash, read_wav};

/// Summary printed by `inspect`.
#[derive(Debug, Serialize)]
pub struct WavSummary {
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
    pub num_frames: usize,
    pub duration_seconds: f64,
    pub peak: u16,
    pub pcm_hash: String,
}

/// Decodes a WAV file into a summary.
pub fn summarize(bytes: &[u8]) -> Result<WavSummary> {
    let decoded = read_wav(bytes)?;
    let pcm_hash = compute_pcm_hash(bytes).unwrap_or_default();
    let peak = decoded
        .samples
        .iter()
        .map(|s| s.unsigned_abs())
        .max()
        .unwrap_or(0);

    Ok(WavSummary {
        channels: decoded.format.channels,
        sample_rate: decoded.format.sample_rate,
        bits_per_sample: decoded.format.bits_per_sample,
        num_frames: decoded.num_frames(),
        duration_seconds: decoded.duration_seconds(),
        peak,
        pcm_hash,
    })
}

/// Run the inspect command
pub fn run(input: &str, json_output: bool) -> Result<ExitCode> {
    let bytes = std::fs::read(input).with_context(|| format!("Failed to read file: {}", input))?;
    let summary = summarize(&bytes).with_context(|| format!("Failed to decode WAV: {}", input))?;

    if json_output {
        let text = serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
        println!("{}", text);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {}", "Inspecting:".cyan().bold(), input);
    println!("  {:<12} {}", "channels".dimmed(), summary.channels);
    println!("  {:<12} {} Hz", "sample rate".dimmed(), summary.sample_rate);
    println!("  {:<12} {}", "bit depth".dimmed(), summary.bits_per_sample);
    println!("  {:<12} {}", "frames".dimmed(), summary.num_frames);
    println!("  {:<12} {:.3}s", "duration".dimmed(), summary.duration_seconds);
    println!("  {:<12} {}", "peak".dimmed(), summary.peak);
    println!("  {:<12} {}", "pcm hash".dimmed(), summary.pcm_hash);
    Ok(ExitCode::SUCCESS)
}
