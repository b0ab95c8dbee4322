//! Shared output for generation commands.

use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use sfxforge_audio::{AudioError, GeneratedSound};

/// JSON report printed with `--json`.
#[derive(Debug, Serialize)]
pub(crate) struct GenerateOutput<'a> {
    pub success: bool,
    pub sounds: &'a [GeneratedSound],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonError>,
}

/// Error entry in a JSON report.
#[derive(Debug, Serialize)]
pub(crate) struct JsonError {
    pub code: &'static str,
    pub message: String,
}

/// Prints the sounds that were written.
pub(crate) fn print_generated(sounds: &[GeneratedSound], json: bool) -> Result<ExitCode> {
    if json {
        let output = GenerateOutput {
            success: true,
            sounds,
            error: None,
        };
        let text = serde_json::to_string_pretty(&output).context("Failed to serialize report")?;
        println!("{}", text);
        return Ok(ExitCode::SUCCESS);
    }

    for sound in sounds {
        println!(
            "  {} {} -> {}",
            "+".green(),
            sound.name.bold(),
            sound.path.display()
        );
        println!(
            "    {} {} samples @ {} Hz ({:.3}s), peak {}, pcm {}",
            "-".dimmed(),
            sound.num_samples,
            sound.sample_rate,
            sound.duration_seconds,
            sound.peak,
            &sound.pcm_hash[..16]
        );
    }
    println!(
        "\n{} {} sound(s) generated",
        "SUCCESS".green().bold(),
        sounds.len()
    );
    Ok(ExitCode::SUCCESS)
}

/// Reports a failed generation.
///
/// Exit code: 1 for rejected parameters, 2 for I/O failures.
pub(crate) fn print_failure(err: &AudioError, json: bool) -> Result<ExitCode> {
    if json {
        let output = GenerateOutput {
            success: false,
            sounds: &[],
            error: Some(JsonError {
                code: err.code(),
                message: err.to_string(),
            }),
        };
        let text = serde_json::to_string_pretty(&output).context("Failed to serialize report")?;
        println!("{}", text);
    } else {
        eprintln!("{} [{}] {}", "ERROR".red().bold(), err.code(), err);
    }
    Ok(failure_code(err))
}

fn failure_code(err: &AudioError) -> ExitCode {
    if err.is_validation() {
        ExitCode::from(1)
    } else {
        ExitCode::from(2)
    }
}
