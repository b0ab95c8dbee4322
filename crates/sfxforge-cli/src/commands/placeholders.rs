//! Placeholders command implementation
//!
//! Writes the built-in placeholder sound set (fart, collision, score).

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use sfxforge_audio::placeholder_set;
use sfxforge_audio::recipe::PLACEHOLDER_DIR;
use sfxforge_audio::rng::rng_for;

use super::reporting;

/// Run the placeholders command
///
/// # Arguments
/// * `out_dir` - Output directory (default: `FartyBird/Assets/Sounds`)
/// * `sample_rate` - Sample rate in Hz
/// * `seed` - Noise seed for the collision sound; random when absent
/// * `json_output` - Whether to output a machine-readable JSON report
/// * `print_recipe` - Print the preset as a recipe JSON instead of rendering
pub fn run(
    out_dir: Option<&str>,
    sample_rate: u32,
    seed: Option<u32>,
    json_output: bool,
    print_recipe: bool,
) -> Result<ExitCode> {
    let recipe = placeholder_set(sample_rate);

    if print_recipe {
        let json = recipe
            .to_json_pretty()
            .context("Failed to serialize placeholder recipe")?;
        println!("{}", json);
        return Ok(ExitCode::SUCCESS);
    }

    let out_dir = Path::new(out_dir.unwrap_or(PLACEHOLDER_DIR));
    if !json_output {
        println!("{}", "=== Creating Sound Effects ===".cyan().bold());
        println!("{} {}", "Output dir:".cyan().bold(), out_dir.display());
    }

    let mut rng = rng_for(seed);
    match recipe.generate(out_dir, &mut rng) {
        Ok(sounds) => reporting::print_generated(&sounds, json_output),
        Err(e) => reporting::print_failure(&e, json_output),
    }
}
