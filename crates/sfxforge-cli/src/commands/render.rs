//! Render command implementation
//!
//! Renders every sound in a JSON recipe file.

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use sfxforge_audio::rng::rng_for;
use sfxforge_audio::SoundRecipe;

use super::reporting;

/// Run the render command
///
/// # Arguments
/// * `recipe_path` - Path to the recipe JSON file
/// * `out_root` - Output root directory (default: directory of the recipe)
/// * `seed` - Noise seed; random when absent
/// * `json_output` - Whether to output a machine-readable JSON report
///
/// # Returns
/// Exit code: 0 success, 1 invalid recipe, 2 I/O error
pub fn run(
    recipe_path: &str,
    out_root: Option<&str>,
    seed: Option<u32>,
    json_output: bool,
) -> Result<ExitCode> {
    let out_root = match out_root {
        Some(dir) => Path::new(dir).to_path_buf(),
        None => Path::new(recipe_path)
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
            .to_path_buf(),
    };

    if !json_output {
        println!("{} {}", "Rendering recipe:".cyan().bold(), recipe_path);
        println!("{} {}", "Output root:".cyan().bold(), out_root.display());
    }

    let content = fs::read_to_string(recipe_path)
        .with_context(|| format!("Failed to read recipe file: {}", recipe_path))?;

    let recipe = match SoundRecipe::from_json(&content) {
        Ok(recipe) => recipe,
        Err(e) => return reporting::print_failure(&e, json_output),
    };

    if !json_output && seed.is_none() && has_noise(&recipe) {
        println!(
            "{} {}",
            "WARNING".yellow().bold(),
            "recipe contains noise and no --seed was given; output will differ between runs"
        );
    }

    let mut rng = rng_for(seed);
    match recipe.generate(&out_root, &mut rng) {
        Ok(sounds) => reporting::print_generated(&sounds, json_output),
        Err(e) => reporting::print_failure(&e, json_output),
    }
}

fn has_noise(recipe: &SoundRecipe) -> bool {
    recipe.sounds.iter().any(|sound| {
        sound
            .segments
            .iter()
            .any(|segment| matches!(segment, sfxforge_audio::Segment::Noise { .. }))
    })
}
