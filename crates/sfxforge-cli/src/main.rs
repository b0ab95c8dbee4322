//! SFXForge CLI - Command-line interface for placeholder sound generation
//!
//! This binary renders tones, sweeps and noise bursts to mono 16-bit WAV
//! files, either one at a time, from a JSON recipe, or as the built-in
//! placeholder set.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use sfxforge_audio::config::DEFAULT_SAMPLE_RATE;
use sfxforge_cli::commands;
use sfxforge_cli::commands::synth::SynthOptions;

/// SFXForge - Procedural placeholder sound effects
#[derive(Parser)]
#[command(name = "sfxforge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a steady sine tone
    Tone {
        /// Frequency in Hz
        #[arg(short, long)]
        frequency: f64,

        /// Duration in seconds
        #[arg(short, long)]
        duration: f64,

        /// Amplitude as a fraction of full scale, in (0, 1]
        #[arg(short, long, default_value = "0.3")]
        amplitude: f64,

        /// Sample rate in Hz
        #[arg(long, default_value_t = DEFAULT_SAMPLE_RATE)]
        sample_rate: u32,

        /// Output WAV path
        #[arg(short, long)]
        out: String,

        /// Output machine-readable JSON report (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Generate a linear frequency sweep
    Sweep {
        /// Start frequency in Hz
        #[arg(long)]
        from: f64,

        /// End frequency in Hz
        #[arg(long)]
        to: f64,

        /// Duration in seconds
        #[arg(short, long)]
        duration: f64,

        /// Amplitude as a fraction of full scale, in (0, 1]
        #[arg(short, long, default_value = "0.3")]
        amplitude: f64,

        /// Sample rate in Hz
        #[arg(long, default_value_t = DEFAULT_SAMPLE_RATE)]
        sample_rate: u32,

        /// Output WAV path
        #[arg(short, long)]
        out: String,

        /// Output machine-readable JSON report (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Generate a white noise burst
    Noise {
        /// Duration in seconds
        #[arg(short, long)]
        duration: f64,

        /// Amplitude as a fraction of full scale, in (0, 1]
        #[arg(short, long, default_value = "0.2")]
        amplitude: f64,

        /// Sample rate in Hz
        #[arg(long, default_value_t = DEFAULT_SAMPLE_RATE)]
        sample_rate: u32,

        /// Seed for reproducible noise (default: random)
        #[arg(long)]
        seed: Option<u32>,

        /// Output WAV path
        #[arg(short, long)]
        out: String,

        /// Output machine-readable JSON report (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Render every sound in a JSON recipe
    Render {
        /// Path to the recipe JSON file
        #[arg(short, long)]
        recipe: String,

        /// Output root directory (default: the recipe's directory)
        #[arg(short, long)]
        out_root: Option<String>,

        /// Seed for reproducible noise (default: random)
        #[arg(long)]
        seed: Option<u32>,

        /// Output machine-readable JSON report (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Write the built-in placeholder set (fart, collision, score)
    Placeholders {
        /// Output directory (default: FartyBird/Assets/Sounds)
        #[arg(short, long)]
        out_dir: Option<String>,

        /// Sample rate in Hz
        #[arg(long, default_value_t = DEFAULT_SAMPLE_RATE)]
        sample_rate: u32,

        /// Seed for reproducible noise (default: random)
        #[arg(long)]
        seed: Option<u32>,

        /// Print the preset as recipe JSON instead of rendering it
        #[arg(long)]
        print_recipe: bool,

        /// Output machine-readable JSON report (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the format and statistics of a WAV file
    Inspect {
        /// Path to the WAV file
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Tone {
            frequency,
            duration,
            amplitude,
            sample_rate,
            out,
            json,
        } => commands::synth::run_tone(
            frequency,
            duration,
            amplitude,
            &SynthOptions {
                out: &out,
                sample_rate,
                seed: None,
                json,
            },
        ),
        Commands::Sweep {
            from,
            to,
            duration,
            amplitude,
            sample_rate,
            out,
            json,
        } => commands::synth::run_sweep(
            from,
            to,
            duration,
            amplitude,
            &SynthOptions {
                out: &out,
                sample_rate,
                seed: None,
                json,
            },
        ),
        Commands::Noise {
            duration,
            amplitude,
            sample_rate,
            seed,
            out,
            json,
        } => commands::synth::run_noise(
            duration,
            amplitude,
            &SynthOptions {
                out: &out,
                sample_rate,
                seed,
                json,
            },
        ),
        Commands::Render {
            recipe,
            out_root,
            seed,
            json,
        } => commands::render::run(&recipe, out_root.as_deref(), seed, json),
        Commands::Placeholders {
            out_dir,
            sample_rate,
            seed,
            print_recipe,
            json,
        } => commands::placeholders::run(out_dir.as_deref(), sample_rate, seed, json, print_recipe),
        Commands::Inspect { input, json } => commands::inspect::run(&input, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
