//! Renders the placeholder set into a temp directory and prints what was written.

use sfxforge_audio::config::DEFAULT_SAMPLE_RATE;
use sfxforge_audio::placeholder_set;
use sfxforge_audio::rng::create_rng;
use sfxforge_audio::wav::read_wav_file;

fn main() {
    println!("Rendering placeholder sounds...");

    let out_dir = std::env::temp_dir().join("sfxforge-placeholders");
    let recipe = placeholder_set(DEFAULT_SAMPLE_RATE);
    let mut rng = create_rng(42);

    let sounds = match recipe.generate(&out_dir, &mut rng) {
        Ok(sounds) => sounds,
        Err(e) => {
            eprintln!("Failed to render placeholders: {}", e);
            std::process::exit(1);
        }
    };

    for sound in &sounds {
        println!(
            "{:<10} {:>6} samples  peak {:>5}  {}",
            sound.name,
            sound.num_samples,
            sound.peak,
            sound.path.display()
        );

        // Read the file back to confirm the header matches
        let decoded = read_wav_file(&sound.path).unwrap();
        assert_eq!(decoded.num_frames(), sound.num_samples);
    }

    println!("Done. Files written to {}", out_dir.display());
}
