//! WAV container round-trip tests against an independent reader.

use sfxforge_audio::rng::create_rng;
use sfxforge_audio::wav::{read_wav_file, WAV_HEADER_LEN};
use sfxforge_audio::{
    generate_noise_burst, generate_sweep, generate_tone, placeholder_set, write_wav_file,
    AudioError, SampleBuffer, WavFormat,
};

fn read_with_hound(path: &std::path::Path) -> (hound::WavSpec, Vec<i16>) {
    let mut reader = hound::WavReader::open(path).expect("hound should open the file");
    let spec = reader.spec();
    let samples = reader
        .samples::<i16>()
        .collect::<Result<Vec<_>, _>>()
        .expect("hound should decode every sample");
    (spec, samples)
}

#[test]
fn test_round_trip_through_hound() {
    let dir = tempfile::tempdir().unwrap();
    let buffers = [
        ("tone.wav", generate_tone(440.0, 0.2, 44100, 0.8).unwrap()),
        ("sweep.wav", generate_sweep(400.0, 150.0, 0.3, 22050, 0.25).unwrap()),
        (
            "noise.wav",
            generate_noise_burst(0.15, 48000, 1.0, &mut create_rng(11)).unwrap(),
        ),
    ];

    for (name, buffer) in &buffers {
        let path = dir.path().join(name);
        write_wav_file(&path, &WavFormat::mono(buffer.sample_rate()), buffer.samples()).unwrap();

        let (spec, samples) = read_with_hound(&path);
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, buffer.sample_rate());
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(spec.sample_format, hound::SampleFormat::Int);
        assert_eq!(samples, buffer.samples());
    }
}

#[test]
fn test_extreme_values_survive_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("extremes.wav");
    let samples = vec![i16::MIN, -1, 0, 1, i16::MAX];
    write_wav_file(&path, &WavFormat::mono(8000), &samples).unwrap();

    let (_, decoded) = read_with_hound(&path);
    assert_eq!(decoded, samples);
    assert_eq!(read_wav_file(&path).unwrap().samples, samples);
}

#[test]
fn test_two_note_score_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("score.wav");

    let first = generate_tone(523.0, 0.1, 44100, 0.2).unwrap();
    let second = generate_tone(659.0, 0.1, 44100, 0.2).unwrap();
    let score = SampleBuffer::concat([first, second]).unwrap();
    assert_eq!(score.len(), 8820);
    assert!((score.duration_seconds() - 0.2).abs() < 1e-12);

    write_wav_file(&path, &WavFormat::mono(44100), score.samples()).unwrap();
    assert_eq!(
        std::fs::metadata(&path).unwrap().len() as usize,
        WAV_HEADER_LEN + 8820 * 2
    );

    let reader = hound::WavReader::open(&path).unwrap();
    assert_eq!(reader.duration(), 8820);
}

#[test]
fn test_zero_duration_is_rejected_by_writer() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.wav");

    let empty = generate_tone(440.0, 0.0, 44100, 0.3).unwrap();
    assert!(empty.is_empty());

    let err = write_wav_file(&path, &WavFormat::mono(44100), empty.samples()).unwrap_err();
    assert!(matches!(err, AudioError::EmptyBuffer));
    assert!(err.is_validation());
    assert!(!path.exists());
}

#[test]
fn test_unwritable_destination_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    // A regular file where a directory is needed.
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"not a directory").unwrap();
    let path = blocker.join("sounds").join("tone.wav");

    let tone = generate_tone(440.0, 0.05, 44100, 0.3).unwrap();
    let err = write_wav_file(&path, &WavFormat::mono(44100), tone.samples()).unwrap_err();
    assert!(matches!(err, AudioError::Io { .. }));
    assert!(!err.is_validation());
}

#[test]
fn test_placeholder_set_is_readable_by_hound() {
    let dir = tempfile::tempdir().unwrap();
    let generated = placeholder_set(44100)
        .generate(dir.path(), &mut create_rng(3))
        .unwrap();

    for sound in generated {
        let (spec, samples) = read_with_hound(&sound.path);
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 44100);
        assert_eq!(samples.len(), sound.num_samples);
    }
}

#[test]
fn test_seeded_placeholder_set_is_reproducible() {
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();
    let recipe = placeholder_set(44100);

    let first = recipe.generate(a.path(), &mut create_rng(77)).unwrap();
    let second = recipe.generate(b.path(), &mut create_rng(77)).unwrap();

    for (x, y) in first.iter().zip(&second) {
        assert_eq!(x.pcm_hash, y.pcm_hash);
        assert_eq!(std::fs::read(&x.path).unwrap(), std::fs::read(&y.path).unwrap());
    }
}
