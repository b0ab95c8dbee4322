//! Deterministic WAV file writer.
//!
//! This module writes 16-bit PCM WAV files with no timestamps or variable
//! metadata, so identical samples always produce identical bytes. The BLAKE3
//! hash of the PCM data identifies a sound independently of its header.

mod builder;
mod format;
mod pcm;
mod result;
mod writer;


// Re-export public API
pub use builder::WavWriter;
pub use format::WavFormat;
pub use pcm::{compute_pcm_hash, extract_pcm_data, read_wav, read_wav_file, DecodedWav};
pub use result::WavResult;
pub use writer::{validate_samples, write_wav, write_wav_file, write_wav_to_vec, WAV_HEADER_LEN};
