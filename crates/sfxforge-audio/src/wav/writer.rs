//! Core WAV writing and PCM conversion functions.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{AudioError, AudioResult};

use super::format::WavFormat;

/// Size of the canonical RIFF/fmt/data header.
pub const WAV_HEADER_LEN: usize = 44;

/// Checks a format and a sample slice before anything is written.
///
/// Rejects unsupported formats (including ones whose block align or byte rate
/// overflow the header fields), empty input, sample counts that do not fill
/// whole frames, and data too large for the 32-bit RIFF size fields.
pub fn validate_samples(format: &WavFormat, samples: &[i16]) -> AudioResult<()> {
    format.validate()?;
    if samples.is_empty() {
        return Err(AudioError::EmptyBuffer);
    }
    if samples.len() % format.channels as usize != 0 {
        return Err(AudioError::InvalidChannelCount {
            channels: format.channels,
            num_samples: samples.len(),
        });
    }
    let data_len = samples.len() as u64 * format.sample_width_bytes() as u64;
    if data_len + 36 > u32::MAX as u64 {
        return Err(AudioError::invalid_param(
            "samples",
            format!("{} samples do not fit in a WAV file", samples.len()),
        ));
    }
    Ok(())
}

/// Writes a complete WAV file to a writer.
///
/// The caller is expected to have run [`validate_samples`]; this function only
/// serializes.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - WAV format parameters
/// * `samples` - Interleaved 16-bit samples
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, samples: &[i16]) -> io::Result<()> {
    let data_size = (samples.len() * format.sample_width_bytes() as usize) as u32;
    let file_size = 36 + data_size; // Total file size minus 8 bytes for RIFF header

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // Chunk size (16 for PCM)
    writer.write_all(&1u16.to_le_bytes())?; // Audio format (1 = PCM)
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    for sample in samples {
        writer.write_all(&sample.to_le_bytes())?;
    }

    Ok(())
}

/// Writes a WAV file to a byte vector.
pub fn write_wav_to_vec(format: &WavFormat, samples: &[i16]) -> AudioResult<Vec<u8>> {
    validate_samples(format, samples)?;
    let mut buffer = Vec::with_capacity(WAV_HEADER_LEN + samples.len() * 2);
    write_wav(&mut buffer, format, samples).map_err(|e| AudioError::io("<memory>", e))?;
    Ok(buffer)
}

/// Writes a WAV file to `path`, replacing any existing file.
///
/// Missing parent directories are created. The data goes to a temporary file
/// in the destination directory first and is renamed into place only once it
/// is complete, so a failed write never leaves a truncated file at `path`.
pub fn write_wav_file(
    path: impl AsRef<Path>,
    format: &WavFormat,
    samples: &[i16],
) -> AudioResult<()> {
    validate_samples(format, samples)?;
    write_atomic(path.as_ref(), |out| write_wav(out, format, samples))
}

/// Creates `path`'s parent directories, streams `fill` into a temporary file
/// next to it and renames the result over `path`.
pub(crate) fn write_atomic<F>(path: &Path, fill: F) -> AudioResult<()>
where
    F: FnOnce(&mut BufWriter<&mut fs::File>) -> io::Result<()>,
{
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| AudioError::io(parent, e))?;

    // Replacing a file keeps its mode; new files get the usual umask-filtered 0o666.
    let existing = fs::metadata(path)
        .ok()
        .filter(|meta| meta.is_file())
        .map(|meta| meta.permissions());

    let mut builder = tempfile::Builder::new();
    builder.prefix(".sfxforge-");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if existing.is_none() {
            builder.permissions(fs::Permissions::from_mode(0o666));
        }
    }

    // Dropping the temp file on any error path deletes it.
    let mut tmp = builder
        .tempfile_in(parent)
        .map_err(|e| AudioError::io(parent, e))?;
    if let Some(permissions) = existing {
        tmp.as_file()
            .set_permissions(permissions)
            .map_err(|e| AudioError::io(path, e))?;
    }
    {
        let mut out = BufWriter::new(tmp.as_file_mut());
        fill(&mut out).map_err(|e| AudioError::io(path, e))?;
        out.flush().map_err(|e| AudioError::io(path, e))?;
    }
    tmp.as_file()
        .sync_all()
        .map_err(|e| AudioError::io(path, e))?;
    tmp.persist(path).map_err(|e| AudioError::io(path, e.error))?;

    Ok(())
}
