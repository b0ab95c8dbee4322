//! Error types for the audio core.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur during synthesis or WAV output.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Invalid sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Invalid duration.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The invalid duration.
        duration: f64,
    },

    /// Invalid frequency.
    #[error("invalid frequency: {freq} Hz")]
    InvalidFrequency {
        /// The invalid frequency.
        freq: f64,
    },

    /// Amplitude outside (0, 1].
    #[error("invalid amplitude: {amplitude} (expected a value in (0, 1])")]
    InvalidAmplitude {
        /// The invalid amplitude.
        amplitude: f64,
    },

    /// The writer was handed a buffer with no samples.
    #[error("sample buffer is empty")]
    EmptyBuffer,

    /// Sample width the writer cannot encode.
    #[error("unsupported sample width: {bytes} bytes (only 2-byte PCM is supported)")]
    UnsupportedSampleWidth {
        /// Requested width in bytes.
        bytes: u16,
    },

    /// Channel count is zero or does not divide the sample count.
    #[error("invalid channel count {channels} for {num_samples} samples")]
    InvalidChannelCount {
        /// Requested channel count.
        channels: u16,
        /// Number of samples supplied.
        num_samples: usize,
    },

    /// Two buffers with different sample rates were concatenated.
    #[error("sample rate mismatch: expected {expected} Hz, found {found} Hz")]
    SampleRateMismatch {
        /// Rate of the receiving buffer.
        expected: u32,
        /// Rate of the appended buffer.
        found: u32,
    },

    /// Bytes that do not form a readable PCM16 WAV file.
    #[error("malformed WAV data: {message}")]
    MalformedWav {
        /// What was wrong.
        message: String,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// I/O error while creating directories or writing the output file.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path being written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl AudioError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates a malformed WAV error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedWav {
            message: message.into(),
        }
    }

    /// Creates an I/O error tagged with the path it happened at.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns true for errors raised by input validation (before any I/O).
    pub fn is_validation(&self) -> bool {
        !matches!(self, AudioError::Io { .. })
    }

    /// Stable error code for reports.
    pub fn code(&self) -> &'static str {
        match self {
            AudioError::InvalidSampleRate { .. } => "AUDIO_001",
            AudioError::InvalidDuration { .. } => "AUDIO_002",
            AudioError::InvalidFrequency { .. } => "AUDIO_003",
            AudioError::InvalidAmplitude { .. } => "AUDIO_004",
            AudioError::EmptyBuffer => "AUDIO_005",
            AudioError::UnsupportedSampleWidth { .. } => "AUDIO_006",
            AudioError::InvalidChannelCount { .. } => "AUDIO_007",
            AudioError::SampleRateMismatch { .. } => "AUDIO_008",
            AudioError::MalformedWav { .. } => "AUDIO_009",
            AudioError::InvalidParameter { .. } => "AUDIO_010",
            AudioError::Io { .. } => "AUDIO_011",
        }
    }
}
