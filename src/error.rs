use thiserror::Error;

/// Per-file conversion failures.
///
/// These are non-fatal to a batch: the offending file is reported and
/// skipped, and the run continues with the next file.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Cannot open file: {0}")]
    Open(#[source] std::io::Error),

    #[error("Cannot decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Cannot plan output size: {0}")]
    Resize(#[from] retro_dither::ResizeError),

    #[error("Output too large for GIF: {width}x{height} (max 65535)")]
    TooLarge { width: u32, height: u32 },

    #[error("GIF encode error: {0}")]
    Encode(#[from] gif::EncodingError),

    #[error("Cannot write output: {0}")]
    Write(#[source] std::io::Error),
}

/// Invocation-level configuration failures.
///
/// Detected before any file is opened; fatal to the whole run.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown graphics mode: {0}")]
    UnknownMode(String),

    #[error(transparent)]
    Background(#[from] retro_dither::ModeError),
}
