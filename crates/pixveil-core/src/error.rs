use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PixveilError {
    /// Represents a bit depth outside of 1..=7, it is never clamped
    #[error("Invalid parameter: bit depth {0} is out of range, expected 1 to 7")]
    InvalidParameter(u8),

    /// Represents a cover and secret image pair without a common area
    #[error("Cover and secret image share no common area, the crop would be {width}x{height}")]
    DegenerateCrop { width: u32, height: u32 },

    /// Represents malformed or unreadable image bytes. For example, a broken PNG file
    #[error("Image could not be decoded")]
    DecodeFailure(#[source] image::ImageError),

    /// Represents a failure when encoding the resulting image.
    #[error("Image encoding error")]
    ImageEncodingError(#[source] image::ImageError),

    /// Represents an output path that would not preserve the low bits
    #[error("Output format is not supported, only lossless PNG is allowed: {0:?}")]
    UnsupportedOutputFormat(PathBuf),

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    #[error("No cover image set")]
    CarrierNotSet,

    #[error("No secret image set")]
    SecretImageNotSet,

    #[error("No target file set")]
    TargetNotSet,
}
