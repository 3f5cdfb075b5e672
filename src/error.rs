//! Error types for generation and download.

use thiserror::Error;

/// Result type alias for the generation pipeline.
pub type Result<T> = std::result::Result<T, GenerateError>;

/// Errors produced while turning text into an exported image.
///
/// The `Display` text is exactly what the generator shows to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// The text was empty or whitespace only.
    #[error("invalid input")]
    EmptyInput,

    /// The encoder rejected the payload, or the surface could not be exported.
    #[error("generation failed: {0}")]
    EncodingFailure(String),
}

/// Errors produced while saving an exported image.
#[derive(Error, Debug)]
pub enum DownloadError {
    /// The content handed to a save target was not a base64 PNG data URI.
    #[error("invalid data URI: {0}")]
    InvalidDataUri(String),

    /// Writing the file failed.
    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),
}
