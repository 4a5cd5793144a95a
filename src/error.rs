//! Error types for image loading, rendering and saving.

use std::path::PathBuf;

/// Errors that can occur while converting an image to ASCII art.
#[derive(Debug, thiserror::Error)]
pub enum AsciiError {
    /// Image path does not exist
    #[error("Image file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Image file exists but could not be read
    #[error("Failed to read image file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Bytes are not a recognized image format
    #[error("Failed to decode image '{}': {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Width or height is zero after loading or downscaling
    #[error("Could not get a usable image size ({width}x{height})")]
    Dimension { width: u32, height: u32 },

    /// Writing the rendered output failed
    #[error("Failed to write ASCII output to '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Width ceiling of zero would scale every image away
    #[error("max_width must be at least 1, got {value}")]
    InvalidMaxWidth { value: u32 },

    /// Character ramp is too short to quantize anything
    #[error("Character ramp needs at least 2 glyphs, got {len}")]
    InvalidRamp { len: usize },
}

pub type Result<T> = std::result::Result<T, AsciiError>;
