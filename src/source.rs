//! Decoded source image with a bounded width.

use std::path::Path;

use image::{imageops::FilterType, DynamicImage, ImageReader, RgbImage};

use crate::ascii::PixelSample;
use crate::error::{AsciiError, Result};

/// Widest image kept in memory; wider images are scaled down to this.
pub const DEFAULT_MAX_WIDTH: u32 = 1024;

/// Decoded RGB pixel data, read-only after construction.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pixels: RgbImage,
}

impl SourceImage {
    /// Load and decode an image file.
    ///
    /// Checks the path exists before touching its contents, so a missing
    /// file always reports [`AsciiError::NotFound`] rather than a decode
    /// failure.
    pub fn open(path: &Path, max_width: u32) -> Result<Self> {
        if !path.exists() {
            return Err(AsciiError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let bytes = std::fs::read(path).map_err(|e| AsciiError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let decoded = ImageReader::new(std::io::Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| AsciiError::Read {
                path: path.to_path_buf(),
                source: e,
            })?
            .decode()
            .map_err(|e| AsciiError::Decode {
                path: path.to_path_buf(),
                source: e,
            })?;

        log::debug!(
            "Decoded {} ({}x{})",
            path.display(),
            decoded.width(),
            decoded.height()
        );

        Self::from_image(decoded, max_width)
    }

    /// Wrap an already decoded image, downscaling it if wider than `max_width`.
    ///
    /// The height is scaled by the same factor and truncated. Fails with
    /// [`AsciiError::Dimension`] if either side is zero before or after
    /// scaling, and with [`AsciiError::InvalidMaxWidth`] if `max_width` is 0.
    pub fn from_image(image: DynamicImage, max_width: u32) -> Result<Self> {
        if max_width == 0 {
            return Err(AsciiError::InvalidMaxWidth { value: max_width });
        }
        let (width, height) = (image.width(), image.height());
        check_dimensions(width, height)?;

        let image = if width > max_width {
            let new_height = (height as u64 * max_width as u64 / width as u64) as u32;
            check_dimensions(max_width, new_height)?;
            log::debug!(
                "Downscaling {}x{} to {}x{}",
                width,
                height,
                max_width,
                new_height
            );
            image.resize_exact(max_width, new_height, FilterType::Triangle)
        } else {
            image
        };

        Ok(Self {
            pixels: image.to_rgb8(),
        })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// RGB value at `(x, y)`. Alpha, if the source had any, is dropped.
    ///
    /// # Panics
    /// If `(x, y)` is outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> PixelSample {
        let [r, g, b] = self.pixels.get_pixel(x, y).0;
        PixelSample { r, g, b }
    }
}

fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(AsciiError::Dimension { width, height });
    }
    Ok(())
}
