//! Image to ASCII conversion pipeline.
//!
//! An [`AsciiImage`] owns one decoded source image and one character ramp.
//! Each render call samples the image at `stride = ramp length`, maps every
//! sample to a glyph and returns a freshly built string, so calling it
//! repeatedly on the same instance always produces the same output.

use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::ascii::{create_ascii_image, sample_pixel_colors, CharacterRamp, RenderMode, SampledGrid};
use crate::error::Result;
use crate::source::{SourceImage, DEFAULT_MAX_WIDTH};
use crate::writer::Writer;

/// Settings for building an [`AsciiImage`].
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Glyphs used for quantization; its length is also the sample stride
    pub ramp: CharacterRamp,
    /// Images wider than this are scaled down on load
    pub max_width: u32,
    /// Directory that file output is written into
    pub output_dir: PathBuf,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            ramp: CharacterRamp::default(),
            max_width: DEFAULT_MAX_WIDTH,
            output_dir: PathBuf::from("."),
        }
    }
}

/// A loaded image ready to be rendered as ASCII art.
#[derive(Debug, Clone)]
pub struct AsciiImage {
    source: SourceImage,
    ramp: CharacterRamp,
    writer: Writer,
}

impl AsciiImage {
    /// Load an image with default options.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(path, PipelineOptions::default())
    }

    /// Load an image with custom options.
    ///
    /// # Errors
    /// * [`AsciiError::NotFound`](crate::AsciiError::NotFound) - path does not exist
    /// * [`AsciiError::Decode`](crate::AsciiError::Decode) - not a recognized image
    /// * [`AsciiError::Dimension`](crate::AsciiError::Dimension) - zero width or height
    pub fn open_with(path: impl AsRef<Path>, options: PipelineOptions) -> Result<Self> {
        let source = SourceImage::open(path.as_ref(), options.max_width)?;
        Ok(Self::assemble(source, options))
    }

    /// Build from an image already in memory.
    pub fn from_image(image: DynamicImage, options: PipelineOptions) -> Result<Self> {
        let source = SourceImage::from_image(image, options.max_width)?;
        Ok(Self::assemble(source, options))
    }

    fn assemble(source: SourceImage, options: PipelineOptions) -> Self {
        Self {
            source,
            ramp: options.ramp,
            writer: Writer::new(options.output_dir),
        }
    }

    pub fn width(&self) -> u32 {
        self.source.width()
    }

    pub fn height(&self) -> u32 {
        self.source.height()
    }

    pub fn ramp(&self) -> &CharacterRamp {
        &self.ramp
    }

    /// Sample the source at a stride equal to the ramp length.
    pub fn sample(&self) -> SampledGrid {
        sample_pixel_colors(&self.source, self.ramp.stride())
    }

    /// Render in the given mode without touching the filesystem.
    pub fn render(&self, mode: RenderMode) -> String {
        let grid = self.sample();
        create_ascii_image(&grid, &self.ramp, mode)
    }

    /// Render as plain text.
    pub fn render_text(&self) -> String {
        self.render(RenderMode::File)
    }

    /// Render as plain text and save it into the output directory.
    ///
    /// `name` defaults to `ascii_<YYMMDDHHMMSS>.txt`; `.txt` is appended when
    /// missing. Returns the path that was written.
    pub fn create_ascii_to_file(&self, name: Option<&str>) -> Result<PathBuf> {
        let text = self.render_text();
        self.writer.save_file(&text, name)
    }

    /// Render as an HTML fragment.
    pub fn create_ascii_to_html(&self) -> String {
        self.render(RenderMode::Html)
    }
}
