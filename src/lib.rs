//! img-ascii library crate.
//!
//! Converts raster images into ASCII art by sampling the image at a fixed
//! stride, converting each sample to luma and looking the luma up in a
//! character ramp.
//!
//! ```no_run
//! use img_ascii::AsciiImage;
//!
//! let ascii = AsciiImage::open("photo.png")?;
//! let path = ascii.create_ascii_to_file(None)?;
//! println!("saved to {}", path.display());
//! # Ok::<(), img_ascii::AsciiError>(())
//! ```

pub mod ascii;
pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod source;
pub mod writer;

pub use ascii::{CharacterRamp, PixelSample, RenderMode, SampledGrid};
pub use error::{AsciiError, Result};
pub use pipeline::{AsciiImage, PipelineOptions};
pub use source::SourceImage;
pub use writer::Writer;
