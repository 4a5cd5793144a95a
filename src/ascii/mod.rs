//! ASCII renderer module for converting images to ASCII art.
//!
//! The pipeline runs in three steps:
//!
//! 1. **Sampling** - take one pixel every `stride` pixels on both axes
//! 2. **Grayscale conversion** - RGB to luma with 0.30/0.59/0.11 weights
//! 3. **Character mapping** - quantize luma onto a [`CharacterRamp`]
//!
//! [`create_ascii_image`] drives steps 2 and 3 over a sampled grid and
//! produces either plain text or an HTML fragment.

mod grayscale;
mod ramp;
mod render;
mod sample;

pub use grayscale::grayscale_color;
pub use ramp::{CharacterRamp, DEFAULT_RAMP};
pub use render::{create_ascii_image, RenderMode, LINE_ENDING};
pub use sample::{sample_pixel_colors, PixelSample, SampledGrid};
