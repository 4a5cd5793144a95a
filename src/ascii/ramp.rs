//! Character ramp used to quantize luma into glyphs.

use crate::error::{AsciiError, Result};

/// Default glyphs, listed from lightest to darkest.
///
/// [`CharacterRamp::default`] reverses this so index 0 is the darkest glyph.
pub const DEFAULT_RAMP: &str = ".~:;!jX0@#";

/// An ordered list of glyphs, darkest first.
///
/// The ramp length doubles as the sampling stride: a longer ramp samples
/// the source image more sparsely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRamp {
    glyphs: Vec<char>,
}

impl CharacterRamp {
    /// Build a ramp from glyphs declared lightest first, reversing them.
    pub fn from_light_to_dark(glyphs: &str) -> Result<Self> {
        Self::new(glyphs.chars().rev().collect())
    }

    /// Build a ramp from glyphs already ordered darkest first.
    pub fn new(glyphs: Vec<char>) -> Result<Self> {
        if glyphs.len() < 2 {
            return Err(AsciiError::InvalidRamp { len: glyphs.len() });
        }
        Ok(Self { glyphs })
    }

    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always false; a ramp holds at least two glyphs.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Pixel interval between samples, equal to the ramp length.
    pub fn stride(&self) -> u32 {
        self.glyphs.len() as u32
    }

    /// Index into the ramp for a luma value.
    ///
    /// `index = trunc((luma / 255) * (N - 1))`, clamped to `N - 1`.
    #[inline]
    pub fn index_for(&self, luma: u8) -> usize {
        let last = self.glyphs.len() - 1;
        let idx = ((luma as f64 / 255.0) * last as f64) as usize;
        idx.min(last)
    }

    /// Glyph for a luma value.
    #[inline]
    pub fn grayscale_to_char(&self, luma: u8) -> char {
        self.glyphs[self.index_for(luma)]
    }
}

impl Default for CharacterRamp {
    fn default() -> Self {
        Self {
            glyphs: DEFAULT_RAMP.chars().rev().collect(),
        }
    }
}
