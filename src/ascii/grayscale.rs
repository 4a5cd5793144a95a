//! RGB to grayscale conversion.

/// Convert an RGB triple to a luma value.
///
/// The formula is: Y = 0.30*R + 0.59*G + 0.11*B, truncated toward zero.
///
/// The sum is computed in `f64` so the truncation matches floating-point
/// evaluation exactly: mid gray `(128, 128, 128)` lands on 127, not 128.
/// The result never exceeds 255 since the weights sum to 1.0.
#[inline]
pub fn grayscale_color(r: u8, g: u8, b: u8) -> u8 {
    let luma = 0.3 * r as f64 + 0.59 * g as f64 + 0.11 * b as f64;
    luma as u8
}
