//! Fixed-stride sampling of a source image into a coarse grid.

use crate::source::SourceImage;

/// RGB color of one sampled pixel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PixelSample {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl PixelSample {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Dense row-major grid of sampled pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampledGrid {
    rows: usize,
    cols: usize,
    cells: Vec<PixelSample>,
}

impl SampledGrid {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Sample at `(row, col)`, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<PixelSample> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.cells[row * self.cols + col])
    }

    /// Iterate rows in order, each as a slice of `cols` samples.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[PixelSample]> {
        // chunks_exact panics on 0; an empty grid yields no rows either way
        self.cells.chunks_exact(self.cols.max(1))
    }
}

/// Sample one pixel every `stride` pixels along both axes.
///
/// Starting at `(0, 0)`, takes the pixel at each `(x, y)` where both
/// coordinates are multiples of `stride`. The grid has
/// `ceil(height / stride)` rows and `ceil(width / stride)` columns.
///
/// # Arguments
/// * `source` - Decoded source image
/// * `stride` - Pixel interval between samples (must be non-zero)
///
/// # Panics
/// If `stride` is zero.
pub fn sample_pixel_colors(source: &SourceImage, stride: u32) -> SampledGrid {
    assert!(stride > 0, "sample stride must be non-zero");

    let width = source.width();
    let height = source.height();
    let rows = height.div_ceil(stride) as usize;
    let cols = width.div_ceil(stride) as usize;

    let mut cells = Vec::with_capacity(rows * cols);
    for y in (0..height).step_by(stride as usize) {
        for x in (0..width).step_by(stride as usize) {
            cells.push(source.pixel(x, y));
        }
    }

    log::debug!(
        "Sampled {}x{} image at stride {} into {}x{} grid",
        width,
        height,
        stride,
        cols,
        rows
    );

    SampledGrid { rows, cols, cells }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgb, RgbImage};

    fn source_from_fn(width: u32, height: u32, f: impl Fn(u32, u32) -> [u8; 3]) -> SourceImage {
        let img = RgbImage::from_fn(width, height, |x, y| Rgb(f(x, y)));
        SourceImage::from_image(DynamicImage::ImageRgb8(img), 1024).unwrap()
    }

    #[test]
    fn test_grid_dimensions_round_up() {
        let source = source_from_fn(25, 11, |_, _| [0, 0, 0]);
        let grid = sample_pixel_colors(&source, 10);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
    }

    #[test]
    fn test_grid_dimensions_exact_multiple() {
        let source = source_from_fn(20, 10, |_, _| [0, 0, 0]);
        let grid = sample_pixel_colors(&source, 10);
        assert_eq!(grid.rows(), 1);
        assert_eq!(grid.cols(), 2);
    }

    #[test]
    fn test_samples_top_left_of_each_cell() {
        // Encode coordinates into the pixel so we can see which one was read
        let source = source_from_fn(7, 5, |x, y| [x as u8, y as u8, 0]);
        let grid = sample_pixel_colors(&source, 3);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.get(0, 0), Some(PixelSample::new(0, 0, 0)));
        assert_eq!(grid.get(0, 2), Some(PixelSample::new(6, 0, 0)));
        assert_eq!(grid.get(1, 1), Some(PixelSample::new(3, 3, 0)));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 3), None);
    }

    #[test]
    fn test_iter_rows_is_row_major() {
        let source = source_from_fn(4, 4, |x, y| [x as u8, y as u8, 0]);
        let grid = sample_pixel_colors(&source, 2);
        let rows: Vec<Vec<(u8, u8)>> = grid
            .iter_rows()
            .map(|row| row.iter().map(|p| (p.r, p.g)).collect())
            .collect();
        assert_eq!(rows, vec![vec![(0, 0), (2, 0)], vec![(0, 2), (2, 2)]]);
    }

    #[test]
    fn test_stride_larger_than_image() {
        let source = source_from_fn(3, 2, |_, _| [9, 9, 9]);
        let grid = sample_pixel_colors(&source, 10);
        assert_eq!(grid.rows(), 1);
        assert_eq!(grid.cols(), 1);
        assert_eq!(grid.get(0, 0), Some(PixelSample::new(9, 9, 9)));
    }

    #[test]
    #[should_panic(expected = "non-zero")]
    fn test_zero_stride_panics() {
        let source = source_from_fn(3, 2, |_, _| [0, 0, 0]);
        sample_pixel_colors(&source, 0);
    }
}
