//! Adaptive binarization.
//!
//! Each pixel's foreground/background decision depends on a local
//! Gaussian-weighted mean rather than a single global threshold, which
//! keeps text strokes separable under uneven scan illumination.

use image::{GrayImage, Luma};
use imageproc::filter::separable_filter_equal;

/// A processor applying Gaussian-weighted adaptive thresholding.
///
/// A pixel becomes background (255) when it is brighter than the local
/// mean minus the offset constant, and foreground (0) otherwise, so dark
/// text lands on the zero polarity.
#[derive(Debug, Clone)]
pub struct AdaptiveThreshold {
    /// Side length of the square weighting neighborhood. Forced odd.
    block_size: u32,
    /// Constant subtracted from the local mean before comparison.
    offset: i16,
}

impl AdaptiveThreshold {
    /// Creates a new adaptive threshold processor.
    ///
    /// # Arguments
    ///
    /// * `block_size` - Neighborhood side length; even values are bumped to
    ///   the next odd value.
    /// * `offset` - Constant subtracted from the local mean.
    pub fn new(block_size: u32, offset: i16) -> Self {
        let block_size = if block_size % 2 == 0 {
            block_size + 1
        } else {
            block_size
        };
        Self { block_size, offset }
    }

    /// Returns the neighborhood side length.
    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    /// Applies the threshold, returning a binary image (0 or 255) of the
    /// same dimensions. Pure function of the input.
    pub fn apply(&self, image: &GrayImage) -> GrayImage {
        let kernel = gaussian_kernel(self.block_size as usize, sigma_for(self.block_size));
        let local_mean = separable_filter_equal(image, &kernel);

        let mut output = GrayImage::new(image.width(), image.height());
        for (x, y, pixel) in image.enumerate_pixels() {
            let mean = local_mean.get_pixel(x, y)[0] as i16;
            let value = if pixel[0] as i16 > mean - self.offset {
                255
            } else {
                0
            };
            output.put_pixel(x, y, Luma([value]));
        }
        output
    }
}

impl Default for AdaptiveThreshold {
    /// Creates an adaptive threshold with an 11x11 neighborhood and an
    /// offset constant of 2.
    fn default() -> Self {
        Self::new(11, 2)
    }
}

/// Sigma derived from the kernel size, matching the conventional
/// `0.3 * ((ksize - 1) * 0.5 - 1) + 0.8` rule for Gaussian neighborhoods.
fn sigma_for(block_size: u32) -> f32 {
    0.3 * ((block_size as f32 - 1.0) * 0.5 - 1.0) + 0.8
}

/// Normalized 1-D Gaussian weighting kernel.
fn gaussian_kernel(ksize: usize, sigma: f32) -> Vec<f32> {
    let center = (ksize / 2) as f32;
    let mut kernel: Vec<f32> = (0..ksize)
        .map(|i| {
            let d = i as f32 - center;
            (-d * d / (2.0 * sigma * sigma)).exp()
        })
        .collect();
    let sum: f32 = kernel.iter().sum();
    for weight in &mut kernel {
        *weight /= sum;
    }
    kernel
}

#[cfg(test)]
mod tests {
    use super::*;
    use imageproc::drawing::draw_filled_rect_mut;
    use imageproc::rect::Rect;

    #[test]
    fn test_even_block_size_is_bumped_to_odd() {
        assert_eq!(AdaptiveThreshold::new(10, 2).block_size(), 11);
        assert_eq!(AdaptiveThreshold::new(11, 2).block_size(), 11);
    }

    #[test]
    fn test_kernel_is_normalized() {
        let kernel = gaussian_kernel(11, sigma_for(11));
        let sum: f32 = kernel.iter().sum();
        assert!((sum - 1.0).abs() < 1e-5);
        // Symmetric around the center tap.
        assert!((kernel[0] - kernel[10]).abs() < 1e-6);
        assert!(kernel[5] > kernel[0]);
    }

    #[test]
    fn test_white_page_stays_background() {
        let image = GrayImage::from_pixel(64, 64, Luma([255]));
        let out = AdaptiveThreshold::default().apply(&image);
        assert!(out.pixels().all(|p| p[0] == 255));
    }

    #[test]
    fn test_dark_mark_becomes_foreground() {
        let mut image = GrayImage::from_pixel(64, 64, Luma([255]));
        draw_filled_rect_mut(&mut image, Rect::at(28, 28).of_size(8, 8), Luma([0]));

        let out = AdaptiveThreshold::default().apply(&image);
        // The mark edge sits well below the local mean of its neighborhood.
        assert_eq!(out.get_pixel(28, 28)[0], 0);
        // Far-away background is untouched.
        assert_eq!(out.get_pixel(5, 5)[0], 255);
    }

    #[test]
    fn test_output_is_binary() {
        let mut image = GrayImage::new(48, 48);
        for (x, y, p) in image.enumerate_pixels_mut() {
            *p = Luma([((x * 7 + y * 13) % 256) as u8]);
        }
        let out = AdaptiveThreshold::default().apply(&image);
        assert!(out.pixels().all(|p| p[0] == 0 || p[0] == 255));
    }
}
