//! Morphological dilation with a rectangular structuring element.
//!
//! Text-line localization relies on a horizontally elongated kernel to
//! merge per-character edge fragments along a line into a single connected
//! blob while keeping separate lines apart. Norm-ball structuring elements
//! cannot express that asymmetry, hence the dedicated rectangular variant.

use image::GrayImage;

/// Dilates a grayscale image with a `kernel_width` x `kernel_height`
/// rectangular structuring element anchored at its center
/// (`width / 2`, `height / 2`).
///
/// Each output pixel is the maximum of the input pixels covered by the
/// kernel; for binary images this is a logical OR of shifted copies.
/// Returns a new image of the same dimensions.
pub fn dilate_rect(image: &GrayImage, kernel_width: u32, kernel_height: u32) -> GrayImage {
    let kernel_width = kernel_width.max(1);
    let kernel_height = kernel_height.max(1);

    let horizontal = dilate_axis(image, kernel_width, true);
    dilate_axis(&horizontal, kernel_height, false)
}

/// One separable pass of the rectangular dilation along a single axis.
fn dilate_axis(image: &GrayImage, kernel: u32, horizontal: bool) -> GrayImage {
    if kernel == 1 {
        return image.clone();
    }
    let (width, height) = image.dimensions();
    let anchor = (kernel / 2) as i64;
    // Kernel taps relative to the anchor: [-anchor, kernel - 1 - anchor].
    let lo = -anchor;
    let hi = kernel as i64 - 1 - anchor;

    let mut output = GrayImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let mut max = 0u8;
            for d in lo..=hi {
                let (sx, sy) = if horizontal {
                    (x as i64 + d, y as i64)
                } else {
                    (x as i64, y as i64 + d)
                };
                if sx < 0 || sy < 0 || sx >= width as i64 || sy >= height as i64 {
                    continue;
                }
                max = max.max(image.get_pixel(sx as u32, sy as u32)[0]);
                if max == u8::MAX {
                    break;
                }
            }
            output.put_pixel(x, y, image::Luma([max]));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn test_single_pixel_spreads_to_kernel_footprint() {
        let mut image = GrayImage::new(50, 50);
        image.put_pixel(20, 20, Luma([255]));

        let dilated = dilate_rect(&image, 10, 2);

        let lit: Vec<(u32, u32)> = dilated
            .enumerate_pixels()
            .filter(|(_, _, p)| p[0] > 0)
            .map(|(x, y, _)| (x, y))
            .collect();

        // Anchor at (5, 1): x spreads to [16, 25], y to [20, 21].
        assert_eq!(lit.len(), 20);
        assert!(lit.iter().all(|&(x, y)| (16..=25).contains(&x) && (20..=21).contains(&y)));
    }

    #[test]
    fn test_merges_nearby_fragments_horizontally() {
        // Two fragments 8 pixels apart on the same row; a 10-wide kernel
        // bridges the gap into one run.
        let mut image = GrayImage::new(60, 10);
        image.put_pixel(20, 5, Luma([255]));
        image.put_pixel(28, 5, Luma([255]));

        let dilated = dilate_rect(&image, 10, 2);
        let run: Vec<u32> = (0..60).filter(|&x| dilated.get_pixel(x, 5)[0] > 0).collect();

        // Contiguous span between the spread fragments.
        assert_eq!(run.first(), Some(&16));
        assert_eq!(run.last(), Some(&33));
        assert_eq!(run.len() as u32, 33 - 16 + 1);
    }

    #[test]
    fn test_identity_kernel_is_noop() {
        let mut image = GrayImage::new(10, 10);
        image.put_pixel(3, 7, Luma([200]));
        assert_eq!(dilate_rect(&image, 1, 1), image);
    }

    #[test]
    fn test_clips_at_image_border() {
        let mut image = GrayImage::new(8, 8);
        image.put_pixel(0, 0, Luma([255]));
        let dilated = dilate_rect(&image, 10, 2);
        assert_eq!(dilated.dimensions(), (8, 8));
        assert_eq!(dilated.get_pixel(0, 0)[0], 255);
    }
}
