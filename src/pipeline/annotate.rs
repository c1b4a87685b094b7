//! Region annotation overlays for inspection and debugging.

use crate::domain::TextRegion;
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;

const OUTLINE_COLOR: Rgb<u8> = Rgb([0, 255, 0]);

const OUTLINE_THICKNESS: i32 = 2;

/// Renders detected regions as rectangle outlines on a copy of the
/// original page raster. Purely presentational; the input image is never
/// modified, and out-of-bounds outline rings are skipped rather than
/// treated as failures.
#[derive(Debug, Clone)]
pub struct PageAnnotator {
    color: Rgb<u8>,
    thickness: i32,
}

impl PageAnnotator {
    /// Creates an annotator with the default styling (green outlines,
    /// thickness 2).
    pub fn new() -> Self {
        Self {
            color: OUTLINE_COLOR,
            thickness: OUTLINE_THICKNESS,
        }
    }

    /// Returns a copy of `original` with every region outlined.
    pub fn annotate(&self, original: &RgbImage, regions: &[TextRegion]) -> RgbImage {
        let mut annotated = original.clone();
        for region in regions {
            self.draw_outline(&mut annotated, region);
        }
        annotated
    }

    /// Draws one region outline, thickening outward ring by ring.
    fn draw_outline(&self, image: &mut RgbImage, region: &TextRegion) {
        let (image_width, image_height) = (image.width() as i32, image.height() as i32);
        let rect = Rect::at(region.x as i32, region.y as i32).of_size(region.width, region.height);

        for ring in 0..self.thickness {
            let thick_rect = Rect::at(rect.left() - ring, rect.top() - ring)
                .of_size(rect.width() + (2 * ring) as u32, rect.height() + (2 * ring) as u32);

            if is_rect_in_bounds(&thick_rect, image_width, image_height) {
                draw_hollow_rect_mut(image, thick_rect, self.color);
            }
        }
    }
}

impl Default for PageAnnotator {
    fn default() -> Self {
        Self::new()
    }
}

/// Checks that all sides of a rectangle lie within the image.
fn is_rect_in_bounds(rect: &Rect, image_width: i32, image_height: i32) -> bool {
    rect.left() >= 0 && rect.top() >= 0 && rect.right() < image_width && rect.bottom() < image_height
}
