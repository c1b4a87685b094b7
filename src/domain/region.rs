//! Text region types.

use serde::{Deserialize, Serialize};

/// An axis-aligned text-line region in pixel coordinates relative to the
/// page image.
///
/// Invariant: `width > 0`, `height > 0`, and the rectangle lies within the
/// bounds of the image it was detected on. Regions are created by the
/// detector and immutable thereafter.
///
/// Serialized as a four-integer `[x, y, width, height]` array to match the
/// document record wire shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u32; 4]", into = "[u32; 4]")]
pub struct TextRegion {
    /// Left coordinate of the region.
    pub x: u32,
    /// Top coordinate of the region.
    pub y: u32,
    /// Width of the region in pixels.
    pub width: u32,
    /// Height of the region in pixels.
    pub height: u32,
}

impl TextRegion {
    /// Creates a new region from its top-left corner and size.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the exclusive right edge coordinate (`x + width`).
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Returns the exclusive bottom edge coordinate (`y + height`).
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Returns the width/height aspect ratio.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Returns true if the point `(px, py)` lies inside the region.
    pub fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Returns true if `other` lies entirely inside this region.
    pub fn contains_region(&self, other: &TextRegion) -> bool {
        self.x <= other.x
            && self.y <= other.y
            && self.right() >= other.right()
            && self.bottom() >= other.bottom()
    }

    /// Returns true if the region lies entirely within an image of the
    /// given dimensions.
    pub fn fits_within(&self, image_width: u32, image_height: u32) -> bool {
        self.width > 0
            && self.height > 0
            && self.right() <= image_width
            && self.bottom() <= image_height
    }
}

impl From<[u32; 4]> for TextRegion {
    fn from(value: [u32; 4]) -> Self {
        Self::new(value[0], value[1], value[2], value[3])
    }
}

impl From<TextRegion> for [u32; 4] {
    fn from(region: TextRegion) -> Self {
        [region.x, region.y, region.width, region.height]
    }
}

/// Pairs a detected region with its extracted text (possibly empty).
///
/// Empty-text results are dropped before being recorded in a page's text
/// content list, but the geometry is still recorded among the page's
/// detected regions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionTextResult {
    /// The detected text-line region.
    pub region: TextRegion,
    /// The extracted text, with leading/trailing whitespace stripped.
    /// Empty for false-positive regions and recovered OCR failures.
    pub text: String,
}

impl RegionTextResult {
    /// Creates a new region/text pair.
    pub fn new(region: TextRegion, text: String) -> Self {
        Self { region, text }
    }

    /// Returns true if the extracted text is non-empty.
    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_edges_and_containment() {
        let region = TextRegion::new(50, 50, 200, 30);
        assert_eq!(region.right(), 250);
        assert_eq!(region.bottom(), 80);
        assert!(region.contains(150, 65));
        assert!(!region.contains(49, 65));
        assert!(!region.contains(250, 65));
    }

    #[test]
    fn test_region_aspect_ratio() {
        let region = TextRegion::new(0, 0, 100, 25);
        assert_eq!(region.aspect_ratio(), 4.0);
    }

    #[test]
    fn test_contains_region() {
        let outer = TextRegion::new(10, 10, 100, 40);
        let inner = TextRegion::new(20, 15, 50, 20);
        assert!(outer.contains_region(&inner));
        assert!(!inner.contains_region(&outer));
        assert!(outer.contains_region(&outer));
    }

    #[test]
    fn test_fits_within_bounds() {
        let region = TextRegion::new(50, 50, 200, 30);
        assert!(region.fits_within(250, 80));
        assert!(!region.fits_within(249, 80));
        assert!(!region.fits_within(250, 79));
        assert!(!TextRegion::new(0, 0, 0, 10).fits_within(100, 100));
    }

    #[test]
    fn test_region_serializes_as_four_integer_tuple() {
        let region = TextRegion::new(1, 2, 3, 4);
        let json = serde_json::to_string(&region).unwrap();
        assert_eq!(json, "[1,2,3,4]");

        let back: TextRegion = serde_json::from_str(&json).unwrap();
        assert_eq!(back, region);
    }

    #[test]
    fn test_region_text_result_has_text() {
        let region = TextRegion::new(0, 0, 50, 20);
        assert!(RegionTextResult::new(region, "hello".to_string()).has_text());
        assert!(!RegionTextResult::new(region, String::new()).has_text());
    }
}
