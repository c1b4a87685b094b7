//! Edge-based text-line region detection.

use crate::core::DetectionParams;
use crate::domain::TextRegion;
use crate::processors::dilate_rect;
use image::GrayImage;
use imageproc::contours::{find_contours, BorderType, Contour};
use imageproc::edges::canny;
use imageproc::filter::gaussian_blur_f32;
use tracing::debug;

/// Proposes candidate text-line bounding boxes on a (preferably
/// preprocessed) page image using edge/contour heuristics.
///
/// The detector blurs lightly, extracts a sparse Canny edge map, dilates it
/// with a horizontally elongated structuring element so per-character edge
/// fragments merge into per-line blobs, takes the bounding rectangle of
/// each external contour, and keeps only rectangles shaped like a text
/// line. Survivors are sorted top-to-bottom, establishing the canonical
/// region order for all downstream consumers; same-row ties keep their
/// extraction order (the sort is stable).
///
/// No overlap suppression is performed by default: overlapping proposals
/// are an accepted limitation of the heuristic. Containment-based
/// suppression can be opted into per configuration.
#[derive(Debug, Clone)]
pub struct RegionDetector {
    params: DetectionParams,
    suppress_overlaps: bool,
}

impl RegionDetector {
    /// Creates a detector with the given parameters.
    pub fn new(params: DetectionParams, suppress_overlaps: bool) -> Self {
        Self {
            params,
            suppress_overlaps,
        }
    }

    /// Returns the detection parameters.
    pub fn params(&self) -> &DetectionParams {
        &self.params
    }

    /// Detects text-line regions, returning them sorted by top coordinate.
    ///
    /// The output is a finite, possibly-empty sequence. Every returned
    /// region lies within the image bounds and satisfies the size/aspect
    /// filter. Rectangles may overlap unless suppression is enabled.
    pub fn detect(&self, image: &GrayImage) -> Vec<TextRegion> {
        let blurred = gaussian_blur_f32(image, self.params.blur_sigma);
        let edges = canny(&blurred, self.params.canny_low, self.params.canny_high);
        let dilated = dilate_rect(&edges, self.params.dilate_width, self.params.dilate_height);

        let contours = find_contours::<i32>(&dilated);
        let mut regions: Vec<TextRegion> = contours
            .iter()
            .filter(|contour| contour.border_type == BorderType::Outer)
            .filter_map(bounding_region)
            .filter(|region| self.is_text_line(region))
            .collect();

        regions.sort_by_key(|region| region.y);

        if self.suppress_overlaps {
            regions = suppress_contained(regions);
        }

        debug!(count = regions.len(), "detected text line regions");
        regions
    }

    /// The text-line prior: wide, short, strongly landscape-oriented.
    fn is_text_line(&self, region: &TextRegion) -> bool {
        region.width > self.params.min_width
            && region.height > self.params.min_height
            && region.height < self.params.max_height
            && region.aspect_ratio() > self.params.min_aspect
    }
}

/// Axis-aligned bounding rectangle of one contour.
fn bounding_region(contour: &Contour<i32>) -> Option<TextRegion> {
    let first = contour.points.first()?;
    let (mut min_x, mut max_x, mut min_y, mut max_y) = (first.x, first.x, first.y, first.y);
    for point in &contour.points[1..] {
        min_x = min_x.min(point.x);
        max_x = max_x.max(point.x);
        min_y = min_y.min(point.y);
        max_y = max_y.max(point.y);
    }
    Some(TextRegion::new(
        min_x as u32,
        min_y as u32,
        (max_x - min_x + 1) as u32,
        (max_y - min_y + 1) as u32,
    ))
}

/// Drops regions fully contained in another region, keeping the earlier of
/// two identical rectangles. Preserves the top-to-bottom order.
fn suppress_contained(regions: Vec<TextRegion>) -> Vec<TextRegion> {
    let mut kept = Vec::with_capacity(regions.len());
    'candidates: for (i, region) in regions.iter().enumerate() {
        for (j, other) in regions.iter().enumerate() {
            if i == j {
                continue;
            }
            let contained = other.contains_region(region);
            let mutual = region.contains_region(other);
            if contained && (!mutual || j < i) {
                continue 'candidates;
            }
        }
        kept.push(*region);
    }
    kept
}
