//! Per-region text extraction.

use crate::core::PipelineError;
use crate::domain::TextRegion;
use crate::ocr::TextRecognizer;
use image::{imageops, GrayImage};

/// Crops each candidate region out of the binary page image and delegates
/// the crop to the text recognition collaborator.
///
/// Regions are expected to satisfy the detector's contract (non-empty,
/// within image bounds); an out-of-bounds region is a precondition
/// violation reported as [`PipelineError::InvalidRegion`]. An empty or
/// whitespace-only recognition result is a valid, expected outcome for a
/// false-positive region.
pub struct RegionTextExtractor<'a> {
    recognizer: &'a dyn TextRecognizer,
}

impl<'a> RegionTextExtractor<'a> {
    /// Creates an extractor delegating to the given recognizer.
    pub fn new(recognizer: &'a dyn TextRecognizer) -> Self {
        Self { recognizer }
    }

    /// Extracts the text of one region from the page image.
    ///
    /// Returns the recognizer's output with leading/trailing whitespace
    /// stripped.
    pub fn extract(&self, image: &GrayImage, region: &TextRegion) -> Result<String, PipelineError> {
        let (image_width, image_height) = image.dimensions();
        if !region.fits_within(image_width, image_height) {
            return Err(PipelineError::InvalidRegion {
                x: region.x,
                y: region.y,
                width: region.width,
                height: region.height,
                image_width,
                image_height,
            });
        }

        let crop = imageops::crop_imm(image, region.x, region.y, region.width, region.height)
            .to_image();
        let text = self.recognizer.recognize_line(&crop)?;
        Ok(text.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    /// Recognizer reporting the dimensions of the crop it was handed.
    struct DimensionEcho;

    impl TextRecognizer for DimensionEcho {
        fn recognize_line(&self, line: &GrayImage) -> Result<String, PipelineError> {
            Ok(format!("  {}x{}  ", line.width(), line.height()))
        }
    }

    #[test]
    fn test_crop_dimensions_and_whitespace_stripping() {
        let image = GrayImage::from_pixel(400, 200, Luma([255]));
        let extractor = RegionTextExtractor::new(&DimensionEcho);

        let text = extractor
            .extract(&image, &TextRegion::new(50, 50, 200, 30))
            .unwrap();
        assert_eq!(text, "200x30");
    }

    #[test]
    fn test_out_of_bounds_region_is_precondition_violation() {
        let image = GrayImage::from_pixel(100, 100, Luma([255]));
        let extractor = RegionTextExtractor::new(&DimensionEcho);

        let err = extractor
            .extract(&image, &TextRegion::new(90, 90, 20, 20))
            .unwrap_err();
        assert!(matches!(err, PipelineError::InvalidRegion { .. }));
    }

    #[test]
    fn test_recognizer_failure_propagates() {
        struct AlwaysFails;
        impl TextRecognizer for AlwaysFails {
            fn recognize_line(&self, _line: &GrayImage) -> Result<String, PipelineError> {
                Err(PipelineError::recognition("engine unavailable"))
            }
        }

        let image = GrayImage::from_pixel(100, 100, Luma([255]));
        let extractor = RegionTextExtractor::new(&AlwaysFails);
        let err = extractor
            .extract(&image, &TextRegion::new(0, 0, 50, 20))
            .unwrap_err();
        assert!(err.is_region_recoverable());
    }
}
