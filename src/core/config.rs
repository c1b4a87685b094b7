//! Pipeline configuration types.
//!
//! Every tunable of a batch run (OCR language, rasterization resolution,
//! detection thresholds) is an explicit configuration value with a
//! documented default, so a run is fully described by one
//! `PipelineConfig`.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for one document processing run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Language profile passed to the OCR collaborator.
    /// Default: "eng"
    #[serde(default = "PipelineConfig::default_language")]
    pub language: String,

    /// Rasterization resolution in dots per inch.
    /// Default: 200
    #[serde(default = "PipelineConfig::default_dpi")]
    pub dpi: u32,

    /// Per-region timeout for a single OCR collaborator call, in seconds.
    /// A timeout is treated as a per-region failure (empty text), not a
    /// document failure.
    /// Default: 30
    #[serde(default = "PipelineConfig::default_ocr_timeout_secs")]
    pub ocr_timeout_secs: u64,

    /// Number of pages at or below which pages are processed sequentially.
    /// Above this, pages are processed in parallel; final page order is
    /// preserved either way.
    /// Default: 4
    #[serde(default = "PipelineConfig::default_parallel_threshold")]
    pub parallel_threshold: usize,

    /// Drop detected regions that are fully contained in another region.
    /// Off by default: nested detections are kept as-is.
    #[serde(default)]
    pub suppress_overlaps: bool,

    /// Text-line detection parameters.
    #[serde(default)]
    pub detection: DetectionParams,
}

impl PipelineConfig {
    fn default_language() -> String {
        "eng".to_string()
    }

    fn default_dpi() -> u32 {
        200
    }

    fn default_ocr_timeout_secs() -> u64 {
        30
    }

    fn default_parallel_threshold() -> usize {
        4
    }

    /// Returns the per-region OCR timeout as a [`Duration`].
    pub fn ocr_timeout(&self) -> Duration {
        Duration::from_secs(self.ocr_timeout_secs)
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            language: Self::default_language(),
            dpi: Self::default_dpi(),
            ocr_timeout_secs: Self::default_ocr_timeout_secs(),
            parallel_threshold: Self::default_parallel_threshold(),
            suppress_overlaps: false,
            detection: DetectionParams::default(),
        }
    }
}

/// Parameters for edge-based text-line detection.
///
/// The defaults encode a prior that text lines are wide, short, and
/// strongly landscape-oriented, rejecting near-square blobs (likely noise
/// or graphics) and very tall or very short boxes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionParams {
    /// Sigma of the small Gaussian blur applied before edge detection.
    /// Default: 0.8 (a 3x3 kernel)
    #[serde(default = "DetectionParams::default_blur_sigma")]
    pub blur_sigma: f32,

    /// Low threshold for Canny edge detection. Default: 100
    #[serde(default = "DetectionParams::default_canny_low")]
    pub canny_low: f32,

    /// High threshold for Canny edge detection. Default: 200
    #[serde(default = "DetectionParams::default_canny_high")]
    pub canny_high: f32,

    /// Width of the horizontally elongated dilation structuring element.
    /// This merges per-character edge fragments along a line into one blob.
    /// Default: 10
    #[serde(default = "DetectionParams::default_dilate_width")]
    pub dilate_width: u32,

    /// Height of the dilation structuring element. Kept small so separate
    /// lines stay apart. Default: 2
    #[serde(default = "DetectionParams::default_dilate_height")]
    pub dilate_height: u32,

    /// Minimum region width in pixels (exclusive). Default: 40
    #[serde(default = "DetectionParams::default_min_width")]
    pub min_width: u32,

    /// Minimum region height in pixels (exclusive). Default: 10
    #[serde(default = "DetectionParams::default_min_height")]
    pub min_height: u32,

    /// Maximum region height in pixels (exclusive). Default: 100
    #[serde(default = "DetectionParams::default_max_height")]
    pub max_height: u32,

    /// Minimum width/height aspect ratio (exclusive). Default: 2.0
    #[serde(default = "DetectionParams::default_min_aspect")]
    pub min_aspect: f32,
}

impl DetectionParams {
    fn default_blur_sigma() -> f32 {
        0.8
    }

    fn default_canny_low() -> f32 {
        100.0
    }

    fn default_canny_high() -> f32 {
        200.0
    }

    fn default_dilate_width() -> u32 {
        10
    }

    fn default_dilate_height() -> u32 {
        2
    }

    fn default_min_width() -> u32 {
        40
    }

    fn default_min_height() -> u32 {
        10
    }

    fn default_max_height() -> u32 {
        100
    }

    fn default_min_aspect() -> f32 {
        2.0
    }
}

impl Default for DetectionParams {
    fn default() -> Self {
        Self {
            blur_sigma: Self::default_blur_sigma(),
            canny_low: Self::default_canny_low(),
            canny_high: Self::default_canny_high(),
            dilate_width: Self::default_dilate_width(),
            dilate_height: Self::default_dilate_height(),
            min_width: Self::default_min_width(),
            min_height: Self::default_min_height(),
            max_height: Self::default_max_height(),
            min_aspect: Self::default_min_aspect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = PipelineConfig::default();
        assert_eq!(config.dpi, 200);
        assert_eq!(config.ocr_timeout(), Duration::from_secs(30));
        assert!(!config.suppress_overlaps);

        let detection = config.detection;
        assert_eq!(detection.canny_low, 100.0);
        assert_eq!(detection.canny_high, 200.0);
        assert_eq!((detection.dilate_width, detection.dilate_height), (10, 2));
        assert_eq!(detection.min_width, 40);
        assert_eq!(detection.min_height, 10);
        assert_eq!(detection.max_height, 100);
        assert_eq!(detection.min_aspect, 2.0);
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config: PipelineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.language, "eng");
        assert_eq!(config.parallel_threshold, 4);
        assert_eq!(config.detection.min_width, 40);
    }
}
