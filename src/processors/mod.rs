//! Image processing stages for text-line localization.
//!
//! This module provides the reusable signal-processing building blocks of
//! the page pipeline: tiled contrast-limited histogram equalization,
//! Gaussian-weighted adaptive binarization, and rectangular-kernel
//! morphological dilation.
//!
//! # Modules
//!
//! * `clahe` - Contrast-limited adaptive histogram equalization
//! * `threshold` - Locally-thresholded adaptive binarization
//! * `morphology` - Rectangular structuring element dilation

mod clahe;
mod morphology;
mod threshold;

pub use clahe::Clahe;
pub use morphology::dilate_rect;
pub use threshold::AdaptiveThreshold;
