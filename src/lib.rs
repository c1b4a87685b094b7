//! # pagelines
//!
//! A Rust library that converts rasterized document pages into localized
//! text-line regions, runs per-region OCR, and assembles per-page and
//! per-document structured results.
//!
//! ## Pipeline
//!
//! For each page: raw raster → [`ImagePreprocessor`](pipeline::ImagePreprocessor)
//! (grayscale, denoise, CLAHE, adaptive binarization) →
//! [`RegionDetector`](pipeline::RegionDetector) (edge-based text-line
//! proposals, top-to-bottom order) →
//! [`RegionTextExtractor`](pipeline::RegionTextExtractor) (per-region crop +
//! OCR) → [`PageAnnotator`](pipeline::PageAnnotator) (inspection overlay) →
//! per-page result assembly into a [`DocumentResult`](domain::DocumentResult).
//!
//! Page rasterization and text recognition are external collaborators behind
//! the [`PageRasterizer`](rasterize::PageRasterizer) and
//! [`TextRecognizer`](ocr::TextRecognizer) traits.
//!
//! ## Modules
//!
//! * [`core`] - Error handling and pipeline configuration
//! * [`domain`] - Region and result types
//! * [`processors`] - Reusable image processing stages
//! * [`pipeline`] - The page and document processing pipeline
//! * [`rasterize`] - Page rasterization collaborator seam
//! * [`ocr`] - Text recognition collaborator seam
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use pagelines::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), PipelineError> {
//! let pipeline = DocumentPipeline::new(PipelineConfig::default());
//! let result = pipeline.process_document(Path::new("input/report.pdf"), Path::new("output"))?;
//! println!("processed {} pages", result.page_count());
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod domain;
pub mod ocr;
pub mod pipeline;
pub mod processors;
pub mod rasterize;

/// Prelude module for convenient imports.
///
/// Bring the essentials into scope with a single use statement:
///
/// ```rust
/// use pagelines::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::{DetectionParams, PipelineConfig, PipelineError};
    pub use crate::domain::{DocumentResult, PageResult, RegionTextResult, TextRegion};
    pub use crate::ocr::TextRecognizer;
    pub use crate::pipeline::{DocumentPipeline, ImagePreprocessor, PageAnnotator, RegionDetector};
    pub use crate::rasterize::PageRasterizer;
}
