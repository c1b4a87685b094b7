//! The page and document processing pipeline.
//!
//! Control/data flow per page: raw raster → [`ImagePreprocessor`] → binary
//! image → [`RegionDetector`] → ordered region list →
//! [`RegionTextExtractor`] (per region, against the binary image) →
//! region/text pairs → [`PageAnnotator`] (against the original raster) →
//! per-page assembly → document-level aggregate.

pub mod annotate;
pub mod assemble;
pub mod batch;
pub mod detect;
pub mod document;
pub mod extract;
pub mod preprocess;

pub use annotate::PageAnnotator;
pub use assemble::{assemble_document, assemble_page, PageArtifacts};
pub use batch::{find_input_document, run_batch, BatchSummary};
pub use detect::RegionDetector;
pub use document::DocumentPipeline;
pub use extract::RegionTextExtractor;
pub use preprocess::ImagePreprocessor;
