//! Error types for the page processing pipeline.
//!
//! This module defines the errors that can occur while rasterizing a
//! document, preprocessing and detecting text-line regions, recognizing
//! region text, and persisting output artifacts. Collaborator boundaries
//! (rasterization, recognition) carry their own variants so callers can
//! distinguish fatal document-level failures from recoverable per-region
//! failures.

use thiserror::Error;

/// Enum representing different stages of processing in the pipeline.
///
/// Used to identify which stage of the page pipeline an error occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    /// Error occurred during image preprocessing (denoise, CLAHE, binarize).
    Preprocess,
    /// Error occurred during text-line region detection.
    Detect,
    /// Error occurred during region text extraction.
    Extract,
    /// Error occurred during region annotation.
    Annotate,
}

impl std::fmt::Display for ProcessingStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessingStage::Preprocess => write!(f, "preprocessing"),
            ProcessingStage::Detect => write!(f, "region detection"),
            ProcessingStage::Extract => write!(f, "region extraction"),
            ProcessingStage::Annotate => write!(f, "annotation"),
        }
    }
}

/// Enum representing the errors that can occur in the page pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Error occurred while loading or decoding a page image.
    #[error("image load")]
    ImageLoad(#[source] image::ImageError),

    /// Error occurred while encoding or saving an output image artifact.
    #[error("image save")]
    ImageSave(#[source] image::ImageError),

    /// The page rasterization collaborator failed. Fatal to the document run.
    #[error("page rasterization failed: {context}")]
    Rasterize {
        /// Additional context about the failure.
        context: String,
    },

    /// Error occurred in a pipeline processing stage.
    #[error("{stage} failed: {context}")]
    Processing {
        /// The stage of processing where the error occurred.
        stage: ProcessingStage,
        /// Additional context about the error.
        context: String,
    },

    /// A region did not satisfy the extractor's bounds precondition.
    #[error(
        "region {x},{y} {width}x{height} exceeds image bounds {image_width}x{image_height}"
    )]
    InvalidRegion {
        /// Left coordinate of the offending region.
        x: u32,
        /// Top coordinate of the offending region.
        y: u32,
        /// Width of the offending region.
        width: u32,
        /// Height of the offending region.
        height: u32,
        /// Width of the source image.
        image_width: u32,
        /// Height of the source image.
        image_height: u32,
    },

    /// The text recognition collaborator failed or timed out for one region.
    /// Recovered locally as an empty text result; never aborts a page.
    #[error("text recognition failed: {context}")]
    Recognition {
        /// Additional context about the failure.
        context: String,
    },

    /// IO error while reading input or writing output artifacts.
    #[error("io")]
    Io(#[from] std::io::Error),

    /// Error while encoding or decoding the document result record.
    #[error("result serialization")]
    Serialize(#[from] serde_json::Error),
}

impl PipelineError {
    /// Creates a rasterization boundary error.
    pub fn rasterize(context: impl Into<String>) -> Self {
        Self::Rasterize {
            context: context.into(),
        }
    }

    /// Creates a processing error for the given stage.
    pub fn processing(stage: ProcessingStage, context: impl Into<String>) -> Self {
        Self::Processing {
            stage,
            context: context.into(),
        }
    }

    /// Creates a recognition boundary error.
    pub fn recognition(context: impl Into<String>) -> Self {
        Self::Recognition {
            context: context.into(),
        }
    }

    /// Returns true if the error is a per-region recognition failure that
    /// the pipeline recovers from locally.
    pub fn is_region_recoverable(&self) -> bool {
        matches!(self, Self::Recognition { .. })
    }
}

impl From<image::ImageError> for PipelineError {
    fn from(error: image::ImageError) -> Self {
        Self::ImageLoad(error)
    }
}
