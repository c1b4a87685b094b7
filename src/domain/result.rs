//! Per-page and per-document result types.

use crate::core::PipelineError;
use crate::domain::TextRegion;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Result of processing one page.
///
/// The detected region list and the text content list are independently
/// ordered top-to-bottom but are not required to be the same length:
/// empty-text regions are excluded from the text list but retained in the
/// geometry list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult {
    /// 1-based page number, matching raster order.
    pub page_number: u32,
    /// Path of the persisted original page image.
    pub original_image: PathBuf,
    /// Path of the persisted preprocessed (binarized) image.
    pub processed_image: PathBuf,
    /// Path of the persisted annotated image with regions outlined.
    pub detected_image: PathBuf,
    /// Detected text-line regions, ordered top-to-bottom.
    pub text_regions: Vec<TextRegion>,
    /// Non-empty extracted text strings, ordered top-to-bottom.
    pub text_content: Vec<String>,
}

impl PageResult {
    /// Returns the number of detected regions on this page.
    pub fn region_count(&self) -> usize {
        self.text_regions.len()
    }

    /// Returns the number of regions that produced non-empty text.
    pub fn text_count(&self) -> usize {
        self.text_content.len()
    }
}

/// Result of processing one document: an ordered sequence of page results,
/// one per input page, in page order.
///
/// Created once per processed document, written once to persistent storage
/// at the end of processing, never mutated afterward.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentResult {
    /// Per-page results in page order.
    pub pages: Vec<PageResult>,
}

impl DocumentResult {
    /// Creates a document result from an ordered page sequence.
    pub fn new(pages: Vec<PageResult>) -> Self {
        Self { pages }
    }

    /// Returns the number of processed pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Writes the document record as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), PipelineError> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }

    /// Reads a document record previously written by [`save`](Self::save).
    ///
    /// Round-trip guarantee: the loaded record reproduces the same page
    /// order, region order, and text order as the saved one.
    pub fn load(path: &Path) -> Result<Self, PipelineError> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}
