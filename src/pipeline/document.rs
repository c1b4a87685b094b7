//! Per-document pipeline orchestration.

use crate::core::{PipelineConfig, PipelineError};
use crate::domain::{DocumentResult, PageResult, RegionTextResult};
use crate::ocr::{TesseractRecognizer, TextRecognizer};
use crate::pipeline::{
    assemble_document, assemble_page, ImagePreprocessor, PageAnnotator, PageArtifacts,
    RegionDetector, RegionTextExtractor,
};
use crate::rasterize::{PageRasterizer, PopplerRasterizer};
use image::RgbImage;
use rayon::prelude::*;
use std::path::Path;
use tracing::{info, warn};

/// Runs the full pipeline over one document: rasterize, preprocess, detect,
/// extract, annotate, persist per-page artifacts, and assemble the
/// document-level result.
///
/// Pages are independent: no state is shared between them, so above the
/// configured threshold they are processed in parallel, with the final
/// page order and each page's top-to-bottom region order preserved
/// regardless of completion order.
pub struct DocumentPipeline {
    config: PipelineConfig,
    preprocessor: ImagePreprocessor,
    detector: RegionDetector,
    annotator: PageAnnotator,
    rasterizer: Box<dyn PageRasterizer>,
    recognizer: Box<dyn TextRecognizer>,
}

impl DocumentPipeline {
    /// Creates a pipeline with the default collaborators: Poppler for
    /// rasterization and Tesseract for recognition.
    pub fn new(config: PipelineConfig) -> Self {
        let rasterizer = Box::new(PopplerRasterizer::new(config.dpi));
        let recognizer = Box::new(TesseractRecognizer::new(
            config.language.clone(),
            config.ocr_timeout(),
        ));
        Self::with_collaborators(config, rasterizer, recognizer)
    }

    /// Creates a pipeline with explicit collaborator implementations.
    pub fn with_collaborators(
        config: PipelineConfig,
        rasterizer: Box<dyn PageRasterizer>,
        recognizer: Box<dyn TextRecognizer>,
    ) -> Self {
        let detector = RegionDetector::new(config.detection.clone(), config.suppress_overlaps);
        Self {
            config,
            preprocessor: ImagePreprocessor::new(),
            detector,
            annotator: PageAnnotator::new(),
            rasterizer,
            recognizer,
        }
    }

    /// Processes one document end-to-end, writing per-page artifacts into
    /// `output_dir` and returning the assembled document result.
    pub fn process_document(
        &self,
        document: &Path,
        output_dir: &Path,
    ) -> Result<DocumentResult, PipelineError> {
        info!(document = %document.display(), "processing document");

        let pages = self.rasterizer.rasterize(document)?;
        std::fs::create_dir_all(output_dir)?;

        let page_results: Vec<PageResult> = if pages.len() > self.config.parallel_threshold {
            pages
                .par_iter()
                .enumerate()
                .map(|(index, page)| self.process_page(index as u32 + 1, page, output_dir))
                .collect::<Result<_, _>>()?
        } else {
            pages
                .iter()
                .enumerate()
                .map(|(index, page)| self.process_page(index as u32 + 1, page, output_dir))
                .collect::<Result<_, _>>()?
        };

        Ok(assemble_document(page_results))
    }

    /// Runs the per-page pipeline and persists the page's three artifacts.
    fn process_page(
        &self,
        page_number: u32,
        page: &RgbImage,
        output_dir: &Path,
    ) -> Result<PageResult, PipelineError> {
        let processed = self.preprocessor.process(page);
        let regions = self.detector.detect(&processed);

        let extractor = RegionTextExtractor::new(self.recognizer.as_ref());
        let mut results = Vec::with_capacity(regions.len());
        for region in regions {
            let text = match extractor.extract(&processed, &region) {
                Ok(text) => text,
                Err(error) => {
                    // A failed or timed-out region yields empty text; the
                    // page keeps going and the geometry is still recorded.
                    warn!(
                        page = page_number,
                        x = region.x,
                        y = region.y,
                        %error,
                        "region text extraction failed; recording empty text"
                    );
                    String::new()
                }
            };
            results.push(RegionTextResult::new(region, text));
        }

        let region_list: Vec<_> = results.iter().map(|r| r.region).collect();
        let annotated = self.annotator.annotate(page, &region_list);

        let artifacts = PageArtifacts {
            original: output_dir.join(format!("page_{page_number}_original.png")),
            processed: output_dir.join(format!("page_{page_number}_processed.png")),
            annotated: output_dir.join(format!("page_{page_number}_detected.png")),
        };
        page.save(&artifacts.original).map_err(PipelineError::ImageSave)?;
        processed
            .save(&artifacts.processed)
            .map_err(PipelineError::ImageSave)?;
        annotated
            .save(&artifacts.annotated)
            .map_err(PipelineError::ImageSave)?;

        let page_result = assemble_page(page_number, artifacts, results);
        info!(
            page = page_number,
            regions = page_result.region_count(),
            texts = page_result.text_count(),
            "page processed"
        );
        Ok(page_result)
    }
}
