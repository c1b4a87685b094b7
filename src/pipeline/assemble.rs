//! Result assembly.
//!
//! Composes per-page results (regions, extracted text, output artifact
//! paths) into the document-level result structure. No validation beyond
//! structural construction happens here; validation is the responsibility
//! of the upstream stages.

use crate::domain::{DocumentResult, PageResult, RegionTextResult};
use std::path::PathBuf;

/// Paths of the three persisted image artifacts of one page.
#[derive(Debug, Clone)]
pub struct PageArtifacts {
    /// The original page raster.
    pub original: PathBuf,
    /// The preprocessed (binarized) image.
    pub processed: PathBuf,
    /// The annotated image with detected regions outlined.
    pub annotated: PathBuf,
}

/// Constructs one [`PageResult`] from a page's ordered region/text pairs.
///
/// All region geometries are recorded in order; only non-empty texts make
/// it into the page's text content list, so the two lists share their
/// ordering but not necessarily their length.
pub fn assemble_page(
    page_number: u32,
    artifacts: PageArtifacts,
    results: Vec<RegionTextResult>,
) -> PageResult {
    let text_regions = results.iter().map(|result| result.region).collect();
    let text_content = results
        .into_iter()
        .filter(RegionTextResult::has_text)
        .map(|result| result.text)
        .collect();

    PageResult {
        page_number,
        original_image: artifacts.original,
        processed_image: artifacts.processed,
        detected_image: artifacts.annotated,
        text_regions,
        text_content,
    }
}

/// Wraps the ordered page sequence into one [`DocumentResult`].
pub fn assemble_document(pages: Vec<PageResult>) -> DocumentResult {
    DocumentResult::new(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TextRegion;

    fn artifacts(page: u32) -> PageArtifacts {
        PageArtifacts {
            original: PathBuf::from(format!("out/page_{page}_original.png")),
            processed: PathBuf::from(format!("out/page_{page}_processed.png")),
            annotated: PathBuf::from(format!("out/page_{page}_detected.png")),
        }
    }

    #[test]
    fn test_empty_text_dropped_but_geometry_retained() {
        let results = vec![
            RegionTextResult::new(TextRegion::new(10, 10, 100, 20), "first".to_string()),
            RegionTextResult::new(TextRegion::new(10, 40, 100, 20), String::new()),
            RegionTextResult::new(TextRegion::new(10, 70, 100, 20), "third".to_string()),
        ];

        let page = assemble_page(1, artifacts(1), results);

        assert_eq!(page.region_count(), 3);
        assert_eq!(page.text_content, vec!["first", "third"]);
        assert!(page.text_count() <= page.region_count());
    }

    #[test]
    fn test_orders_are_preserved() {
        let results = vec![
            RegionTextResult::new(TextRegion::new(0, 5, 100, 20), "top".to_string()),
            RegionTextResult::new(TextRegion::new(0, 50, 100, 20), "bottom".to_string()),
        ];

        let page = assemble_page(2, artifacts(2), results);

        assert_eq!(page.text_regions[0].y, 5);
        assert_eq!(page.text_regions[1].y, 50);
        assert_eq!(page.text_content, vec!["top", "bottom"]);
    }

    #[test]
    fn test_document_keeps_page_order() {
        let pages = vec![
            assemble_page(1, artifacts(1), Vec::new()),
            assemble_page(2, artifacts(2), Vec::new()),
            assemble_page(3, artifacts(3), Vec::new()),
        ];

        let document = assemble_document(pages);
        assert_eq!(document.page_count(), 3);
        let numbers: Vec<u32> = document.pages.iter().map(|p| p.page_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }
}
