//! The batch command surface.
//!
//! A single operation: given an input location and an output location,
//! process exactly one document (the first matching file, in lexicographic
//! order for determinism) end-to-end and report completion with a page
//! count. The absence of any eligible input document is a reported,
//! non-fatal condition, not an error.

use crate::core::PipelineError;
use crate::pipeline::DocumentPipeline;
use std::path::{Path, PathBuf};
use tracing::info;

/// Filename of the serialized document record written next to the page
/// artifacts.
pub const RESULT_FILE_NAME: &str = "text_regions.json";

/// Outcome of a completed batch run.
#[derive(Debug, Clone)]
pub struct BatchSummary {
    /// The document that was processed.
    pub document: PathBuf,
    /// Number of pages processed.
    pub pages: usize,
    /// Path of the serialized document record.
    pub result_path: PathBuf,
}

/// Returns the first eligible document in `input_dir`, or `None` when the
/// directory holds none (or does not exist).
pub fn find_input_document(input_dir: &Path) -> Result<Option<PathBuf>, PipelineError> {
    if !input_dir.is_dir() {
        return Ok(None);
    }

    let mut documents: Vec<PathBuf> = std::fs::read_dir(input_dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
        })
        .collect();
    documents.sort();

    Ok(documents.into_iter().next())
}

/// Processes the first eligible document under `input_dir`, writing page
/// artifacts and the document record under `output_dir`.
///
/// Returns `Ok(None)` when no eligible document exists; in that case no
/// output artifact is produced.
pub fn run_batch(
    pipeline: &DocumentPipeline,
    input_dir: &Path,
    output_dir: &Path,
) -> Result<Option<BatchSummary>, PipelineError> {
    let Some(document) = find_input_document(input_dir)? else {
        info!(input = %input_dir.display(), "no PDF document found");
        return Ok(None);
    };

    let result = pipeline.process_document(&document, output_dir)?;

    let result_path = output_dir.join(RESULT_FILE_NAME);
    result.save(&result_path)?;

    info!(
        document = %document.display(),
        pages = result.page_count(),
        record = %result_path.display(),
        "document processing complete"
    );

    Ok(Some(BatchSummary {
        document,
        pages: result.page_count(),
        result_path,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn test_empty_directory_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_input_document(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_missing_directory_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent");
        assert!(find_input_document(&missing).unwrap().is_none());
    }

    #[test]
    fn test_first_document_in_lexicographic_order() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("b.pdf")).unwrap();
        File::create(dir.path().join("a.pdf")).unwrap();
        File::create(dir.path().join("notes.txt")).unwrap();

        let found = find_input_document(dir.path()).unwrap().unwrap();
        assert_eq!(found.file_name().unwrap(), "a.pdf");
    }

    #[test]
    fn test_non_pdf_files_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("image.png")).unwrap();
        File::create(dir.path().join("report.docx")).unwrap();

        assert!(find_input_document(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("SCAN.PDF")).unwrap();

        let found = find_input_document(dir.path()).unwrap().unwrap();
        assert_eq!(found.file_name().unwrap(), "SCAN.PDF");
    }
}
