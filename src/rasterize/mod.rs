//! Page rasterization collaborator seam.
//!
//! Turning a paginated document into per-page raster images is supplied by
//! an external collaborator behind the [`PageRasterizer`] trait. The
//! default implementation drives `pdftoppm` (Poppler) through a temporary
//! directory.

use crate::core::PipelineError;
use image::RgbImage;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

/// Rasterizes a paginated document into a sequence of page images in page
/// order.
pub trait PageRasterizer: Send + Sync {
    /// Rasterizes every page of the document at `path`.
    ///
    /// A failure here is fatal to the document's run.
    fn rasterize(&self, path: &Path) -> Result<Vec<RgbImage>, PipelineError>;
}

/// Rasterizer shelling out to `pdftoppm`.
#[derive(Debug, Clone)]
pub struct PopplerRasterizer {
    dpi: u32,
}

impl PopplerRasterizer {
    /// Creates a rasterizer rendering at the given resolution.
    pub fn new(dpi: u32) -> Self {
        Self { dpi }
    }

    /// Returns the rendering resolution in dots per inch.
    pub fn dpi(&self) -> u32 {
        self.dpi
    }
}

impl PageRasterizer for PopplerRasterizer {
    fn rasterize(&self, path: &Path) -> Result<Vec<RgbImage>, PipelineError> {
        let scratch = tempfile::tempdir()?;
        let prefix = scratch.path().join("page");

        info!(document = %path.display(), dpi = self.dpi, "rasterizing document");
        let status = Command::new("pdftoppm")
            .arg("-png")
            .args(["-r", &self.dpi.to_string()])
            .arg(path)
            .arg(&prefix)
            .status()
            .map_err(|e| PipelineError::rasterize(format!("failed to spawn pdftoppm: {e}")))?;
        if !status.success() {
            return Err(PipelineError::rasterize(format!(
                "pdftoppm exited with {status} for {}",
                path.display()
            )));
        }

        // pdftoppm zero-pads page numbers, so lexicographic filename order
        // is page order.
        let mut page_files: Vec<PathBuf> = std::fs::read_dir(scratch.path())?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "png"))
            .collect();
        page_files.sort();

        let mut pages = Vec::with_capacity(page_files.len());
        for file in &page_files {
            let page = image::open(file)?.to_rgb8();
            pages.push(page);
        }
        debug!(pages = pages.len(), "rasterization complete");
        Ok(pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dpi_is_retained() {
        assert_eq!(PopplerRasterizer::new(200).dpi(), 200);
    }

    #[test]
    fn test_rasterizer_trait_is_object_safe() {
        struct Blank;
        impl PageRasterizer for Blank {
            fn rasterize(&self, _path: &Path) -> Result<Vec<RgbImage>, PipelineError> {
                Ok(vec![RgbImage::from_pixel(10, 10, image::Rgb([255, 255, 255]))])
            }
        }

        let rasterizer: Box<dyn PageRasterizer> = Box::new(Blank);
        let pages = rasterizer.rasterize(Path::new("unused.pdf")).unwrap();
        assert_eq!(pages.len(), 1);
    }
}
