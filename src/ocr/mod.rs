//! Text recognition collaborator seam.
//!
//! The pipeline never performs character recognition itself; it hands each
//! cropped line image to a [`TextRecognizer`]. The default implementation
//! shells out to the Tesseract CLI in single-text-line mode with a fixed
//! language profile. Each call is bounded by a timeout, and any failure is
//! scoped to the region that triggered it.

use crate::core::PipelineError;
use image::GrayImage;
use std::io::Read;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};
use tracing::debug;

/// Converts a cropped single-line image into text.
///
/// Implementations must be safe to call from multiple threads: pages may
/// be processed in parallel, and each page's regions are recognized
/// against the same recognizer instance.
pub trait TextRecognizer: Send + Sync {
    /// Recognizes one line of text in the given crop.
    ///
    /// An empty string is a valid result for a crop containing no
    /// legible text. Errors and timeouts are per-region conditions.
    fn recognize_line(&self, line: &GrayImage) -> Result<String, PipelineError>;
}

/// Recognizer invoking the `tesseract` command-line tool.
///
/// Runs with `--psm 7` (treat the image as a single text line, no layout
/// analysis) and a fixed language profile. The crop is staged through a
/// temporary PNG file because the CLI reads its input from disk.
#[derive(Debug, Clone)]
pub struct TesseractRecognizer {
    language: String,
    timeout: Duration,
}

const WAIT_POLL_INTERVAL: Duration = Duration::from_millis(20);

impl TesseractRecognizer {
    /// Creates a recognizer for the given language profile and per-call
    /// timeout.
    pub fn new(language: impl Into<String>, timeout: Duration) -> Self {
        Self {
            language: language.into(),
            timeout,
        }
    }

    /// Returns the configured language profile.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Waits for the child to exit, killing it once the deadline passes.
    fn wait_with_deadline(
        &self,
        child: &mut std::process::Child,
    ) -> Result<std::process::ExitStatus, PipelineError> {
        let deadline = Instant::now() + self.timeout;
        loop {
            match child.try_wait() {
                Ok(Some(status)) => return Ok(status),
                Ok(None) => {
                    if Instant::now() >= deadline {
                        let _ = child.kill();
                        let _ = child.wait();
                        return Err(PipelineError::recognition(format!(
                            "tesseract timed out after {:?}",
                            self.timeout
                        )));
                    }
                    std::thread::sleep(WAIT_POLL_INTERVAL);
                }
                Err(e) => {
                    let _ = child.kill();
                    return Err(PipelineError::recognition(format!(
                        "failed to wait for tesseract: {e}"
                    )));
                }
            }
        }
    }
}

impl TextRecognizer for TesseractRecognizer {
    fn recognize_line(&self, line: &GrayImage) -> Result<String, PipelineError> {
        let staged = tempfile::Builder::new()
            .prefix("pagelines-region-")
            .suffix(".png")
            .tempfile()?;
        line.save(staged.path())
            .map_err(|e| PipelineError::recognition(format!("failed to stage crop: {e}")))?;

        let mut child = Command::new("tesseract")
            .arg(staged.path())
            .arg("stdout")
            .args(["-l", &self.language, "--psm", "7"])
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| PipelineError::recognition(format!("failed to spawn tesseract: {e}")))?;

        let status = self.wait_with_deadline(&mut child)?;

        // Single-line output fits comfortably in the pipe buffer, so
        // reading after exit cannot deadlock.
        let mut output = String::new();
        if let Some(mut stdout) = child.stdout.take() {
            stdout
                .read_to_string(&mut output)
                .map_err(|e| PipelineError::recognition(format!("failed to read output: {e}")))?;
        }

        if !status.success() {
            return Err(PipelineError::recognition(format!(
                "tesseract exited with {status}"
            )));
        }

        let text = output.trim().to_string();
        debug!(chars = text.len(), "recognized text line");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_is_retained() {
        let recognizer = TesseractRecognizer::new("fra", Duration::from_secs(5));
        assert_eq!(recognizer.language(), "fra");
    }

    #[test]
    fn test_recognizer_trait_is_object_safe() {
        struct Fixed;
        impl TextRecognizer for Fixed {
            fn recognize_line(&self, _line: &GrayImage) -> Result<String, PipelineError> {
                Ok("fixed".to_string())
            }
        }

        let recognizer: Box<dyn TextRecognizer> = Box::new(Fixed);
        let crop = GrayImage::from_pixel(10, 10, image::Luma([255]));
        assert_eq!(recognizer.recognize_line(&crop).unwrap(), "fixed");
    }
}
