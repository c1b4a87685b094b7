//! Batch CLI for the page processing pipeline.
//!
//! Processes the first PDF document found in the input directory: detects
//! text-line regions on every page, runs per-region OCR, writes the three
//! per-page image artifacts and the document record to the output
//! directory, and reports a page count.
//!
//! # Usage
//!
//! ```bash
//! pagelines --input-dir input --output-dir output --lang eng
//! ```

use clap::Parser;
use pagelines::core::PipelineConfig;
use pagelines::pipeline::{run_batch, DocumentPipeline};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the batch operation.
#[derive(Parser)]
#[command(name = "pagelines")]
#[command(about = "Localizes text-line regions in a PDF and extracts their text")]
struct Args {
    /// Directory scanned for the input document (first PDF wins)
    #[arg(short, long, default_value = "input")]
    input_dir: PathBuf,

    /// Directory receiving page artifacts and the document record
    #[arg(short, long, default_value = "output")]
    output_dir: PathBuf,

    /// OCR language profile
    #[arg(short, long, default_value = "eng")]
    lang: String,

    /// Rasterization resolution in dots per inch
    #[arg(long, default_value_t = 200)]
    dpi: u32,

    /// Per-region OCR timeout in seconds
    #[arg(long, default_value_t = 30)]
    ocr_timeout_secs: u64,

    /// Drop detected regions fully contained in another region
    #[arg(long)]
    suppress_overlaps: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config = PipelineConfig {
        language: args.lang,
        dpi: args.dpi,
        ocr_timeout_secs: args.ocr_timeout_secs,
        suppress_overlaps: args.suppress_overlaps,
        ..PipelineConfig::default()
    };

    let pipeline = DocumentPipeline::new(config);
    match run_batch(&pipeline, &args.input_dir, &args.output_dir)? {
        Some(summary) => {
            println!(
                "Processed {} ({} pages); results in {}",
                summary.document.display(),
                summary.pages,
                summary.result_path.display()
            );
        }
        None => {
            println!("No PDF document found in {}", args.input_dir.display());
        }
    }

    Ok(())
}
