//! Core error handling and configuration for the page processing pipeline.

pub mod config;
pub mod errors;

pub use config::{DetectionParams, PipelineConfig};
pub use errors::{PipelineError, ProcessingStage};
