//! Domain types for text regions and processing results.

pub mod region;
pub mod result;

pub use region::{RegionTextResult, TextRegion};
pub use result::{DocumentResult, PageResult};
