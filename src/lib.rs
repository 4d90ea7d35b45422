//! PSII fluorescence frame converter.
//!
//! Converts raw multi-frame PSII sensor captures into per-frame PNG and TIFF
//! images plus two combined products: a histogram mosaic and a false-color
//! mosaic.

pub mod discovery;
pub mod image_pipeline;
pub mod logger;
pub mod metadata;
