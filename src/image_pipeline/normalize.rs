//! Intensity normalization module
//!
//! Rescales raw frame intensities into displayable ranges: an 8-bit array
//! for PNG output and panel building, and a depth-preserving array for TIFF.

mod normalizer;
pub mod types;

pub use normalizer::Normalizer;
pub use types::NormalizedFrame;
