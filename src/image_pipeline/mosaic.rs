//! Mosaic assembly module
//!
//! Tiles an ordered sequence of same-sized panels into one combined grid
//! image for side-by-side comparison.

mod assembler;

pub use assembler::{grid_dimensions, MosaicAssembler};
