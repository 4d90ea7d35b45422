//! Per-frame panel building module
//!
//! Builds the two per-frame summary panels that later tile into the combined
//! images: an intensity histogram panel and a false-color thumbnail.

mod falsecolor;
mod histogram;

pub use falsecolor::FalseColorMapper;
pub use histogram::HistogramBuilder;
