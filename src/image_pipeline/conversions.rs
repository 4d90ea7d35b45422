//! Pipeline conversions module
//!
//! This module contains the orchestration logic driving a PSII conversion
//! run: per-frame decode/normalize/write plus combined image assembly.

mod psii_pipeline;
mod results;

pub use psii_pipeline::{PsiiConversionPipeline, COMBINED_FALSE_COLOR_NAME, COMBINED_HISTOGRAM_NAME};
pub use results::{FrameResult, FrameSource, FrameState, RunSummary};
