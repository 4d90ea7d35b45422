//! Image processing pipeline module
//!
//! This module provides a structured approach to PSII frame conversion,
//! with separate modules for frame decoding, normalization, panel building,
//! mosaic assembly, output writing, and conversion orchestration.

pub mod common;
pub mod config;
pub mod conversions;
pub mod frame;
pub mod mosaic;
pub mod normalize;
pub mod output;
pub mod panels;

pub use common::{
    ConversionError,
    Result,
};

pub use config::{
    ConversionConfig,
    ConversionConfigBuilder,
    TiffCompression,
};

pub use frame::{
    BinFrameReader,
    Frame,
    FrameGeometry,
    FrameReader,
};

pub use normalize::{
    NormalizedFrame,
    Normalizer,
};

pub use panels::{
    FalseColorMapper,
    HistogramBuilder,
};

pub use mosaic::MosaicAssembler;

pub use output::{
    FrameWriter,
    StandardFrameWriter,
};

pub use conversions::{
    FrameResult,
    FrameSource,
    FrameState,
    PsiiConversionPipeline,
    RunSummary,
};
