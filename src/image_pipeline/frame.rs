//! Sensor frame decoding module
//!
//! This module provides decoding of raw PSII sensor frame files into
//! in-memory intensity arrays.

mod bin_reader;
mod reader;
pub mod types;

pub use bin_reader::BinFrameReader;
pub use reader::FrameReader;
pub use types::{Frame, FrameGeometry};
