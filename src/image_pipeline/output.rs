//! Output writing module
//!
//! PNG and TIFF writers for normalized frames, plus PNG output for the
//! combined mosaic images.

mod standard_writer;
mod writer;

pub use standard_writer::{write_rgb_png, StandardFrameWriter};
pub use writer::FrameWriter;
