use std::io::Write;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::config::ConversionConfig;
use crate::image_pipeline::normalize::types::NormalizedFrame;

pub trait FrameWriter {
    /// Writes the frame's 8-bit branch as a grayscale PNG.
    fn write_png(&self, frame: &NormalizedFrame, output: &mut dyn Write) -> Result<()>;

    /// Writes the frame's depth-preserving branch as a grayscale TIFF.
    fn write_tiff(
        &self,
        frame: &NormalizedFrame,
        output: &mut dyn Write,
        config: &ConversionConfig,
    ) -> Result<()>;
}
