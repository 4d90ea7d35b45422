//! False-color mapping through a 256-entry lookup table.

use image::{imageops, Rgb, RgbImage};
use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::config::LUT_SIZE;
use crate::image_pipeline::normalize::types::NormalizedFrame;

pub struct FalseColorMapper {
    lut: Vec<[u8; 3]>,
    thumbnail_size: (u32, u32),
}

impl FalseColorMapper {
    /// Builds a mapper from a color lookup table.
    ///
    /// The LUT length is a configuration invariant checked here, once at
    /// startup, so per-frame mapping is infallible.
    pub fn new(lut: Vec<[u8; 3]>, thumbnail_size: (u32, u32)) -> Result<Self> {
        if lut.len() != LUT_SIZE {
            return Err(ConversionError::MappingError(format!(
                "expected {} LUT entries, got {}",
                LUT_SIZE,
                lut.len()
            )));
        }
        if thumbnail_size.0 == 0 || thumbnail_size.1 == 0 {
            return Err(ConversionError::MappingError(format!(
                "thumbnail size {}x{} is empty",
                thumbnail_size.0, thumbnail_size.1
            )));
        }
        Ok(Self {
            lut,
            thumbnail_size,
        })
    }

    /// Maps the frame's 8-bit array to RGB at full frame resolution.
    pub fn map(&self, frame: &NormalizedFrame) -> RgbImage {
        debug!("False-coloring {}x{} frame", frame.width, frame.height);
        let mut out = RgbImage::new(frame.width as u32, frame.height as u32);
        for (pixel, &v) in out.pixels_mut().zip(&frame.eight_bit) {
            *pixel = Rgb(self.lut[v as usize]);
        }
        out
    }

    /// Maps the frame and downscales it to the fixed thumbnail size used for
    /// mosaic cells. Nearest-neighbor keeps the result deterministic and the
    /// sampled colors exact LUT entries.
    pub fn panel(&self, frame: &NormalizedFrame) -> RgbImage {
        let full = self.map(frame);
        if full.dimensions() == self.thumbnail_size {
            return full;
        }
        imageops::resize(
            &full,
            self.thumbnail_size.0,
            self.thumbnail_size.1,
            imageops::FilterType::Nearest,
        )
    }
}
