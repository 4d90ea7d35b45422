use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::frame::types::Frame;
use crate::image_pipeline::normalize::types::NormalizedFrame;

pub struct Normalizer;

impl Normalizer {
    /// Derives a [`NormalizedFrame`] from a decoded frame.
    ///
    /// The 8-bit branch maps the declared bit-depth range linearly onto
    /// [0, 255] with rounding: `round(v * 255 / max)`, clamped. The mapping
    /// is monotonic, so intensity ranking survives into histograms and
    /// false-color panels. Samples above the declared range clamp to 255.
    ///
    /// The depth-preserving branch passes samples through unchanged.
    ///
    /// Fails with `NormalizationError` only when every sample sits outside
    /// the declared range, which indicates the declared bit depth does not
    /// describe this data at all.
    pub fn normalize(&self, frame: &Frame) -> Result<NormalizedFrame> {
        let max = (1u32 << frame.bits_per_sample) - 1;

        if frame.bits_per_sample < 16
            && !frame.data.is_empty()
            && frame.data.iter().all(|&v| (v as u32) > max)
        {
            return Err(ConversionError::NormalizationError(format!(
                "every sample exceeds the declared {}-bit range",
                frame.bits_per_sample
            )));
        }

        let eight_bit: Vec<u8> = frame
            .data
            .iter()
            .map(|&v| (((v as u32) * 255 + max / 2) / max).min(255) as u8)
            .collect();

        debug!(
            "Normalized {}x{} frame from {} bits",
            frame.width, frame.height, frame.bits_per_sample
        );

        Ok(NormalizedFrame {
            width: frame.width,
            height: frame.height,
            eight_bit,
            deep: frame.data.clone(),
            bits_per_sample: frame.bits_per_sample,
        })
    }
}
