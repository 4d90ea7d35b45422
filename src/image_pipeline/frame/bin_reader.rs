//! Frame reader for the instrument's headerless `.bin` files.
//!
//! The PSII capture instrument writes one file per frame: a row-major grid of
//! width x height samples with no header. 8-bit captures store one byte per
//! sample; deeper captures (12-bit stored in 16-bit words, or native 16-bit)
//! store two bytes little-endian. The byte width is inferred from the file
//! size and cross-checked against the declared bit depth.

use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::frame::reader::FrameReader;
use crate::image_pipeline::frame::types::{Frame, FrameGeometry};

pub struct BinFrameReader;

impl FrameReader for BinFrameReader {
    /// Decodes one raw sensor frame from a byte buffer.
    ///
    /// Fails with `DecodeError` when the buffer size is inconsistent with
    /// the declared geometry, or when the inferred byte width contradicts
    /// the declared bit depth. No rescaling happens here; samples are
    /// widened to `u16` unchanged so normalization has a single source of
    /// truth for scaling.
    fn read_frame(&self, data: &[u8], geometry: &FrameGeometry) -> Result<Frame> {
        let width = geometry.width;
        let height = geometry.height;

        if width == 0 || height == 0 {
            return Err(ConversionError::InvalidDimensions(width, height));
        }
        if geometry.bits_per_sample == 0 || geometry.bits_per_sample > 16 {
            return Err(ConversionError::DecodeError(format!(
                "unsupported bit depth: {}",
                geometry.bits_per_sample
            )));
        }

        let pixel_count = width * height;
        debug!(
            "Decoding frame: {} bytes for {}x{} at {} bits",
            data.len(),
            width,
            height,
            geometry.bits_per_sample
        );

        let samples: Vec<u16> = if data.len() == pixel_count {
            if geometry.bits_per_sample > 8 {
                return Err(ConversionError::DecodeError(format!(
                    "file holds 1 byte per sample but metadata declares {} bits",
                    geometry.bits_per_sample
                )));
            }
            data.iter().map(|&b| b as u16).collect()
        } else if data.len() == pixel_count * 2 {
            if geometry.bits_per_sample <= 8 {
                return Err(ConversionError::DecodeError(format!(
                    "file holds 2 bytes per sample but metadata declares {} bits",
                    geometry.bits_per_sample
                )));
            }
            data.chunks_exact(2)
                .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                .collect()
        } else {
            return Err(ConversionError::DecodeError(format!(
                "file size {} does not match {}x{} at {} bits",
                data.len(),
                width,
                height,
                geometry.bits_per_sample
            )));
        };

        Ok(Frame {
            width,
            height,
            data: samples,
            bits_per_sample: geometry.bits_per_sample,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(bits: u32) -> FrameGeometry {
        FrameGeometry {
            width: 4,
            height: 3,
            bits_per_sample: bits,
        }
    }

    #[test]
    fn decodes_8bit_samples() {
        let bytes: Vec<u8> = (0..12).collect();
        let frame = BinFrameReader.read_frame(&bytes, &geometry(8)).unwrap();
        assert_eq!(frame.width, 4);
        assert_eq!(frame.height, 3);
        assert_eq!(frame.data[5], 5);
        assert_eq!(frame.bits_per_sample, 8);
    }

    #[test]
    fn decodes_12bit_samples_little_endian() {
        let mut bytes = Vec::new();
        for v in 0u16..12 {
            bytes.extend_from_slice(&(v * 300).to_le_bytes());
        }
        let frame = BinFrameReader.read_frame(&bytes, &geometry(12)).unwrap();
        assert_eq!(frame.data[11], 3300);
    }

    #[test]
    fn rejects_size_mismatch() {
        let bytes = vec![0u8; 7];
        let err = BinFrameReader.read_frame(&bytes, &geometry(8)).unwrap_err();
        assert!(matches!(err, ConversionError::DecodeError(_)));
    }

    #[test]
    fn rejects_byte_width_contradicting_bit_depth() {
        // 12 bytes looks like an 8-bit frame, but 12-bit was declared
        let bytes = vec![0u8; 12];
        let err = BinFrameReader.read_frame(&bytes, &geometry(12)).unwrap_err();
        assert!(matches!(err, ConversionError::DecodeError(_)));
    }

    #[test]
    fn rejects_zero_dimensions() {
        let geometry = FrameGeometry {
            width: 0,
            height: 3,
            bits_per_sample: 8,
        };
        let err = BinFrameReader.read_frame(&[], &geometry).unwrap_err();
        assert!(matches!(err, ConversionError::InvalidDimensions(0, 3)));
    }
}
