use std::io::Write;
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbImage};
use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::config::{ConversionConfig, TiffCompression};
use crate::image_pipeline::normalize::types::NormalizedFrame;
use crate::image_pipeline::output::writer::FrameWriter;

pub struct StandardFrameWriter;

impl FrameWriter for StandardFrameWriter {
    fn write_png(&self, frame: &NormalizedFrame, output: &mut dyn Write) -> Result<()> {
        debug!("Encoding PNG image: {}x{}", frame.width, frame.height);

        PngEncoder::new(&mut *output)
            .write_image(
                &frame.eight_bit,
                frame.width as u32,
                frame.height as u32,
                ExtendedColorType::L8,
            )
            .map_err(|e| ConversionError::WriteError(e.to_string()))?;
        Ok(())
    }

    fn write_tiff(
        &self,
        frame: &NormalizedFrame,
        output: &mut dyn Write,
        config: &ConversionConfig,
    ) -> Result<()> {
        debug!(
            "Encoding TIFF image: {}x{} at {} bits",
            frame.width, frame.height, frame.bits_per_sample
        );

        let mut buffer = Vec::new();

        let compression = match config.compression {
            TiffCompression::None => tiff::encoder::Compression::Uncompressed,
            TiffCompression::Lzw => tiff::encoder::Compression::Lzw,
            TiffCompression::DeflateFast => tiff::encoder::Compression::Deflate(
                tiff::encoder::compression::DeflateLevel::Fast,
            ),
            TiffCompression::DeflateBalanced => tiff::encoder::Compression::Deflate(
                tiff::encoder::compression::DeflateLevel::Balanced,
            ),
            TiffCompression::DeflateBest => tiff::encoder::Compression::Deflate(
                tiff::encoder::compression::DeflateLevel::Best,
            ),
        };

        let mut encoder = tiff::encoder::TiffEncoder::new(std::io::Cursor::new(&mut buffer))
            .map_err(|e| ConversionError::WriteError(e.to_string()))?
            .with_compression(compression);

        if let Some(predictor_val) = config.predictor {
            let predictor = match predictor_val {
                2 => tiff::tags::Predictor::Horizontal,
                _ => tiff::tags::Predictor::None,
            };
            encoder = encoder.with_predictor(predictor);
        }

        // 8-bit sources stay Gray8; deeper sources keep their samples in
        // 16-bit words.
        if frame.bits_per_sample <= 8 {
            encoder
                .write_image::<tiff::encoder::colortype::Gray8>(
                    frame.width as u32,
                    frame.height as u32,
                    &frame.eight_bit,
                )
                .map_err(|e| ConversionError::WriteError(e.to_string()))?;
        } else {
            encoder
                .write_image::<tiff::encoder::colortype::Gray16>(
                    frame.width as u32,
                    frame.height as u32,
                    &frame.deep,
                )
                .map_err(|e| ConversionError::WriteError(e.to_string()))?;
        }

        output.write_all(&buffer)?;

        debug!("TIFF encoding complete");
        Ok(())
    }
}

/// Writes an RGB image (panel mosaic) as a PNG file.
pub fn write_rgb_png(image: &RgbImage, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path).map_err(|e| {
        ConversionError::WriteError(format!("{}: {}", path.display(), e))
    })?;
    let writer = std::io::BufWriter::new(file);
    PngEncoder::new(writer)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| ConversionError::WriteError(format!("{}: {}", path.display(), e)))?;
    Ok(())
}
