use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use image::RgbImage;
use rayon::prelude::*;
use tracing::{info, instrument, warn};

use crate::image_pipeline::{
    common::error::{ConversionError, Result},
    config::ConversionConfig,
    conversions::results::{FrameResult, FrameSource, FrameState, RunSummary},
    frame::{BinFrameReader, FrameGeometry, FrameReader},
    mosaic::MosaicAssembler,
    normalize::{NormalizedFrame, Normalizer},
    output::{write_rgb_png, FrameWriter, StandardFrameWriter},
    panels::{FalseColorMapper, HistogramBuilder},
};

/// Filename of the combined histogram image.
pub const COMBINED_HISTOGRAM_NAME: &str = "combined_hist.png";
/// Filename of the combined false-color image.
pub const COMBINED_FALSE_COLOR_NAME: &str = "combined_pseudocolored.png";

/// The two per-frame panels that feed the combined images.
struct FramePanels {
    histogram: RgbImage,
    false_color: RgbImage,
}

pub struct PsiiConversionPipeline<R: FrameReader, W: FrameWriter> {
    reader: R,
    writer: W,
    config: ConversionConfig,
    mapper: FalseColorMapper,
    histogram: HistogramBuilder,
    assembler: MosaicAssembler,
}

impl PsiiConversionPipeline<BinFrameReader, StandardFrameWriter> {
    pub fn new(config: ConversionConfig) -> Result<Self> {
        Self::with_custom(BinFrameReader, StandardFrameWriter, config)
    }
}

impl<R: FrameReader + Sync, W: FrameWriter + Sync> PsiiConversionPipeline<R, W> {
    /// Builds a pipeline over custom reader/writer implementations.
    ///
    /// Fails fast with `MappingError` when the configured LUT is not
    /// 256 entries; that is a configuration defect, not a data defect, and
    /// no frame should be touched before it is caught.
    pub fn with_custom(reader: R, writer: W, config: ConversionConfig) -> Result<Self> {
        let mapper = FalseColorMapper::new(config.lut.clone(), config.thumbnail_size)?;
        let histogram = HistogramBuilder::new(config.histogram_bins, config.histogram_panel_size);
        let assembler = MosaicAssembler::new(config.mosaic_background);
        Ok(Self {
            reader,
            writer,
            config,
            mapper,
            histogram,
            assembler,
        })
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Runs the whole conversion: every frame through decode → normalize →
    /// PNG/TIFF → panels, then the two combined images from the frames that
    /// built panels.
    ///
    /// Frames are processed in parallel; results and panels are re-sorted
    /// by sequence index afterwards, so completion order never affects the
    /// mosaics. A per-frame failure is recorded and does not abort the run;
    /// with zero successful frames mosaic assembly is skipped and the
    /// summary reports overall failure.
    #[instrument(skip(self, sources, output_dir), fields(frames = sources.len()))]
    pub fn run(
        &self,
        sources: &[FrameSource],
        geometry: &FrameGeometry,
        output_dir: &Path,
    ) -> RunSummary {
        let started = Instant::now();
        info!("Starting PSII conversion of {} frames", sources.len());

        let mut outcomes: Vec<(FrameResult, Option<FramePanels>)> = sources
            .par_iter()
            .map(|source| self.process_frame(source, geometry, output_dir))
            .collect();
        outcomes.sort_by_key(|(result, _)| result.sequence);

        let mut frames = Vec::with_capacity(outcomes.len());
        let mut histogram_panels = Vec::new();
        let mut false_color_panels = Vec::new();
        for (result, panels) in outcomes {
            if let Some(panels) = panels {
                histogram_panels.push(panels.histogram);
                false_color_panels.push(panels.false_color);
            }
            frames.push(result);
        }

        let mut summary = RunSummary {
            frames,
            histogram_mosaic: None,
            false_color_mosaic: None,
            mosaic_error: None,
            elapsed: started.elapsed(),
        };

        match self.write_mosaics(&histogram_panels, &false_color_panels, output_dir) {
            Ok((hist_path, color_path)) => {
                summary.histogram_mosaic = Some(hist_path);
                summary.false_color_mosaic = Some(color_path);
            }
            Err(e) => {
                warn!("Skipping combined images: {}", e);
                summary.mosaic_error = Some(e.to_string());
            }
        }

        summary.elapsed = started.elapsed();
        info!(
            succeeded = summary.succeeded(),
            failed = summary.failed(),
            "Conversion run complete"
        );
        summary
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(ConversionError::InvalidDimensions(width, height));
        }

        Ok(())
    }

    #[instrument(skip(self, source, geometry, output_dir), fields(sequence = source.sequence))]
    fn process_frame(
        &self,
        source: &FrameSource,
        geometry: &FrameGeometry,
        output_dir: &Path,
    ) -> (FrameResult, Option<FramePanels>) {
        let mut result = FrameResult {
            sequence: source.sequence,
            stem: source.stem(),
            state: FrameState::Pending,
            reached: FrameState::Pending,
            png_path: None,
            tiff_path: None,
            error: None,
        };

        match self.convert_frame(source, geometry, output_dir, &mut result) {
            Ok(panels) => {
                result.state = FrameState::Done;
                result.reached = FrameState::Done;
                (result, Some(panels))
            }
            Err(e) => {
                warn!("Frame {} ({}) failed: {}", source.sequence, result.stem, e);
                result.state = FrameState::Failed;
                result.error = Some(e.to_string());
                (result, None)
            }
        }
    }

    fn convert_frame(
        &self,
        source: &FrameSource,
        geometry: &FrameGeometry,
        output_dir: &Path,
        result: &mut FrameResult,
    ) -> Result<FramePanels> {
        let input_data = std::fs::read(&source.path).map_err(|e| {
            ConversionError::InputReadError(format!("{}: {}", source.path.display(), e))
        })?;

        let frame = {
            let _span = tracing::info_span!("decode_frame").entered();
            self.reader.read_frame(&input_data, geometry)?
        };
        self.validate_dimensions(frame.width, frame.height)?;
        result.reached = FrameState::Decoded;

        let normalized = {
            let _span = tracing::info_span!("normalize").entered();
            Normalizer.normalize(&frame)?
        };
        result.reached = FrameState::Normalized;

        let png_path = output_dir.join(format!("{}.png", result.stem));
        self.write_output(&normalized, &png_path, OutputKind::Png)?;
        result.png_path = Some(png_path);

        let tiff_path = output_dir.join(format!("{}.tif", result.stem));
        self.write_output(&normalized, &tiff_path, OutputKind::Tiff)?;
        result.tiff_path = Some(tiff_path);
        result.reached = FrameState::Written;

        let panels = {
            let _span = tracing::info_span!("build_panels").entered();
            FramePanels {
                histogram: self.histogram.build(&normalized),
                false_color: self.mapper.panel(&normalized),
            }
        };
        result.reached = FrameState::PanelsBuilt;

        Ok(panels)
    }

    fn write_output(
        &self,
        normalized: &NormalizedFrame,
        path: &Path,
        kind: OutputKind,
    ) -> Result<()> {
        let file = std::fs::File::create(path).map_err(|e| {
            ConversionError::WriteError(format!("{}: {}", path.display(), e))
        })?;
        let mut output = std::io::BufWriter::new(file);
        match kind {
            OutputKind::Png => self.writer.write_png(normalized, &mut output)?,
            OutputKind::Tiff => self.writer.write_tiff(normalized, &mut output, &self.config)?,
        }
        output.flush().map_err(|e| {
            ConversionError::WriteError(format!("{}: {}", path.display(), e))
        })
    }

    fn write_mosaics(
        &self,
        histogram_panels: &[RgbImage],
        false_color_panels: &[RgbImage],
        output_dir: &Path,
    ) -> Result<(PathBuf, PathBuf)> {
        let _span = tracing::info_span!("assemble_mosaics").entered();

        let histogram_mosaic = self.assembler.assemble(histogram_panels)?;
        let false_color_mosaic = self.assembler.assemble(false_color_panels)?;

        let hist_path = output_dir.join(COMBINED_HISTOGRAM_NAME);
        write_rgb_png(&histogram_mosaic, &hist_path)?;
        info!("Wrote {}", hist_path.display());

        let color_path = output_dir.join(COMBINED_FALSE_COLOR_NAME);
        write_rgb_png(&false_color_mosaic, &color_path)?;
        info!("Wrote {}", color_path.display());

        Ok((hist_path, color_path))
    }
}

enum OutputKind {
    Png,
    Tiff,
}
