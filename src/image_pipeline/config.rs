//! Conversion configuration types

/// Number of entries a color lookup table must have (one per 8-bit level).
pub const LUT_SIZE: usize = 256;

/// TIFF compression methods
#[derive(Debug, Clone, Copy)]
pub enum TiffCompression {
    /// No compression (fastest, largest file)
    None,
    /// LZW compression (slow, good compression)
    Lzw,
    /// Deflate compression - fast level (good speed/size balance)
    DeflateFast,
    /// Deflate compression - best compression (slower)
    DeflateBest,
    /// Deflate compression - balanced (default)
    DeflateBalanced,
}

/// Configuration for one conversion run
///
/// Passed explicitly into the pipeline entry point; there is no global
/// mutable state, so concurrent runs (e.g., in tests) never interfere.
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// TIFF compression method to use
    pub compression: TiffCompression,
    /// Predictor value for TIFF compression (typically 2 for horizontal differencing)
    pub predictor: Option<u16>,
    /// Whether to validate frame dimensions before conversion
    pub validate_dimensions: bool,
    /// Number of histogram bins over the 8-bit sample range
    pub histogram_bins: usize,
    /// Pixel dimensions of each rendered histogram panel (width, height)
    pub histogram_panel_size: (u32, u32),
    /// Pixel dimensions of each false-color thumbnail panel (width, height)
    pub thumbnail_size: (u32, u32),
    /// Color lookup table for false-color mapping; must hold [`LUT_SIZE`] entries
    pub lut: Vec<[u8; 3]>,
    /// Background color for unfilled trailing mosaic cells
    pub mosaic_background: [u8; 3],
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            compression: TiffCompression::None,
            predictor: None,
            validate_dimensions: true,
            histogram_bins: 64,
            histogram_panel_size: (256, 160),
            thumbnail_size: (242, 152),
            lut: viridis_lut(),
            mosaic_background: [0, 0, 0],
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// The default false-color ramp: viridis, sampled at each 8-bit level.
pub fn viridis_lut() -> Vec<[u8; 3]> {
    (0..LUT_SIZE)
        .map(|i| {
            let color = colorous::VIRIDIS.eval_rational(i, LUT_SIZE);
            [color.r, color.g, color.b]
        })
        .collect()
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    compression: Option<TiffCompression>,
    predictor: Option<Option<u16>>,
    validate_dimensions: Option<bool>,
    histogram_bins: Option<usize>,
    histogram_panel_size: Option<(u32, u32)>,
    thumbnail_size: Option<(u32, u32)>,
    lut: Option<Vec<[u8; 3]>>,
    mosaic_background: Option<[u8; 3]>,
}

impl ConversionConfigBuilder {
    pub fn compression(mut self, compression: TiffCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn predictor(mut self, predictor: Option<u16>) -> Self {
        self.predictor = Some(predictor);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn histogram_bins(mut self, bins: usize) -> Self {
        self.histogram_bins = Some(bins);
        self
    }

    pub fn histogram_panel_size(mut self, size: (u32, u32)) -> Self {
        self.histogram_panel_size = Some(size);
        self
    }

    pub fn thumbnail_size(mut self, size: (u32, u32)) -> Self {
        self.thumbnail_size = Some(size);
        self
    }

    pub fn lut(mut self, lut: Vec<[u8; 3]>) -> Self {
        self.lut = Some(lut);
        self
    }

    pub fn mosaic_background(mut self, background: [u8; 3]) -> Self {
        self.mosaic_background = Some(background);
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            compression: self.compression.unwrap_or(default.compression),
            predictor: self.predictor.unwrap_or(default.predictor),
            validate_dimensions: self
                .validate_dimensions
                .unwrap_or(default.validate_dimensions),
            histogram_bins: self.histogram_bins.unwrap_or(default.histogram_bins),
            histogram_panel_size: self
                .histogram_panel_size
                .unwrap_or(default.histogram_panel_size),
            thumbnail_size: self.thumbnail_size.unwrap_or(default.thumbnail_size),
            lut: self.lut.unwrap_or(default.lut),
            mosaic_background: self.mosaic_background.unwrap_or(default.mosaic_background),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let config = ConversionConfig::builder()
            .compression(TiffCompression::DeflateBalanced)
            .predictor(Some(2))
            .validate_dimensions(false)
            .histogram_bins(32)
            .thumbnail_size((100, 80))
            .build();

        assert!(matches!(
            config.compression,
            TiffCompression::DeflateBalanced
        ));
        assert_eq!(config.predictor, Some(2));
        assert!(!config.validate_dimensions);
        assert_eq!(config.histogram_bins, 32);
        assert_eq!(config.thumbnail_size, (100, 80));
    }

    #[test]
    fn default_lut_has_256_entries() {
        let config = ConversionConfig::default();
        assert_eq!(config.lut.len(), LUT_SIZE);
    }

    #[test]
    fn viridis_ramp_runs_dark_to_bright() {
        let lut = viridis_lut();
        let luma = |rgb: [u8; 3]| {
            rgb[0] as u32 * 299 + rgb[1] as u32 * 587 + rgb[2] as u32 * 114
        };
        assert!(luma(lut[0]) < luma(lut[255]));
    }
}
