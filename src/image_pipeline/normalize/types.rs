//! Normalized frame data types

/// A frame rescaled for output.
///
/// Both arrays share the spatial dimensions of the source frame. The 8-bit
/// array feeds PNG output, histogram panels, and false-color mapping; the
/// depth-preserving array feeds TIFF output unchanged.
#[derive(Debug, Clone)]
pub struct NormalizedFrame {
    /// Width of the frame in pixels
    pub width: usize,
    /// Height of the frame in pixels
    pub height: usize,
    /// Full-range linear remap of the source samples onto [0, 255]
    pub eight_bit: Vec<u8>,
    /// Source samples passed through unchanged
    pub deep: Vec<u16>,
    /// Declared bits per sample of the source
    pub bits_per_sample: u32,
}

impl NormalizedFrame {
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}
