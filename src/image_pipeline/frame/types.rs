//! Sensor frame data types

/// Capture-session geometry shared by every frame in a run.
///
/// The PSII instrument writes headerless sample grids, so width, height and
/// bit depth come from the capture metadata rather than the files themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameGeometry {
    /// Width of each frame in pixels
    pub width: usize,
    /// Height of each frame in pixels
    pub height: usize,
    /// Declared bits per sample from the sensor (e.g., 8, 12, or 16)
    pub bits_per_sample: u32,
}

/// Represents one decoded sensor frame
#[derive(Debug, Clone)]
pub struct Frame {
    /// Width of the frame in pixels
    pub width: usize,
    /// Height of the frame in pixels
    pub height: usize,
    /// Raw intensity samples, row-major (single grayscale channel)
    pub data: Vec<u16>,
    /// Declared bits per sample from the sensor
    pub bits_per_sample: u32,
}
