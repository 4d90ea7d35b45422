use image::{imageops, Rgb, RgbImage};
use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};

/// Near-square grid layout for `n` panels:
/// columns = ceil(sqrt(n)), rows = ceil(n / columns).
pub fn grid_dimensions(n: usize) -> (usize, usize) {
    if n == 0 {
        return (0, 0);
    }
    let columns = (n as f64).sqrt().ceil() as usize;
    let rows = n.div_ceil(columns);
    (columns, rows)
}

pub struct MosaicAssembler {
    background: [u8; 3],
}

impl MosaicAssembler {
    pub fn new(background: [u8; 3]) -> Self {
        Self { background }
    }

    /// Blits the panels into a grid canvas in sequence order, left-to-right,
    /// top-to-bottom. Trailing cells stay at the background color.
    ///
    /// Fails with `AssemblyError` when the sequence is empty or the panels
    /// do not share one size. Output bytes depend only on the panel
    /// sequence, so repeated runs produce identical canvases.
    pub fn assemble(&self, panels: &[RgbImage]) -> Result<RgbImage> {
        let first = panels.first().ok_or_else(|| {
            ConversionError::AssemblyError("no panels to assemble".to_string())
        })?;
        let (panel_width, panel_height) = first.dimensions();

        for (i, panel) in panels.iter().enumerate() {
            if panel.dimensions() != (panel_width, panel_height) {
                return Err(ConversionError::AssemblyError(format!(
                    "panel {} is {}x{}, expected {}x{}",
                    i,
                    panel.width(),
                    panel.height(),
                    panel_width,
                    panel_height
                )));
            }
        }

        let (columns, rows) = grid_dimensions(panels.len());
        debug!(
            "Assembling {} panels into {}x{} grid",
            panels.len(),
            columns,
            rows
        );

        let mut canvas = RgbImage::from_pixel(
            columns as u32 * panel_width,
            rows as u32 * panel_height,
            Rgb(self.background),
        );
        for (i, panel) in panels.iter().enumerate() {
            let x = (i % columns) as i64 * panel_width as i64;
            let y = (i / columns) as i64 * panel_height as i64;
            imageops::replace(&mut canvas, panel, x, y);
        }
        Ok(canvas)
    }
}
