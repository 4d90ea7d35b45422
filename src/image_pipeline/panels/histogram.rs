//! Histogram panel rendering.
//!
//! Each panel is a fixed-size bar chart of the frame's 8-bit intensity
//! distribution. Bars scale to the panel's own maximum bin count; PSII
//! induction series span orders of magnitude in brightness, and a global
//! scale would flatten most panels.

use image::{Rgb, RgbImage};

use crate::image_pipeline::normalize::types::NormalizedFrame;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const BAR_COLOR: Rgb<u8> = Rgb([31, 119, 180]);

pub struct HistogramBuilder {
    bins: usize,
    panel_width: u32,
    panel_height: u32,
}

impl HistogramBuilder {
    pub fn new(bins: usize, panel_size: (u32, u32)) -> Self {
        Self {
            bins: bins.clamp(1, 256),
            panel_width: panel_size.0,
            panel_height: panel_size.1,
        }
    }

    /// Bin counts over the full 8-bit range. Every sample lands in exactly
    /// one bin, so the counts always sum to the frame's pixel count.
    pub fn counts(&self, frame: &NormalizedFrame) -> Vec<u64> {
        let mut counts = vec![0u64; self.bins];
        for &v in &frame.eight_bit {
            counts[v as usize * self.bins / 256] += 1;
        }
        counts
    }

    /// Renders the distribution as a fixed-size panel image.
    ///
    /// All integer arithmetic; identical input arrays always produce
    /// byte-identical panels.
    pub fn build(&self, frame: &NormalizedFrame) -> RgbImage {
        let counts = self.counts(frame);
        let max_count = counts.iter().copied().max().unwrap_or(0);

        let mut panel = RgbImage::from_pixel(self.panel_width, self.panel_height, BACKGROUND);
        if max_count == 0 {
            return panel;
        }

        let bar_width = (self.panel_width / self.bins as u32).max(1);
        for (bin, &count) in counts.iter().enumerate() {
            let x0 = bin as u32 * bar_width;
            if x0 >= self.panel_width {
                break;
            }
            let bar_height = (count * self.panel_height as u64 / max_count) as u32;
            let x1 = (x0 + bar_width).min(self.panel_width);
            for y in self.panel_height - bar_height..self.panel_height {
                for x in x0..x1 {
                    panel.put_pixel(x, y, BAR_COLOR);
                }
            }
        }
        panel
    }
}
