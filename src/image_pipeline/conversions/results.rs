//! Per-frame and per-run conversion records

use std::path::PathBuf;
use std::time::Duration;

/// One discovered sensor frame file, in capture order.
#[derive(Debug, Clone)]
pub struct FrameSource {
    /// Position in the capture sequence; determines output ordering
    pub sequence: usize,
    /// Path of the raw frame file
    pub path: PathBuf,
}

impl FrameSource {
    /// Filename stem used for deterministic output naming.
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| format!("frame_{:0>4}", self.sequence))
    }
}

/// Processing states a frame moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameState {
    Pending,
    Decoded,
    Normalized,
    Written,
    PanelsBuilt,
    Done,
    Failed,
}

/// Outcome of processing one frame.
#[derive(Debug, Clone)]
pub struct FrameResult {
    pub sequence: usize,
    pub stem: String,
    /// `Done`, or `Failed` with the state reached before the error
    pub state: FrameState,
    /// State the frame had reached when it failed (equals `state` on success)
    pub reached: FrameState,
    pub png_path: Option<PathBuf>,
    pub tiff_path: Option<PathBuf>,
    pub error: Option<String>,
}

impl FrameResult {
    pub fn succeeded(&self) -> bool {
        self.state == FrameState::Done
    }
}

/// Aggregated outcome of one conversion run.
#[derive(Debug)]
pub struct RunSummary {
    /// Per-frame results, in sequence order
    pub frames: Vec<FrameResult>,
    /// Path of the combined histogram image, when written
    pub histogram_mosaic: Option<PathBuf>,
    /// Path of the combined false-color image, when written
    pub false_color_mosaic: Option<PathBuf>,
    /// Why mosaic assembly was skipped or failed, if it was
    pub mosaic_error: Option<String>,
    /// Wall time for the whole run
    pub elapsed: Duration,
}

impl RunSummary {
    pub fn succeeded(&self) -> usize {
        self.frames.iter().filter(|f| f.succeeded()).count()
    }

    pub fn failed(&self) -> usize {
        self.frames.len() - self.succeeded()
    }

    /// At-least-partial success: one converted frame is enough.
    pub fn is_success(&self) -> bool {
        self.succeeded() > 0
    }
}
