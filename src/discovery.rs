//! Sensor frame discovery.
//!
//! The instrument names frame files with a zero-padded index: `...0000.bin`
//! through `...0101.bin`. Discovery accepts either a single folder or an
//! explicit file list, keeps the files matching that pattern, and orders
//! them by the embedded index.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::conversions::FrameSource;

/// Expands the inputs and returns the sensor frames in capture order.
///
/// A single directory input is replaced by its contents (the original
/// instrument workflow hands over one folder per plot). Non-sensor files
/// and nested directories are skipped with a log line, not an error.
pub fn discover_frames(inputs: &[PathBuf]) -> Result<Vec<FrameSource>> {
    let candidates = expand_inputs(inputs)?;

    let mut sources = Vec::new();
    for path in candidates {
        if path.is_dir() {
            warn!("Skipping folder '{}' found amongst file list", path.display());
            continue;
        }
        match frame_index(&path) {
            Some(sequence) => sources.push(FrameSource { sequence, path }),
            None => info!("Skipping non-sensor file '{}'", path.display()),
        }
    }

    sources.sort_by_key(|source| source.sequence);
    Ok(sources)
}

fn expand_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    if let [only] = inputs {
        if only.is_dir() {
            let mut entries: Vec<PathBuf> = std::fs::read_dir(only)?
                .collect::<std::io::Result<Vec<_>>>()?
                .into_iter()
                .map(|entry| entry.path())
                .collect();
            entries.sort();
            return Ok(entries);
        }
    }
    Ok(inputs.to_vec())
}

/// Extracts the capture index from a `...NNNN.bin` filename.
fn frame_index(path: &Path) -> Option<usize> {
    let name = path.file_name()?.to_str()?;
    let stem = name.strip_suffix(".bin")?;
    if stem.len() < 4 {
        return None;
    }
    let digits = stem.get(stem.len() - 4..)?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
