//! Capture metadata loading.
//!
//! The instrument ships a JSON metadata record next to the frame files. The
//! pipeline only needs the camera geometry from it; plot identifier and
//! capture timestamp ride along for the run summary.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::frame::FrameGeometry;

/// Camera resolution used when the metadata does not carry one, per the
/// instrument's original fixed metadata.
pub const DEFAULT_RESOLUTION: (usize, usize) = (1936, 1216);

/// Bit depth used when the metadata does not declare one. The original
/// instrument wrote 8-bit captures.
pub const DEFAULT_BITS_PER_SAMPLE: u32 = 8;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CaptureMetadata {
    #[serde(default)]
    pub sensor_fixed_metadata: Option<SensorFixedMetadata>,
    /// Plot or experiment identifier
    #[serde(default)]
    pub experiment: Option<String>,
    /// Capture timestamp, as recorded by the instrument
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SensorFixedMetadata {
    /// Camera resolution as a "WIDTHxHEIGHT" string
    #[serde(default)]
    pub camera_resolution: Option<String>,
    /// Declared sensor bit depth
    #[serde(default)]
    pub bits_per_sample: Option<u32>,
}

impl CaptureMetadata {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let metadata: CaptureMetadata = serde_json::from_str(&contents).map_err(|e| {
            ConversionError::MetadataError(format!("{}: {}", path.display(), e))
        })?;
        debug!("Loaded capture metadata from {}", path.display());
        Ok(metadata)
    }

    /// Frame geometry for the capture session, falling back to the
    /// instrument defaults for anything the record omits.
    pub fn frame_geometry(&self) -> Result<FrameGeometry> {
        let fixed = self.sensor_fixed_metadata.as_ref();

        let (width, height) = match fixed.and_then(|f| f.camera_resolution.as_deref()) {
            Some(resolution) => parse_resolution(resolution)?,
            None => DEFAULT_RESOLUTION,
        };
        let bits_per_sample = fixed
            .and_then(|f| f.bits_per_sample)
            .unwrap_or(DEFAULT_BITS_PER_SAMPLE);

        Ok(FrameGeometry {
            width,
            height,
            bits_per_sample,
        })
    }
}

fn parse_resolution(resolution: &str) -> Result<(usize, usize)> {
    let mut parts = resolution.split('x');
    let width = parts.next().and_then(|v| v.trim().parse().ok());
    let height = parts.next().and_then(|v| v.trim().parse().ok());
    match (width, height, parts.next()) {
        (Some(w), Some(h), None) if w > 0 && h > 0 => Ok((w, h)),
        _ => Err(ConversionError::MetadataError(format!(
            "malformed camera resolution: {resolution:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_geometry_from_json() {
        let metadata: CaptureMetadata = serde_json::from_str(
            r#"{
                "sensor_fixed_metadata": {
                    "camera_resolution": "1936x1216",
                    "bits_per_sample": 12
                },
                "experiment": "S4_Lettuce",
                "timestamp": "2018-08-18T10:12:39"
            }"#,
        )
        .unwrap();

        let geometry = metadata.frame_geometry().unwrap();
        assert_eq!(geometry.width, 1936);
        assert_eq!(geometry.height, 1216);
        assert_eq!(geometry.bits_per_sample, 12);
        assert_eq!(metadata.experiment.as_deref(), Some("S4_Lettuce"));
    }

    #[test]
    fn falls_back_to_instrument_defaults() {
        let metadata = CaptureMetadata::default();
        let geometry = metadata.frame_geometry().unwrap();
        assert_eq!((geometry.width, geometry.height), DEFAULT_RESOLUTION);
        assert_eq!(geometry.bits_per_sample, DEFAULT_BITS_PER_SAMPLE);
    }

    #[test]
    fn rejects_malformed_resolution() {
        let metadata: CaptureMetadata = serde_json::from_str(
            r#"{"sensor_fixed_metadata": {"camera_resolution": "huge"}}"#,
        )
        .unwrap();
        let err = metadata.frame_geometry().unwrap_err();
        assert!(matches!(err, ConversionError::MetadataError(_)));
    }
}
