use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::frame::types::{Frame, FrameGeometry};

pub trait FrameReader {
    fn read_frame(&self, data: &[u8], geometry: &FrameGeometry) -> Result<Frame>;
}
