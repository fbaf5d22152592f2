use std::path::Path;

use crate::shared::frame::Frame;

/// Persists a rendered overlay frame.
pub trait FrameWriter {
    fn write(&self, path: &Path, frame: &Frame) -> Result<(), Box<dyn std::error::Error>>;
}
