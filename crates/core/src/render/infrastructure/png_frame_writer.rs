use std::path::Path;

use crate::render::domain::frame_writer::FrameWriter;
use crate::shared::frame::Frame;

/// Writes frames as image files using the `image` crate; the format
/// follows the file extension.
pub struct PngFrameWriter;

impl PngFrameWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PngFrameWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameWriter for PngFrameWriter {
    fn write(&self, path: &Path, frame: &Frame) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let img = image::RgbImage::from_raw(frame.width(), frame.height(), frame.data().to_vec())
            .ok_or("Failed to create image from frame data")?;
        img.save(path)?;
        Ok(())
    }
}

/// Decodes any supported image into an RGB frame, for use as an overlay
/// backdrop or image item.
pub fn load_image(path: &Path) -> Result<Frame, Box<dyn std::error::Error>> {
    let img = image::open(path)?.into_rgb8();
    let (width, height) = img.dimensions();
    Ok(Frame::new(img.into_raw(), width, height))
}
