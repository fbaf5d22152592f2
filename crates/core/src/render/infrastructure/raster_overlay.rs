use image::imageops::{self, FilterType};
use image::RgbImage;
use thiserror::Error;

use crate::animation::domain::overlay_surface::OverlaySurface;
use crate::border::domain::border_segment::{BorderSegment, Point};
use crate::render::domain::persistent_item::PersistentItem;
use crate::render::infrastructure::item_painter::paint_item;
use crate::shared::color::Rgb;
use crate::shared::constants::MAX_OVERLAY_DIMENSION;
use crate::shared::frame::Frame;
use crate::shared::size::Size;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OverlayError {
    #[error("overlay size {size} exceeds the {max}px limit")]
    TooLarge { size: Size, max: u32 },
    #[error("overlay has been released")]
    Released,
}

/// Software overlay that rasterizes border segments into an RGB frame.
///
/// Outside the border the frame shows the backdrop image when one is set,
/// otherwise the background color. Persistent items are painted above the
/// backdrop. Both survive every clear and resize.
pub struct RasterOverlay {
    frame: Option<Frame>,
    background: Rgb,
    backdrop: Option<Frame>,
    scaled_backdrop: Option<Frame>,
    items: Vec<PersistentItem>,
}

impl RasterOverlay {
    pub fn new(background: Rgb) -> Self {
        Self {
            frame: Some(Frame::filled(Size::ZERO, background)),
            background,
            backdrop: None,
            scaled_backdrop: None,
            items: Vec::new(),
        }
    }

    /// Persistent content drawn beneath the border, rescaled on resize.
    pub fn set_backdrop(&mut self, backdrop: Frame) {
        self.backdrop = Some(backdrop);
        self.rescale_backdrop();
        self.clear();
    }

    /// Adds content that stays beneath the border across redraws. It is
    /// painted immediately, so the current border stays visible.
    pub fn add_item(&mut self, item: PersistentItem) {
        if let Some(frame) = self.frame.as_mut() {
            paint_item(frame, &item);
        }
        self.items.push(item);
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// The current frame, or `None` once released.
    pub fn frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }

    pub fn is_released(&self) -> bool {
        self.frame.is_none()
    }

    fn rescale_backdrop(&mut self) {
        let size = self.size();
        self.scaled_backdrop = match &self.backdrop {
            Some(backdrop) if !size.is_empty() && !backdrop.size().is_empty() => {
                scale_frame(backdrop, size)
            }
            _ => None,
        };
    }
}

impl OverlaySurface for RasterOverlay {
    fn size(&self) -> Size {
        self.frame.as_ref().map_or(Size::ZERO, Frame::size)
    }

    fn resize(&mut self, size: Size) -> Result<(), Box<dyn std::error::Error>> {
        if size.width > MAX_OVERLAY_DIMENSION || size.height > MAX_OVERLAY_DIMENSION {
            return Err(OverlayError::TooLarge {
                size,
                max: MAX_OVERLAY_DIMENSION,
            }
            .into());
        }
        self.frame = Some(Frame::filled(size, self.background));
        self.rescale_backdrop();
        self.clear();
        Ok(())
    }

    fn clear(&mut self) {
        let Some(frame) = self.frame.as_mut() else {
            return;
        };
        match &self.scaled_backdrop {
            Some(backdrop) => frame.copy_from(backdrop),
            None => frame.fill(self.background),
        }
        for item in &self.items {
            paint_item(frame, item);
        }
    }

    fn draw_segments(
        &mut self,
        segments: &[BorderSegment],
    ) -> Result<(), Box<dyn std::error::Error>> {
        let frame = self.frame.as_mut().ok_or(OverlayError::Released)?;
        for segment in segments {
            let (x0, y0) = pixel(segment.outer);
            let (x1, y1) = pixel(segment.inner);
            draw_line(frame, x0, y0, x1, y1, segment.color);
            if segment.stroke_width > 1.0 {
                draw_line(frame, x0 + 1, y0, x1 + 1, y1, segment.color);
                draw_line(frame, x0, y0 + 1, x1, y1 + 1, segment.color);
            }
        }
        Ok(())
    }

    fn release(&mut self) {
        self.frame = None;
        self.scaled_backdrop = None;
        self.items.clear();
    }
}

fn pixel(point: Point) -> (i32, i32) {
    (point.x.floor() as i32, point.y.floor() as i32)
}

/// Bresenham line, both endpoints inclusive.
fn draw_line(frame: &mut Frame, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb) {
    let (mut x, mut y) = (x0, y0);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        frame.put_pixel(x, y, color);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

fn scale_frame(frame: &Frame, size: Size) -> Option<Frame> {
    if frame.size() == size {
        return Some(frame.clone());
    }
    let img = RgbImage::from_raw(frame.width(), frame.height(), frame.data().to_vec())?;
    let scaled = imageops::resize(&img, size.width, size.height, FilterType::Triangle);
    Some(Frame::new(scaled.into_raw(), size.width, size.height))
}
