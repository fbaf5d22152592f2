use crate::shared::color::Rgb;
use crate::shared::frame::Frame;
use crate::shared::size::Size;

/// Overlay content that survives every border redraw.
///
/// Items are painted in insertion order above the backdrop and below the
/// border. Positions are the item's top-left corner in overlay pixels and
/// may lie partly outside the overlay.
#[derive(Clone, Debug)]
pub enum PersistentItem {
    /// Bitmap text, 8x8 pixels per glyph times `scale`. `\n` starts a new
    /// line.
    Text {
        x: i32,
        y: i32,
        text: String,
        color: Rgb,
        scale: u32,
    },
    /// An image stamped at its natural size.
    Image { x: i32, y: i32, image: Frame },
    /// A filled rectangle.
    Rect {
        x: i32,
        y: i32,
        size: Size,
        color: Rgb,
    },
}

impl PersistentItem {
    pub fn text(x: i32, y: i32, text: impl Into<String>, color: Rgb, scale: u32) -> Self {
        PersistentItem::Text {
            x,
            y,
            text: text.into(),
            color,
            scale: scale.max(1),
        }
    }

    pub fn image(x: i32, y: i32, image: Frame) -> Self {
        PersistentItem::Image { x, y, image }
    }

    pub fn rect(x: i32, y: i32, size: Size, color: Rgb) -> Self {
        PersistentItem::Rect { x, y, size, color }
    }
}
