use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};

use crate::render::domain::persistent_item::PersistentItem;
use crate::shared::color::Rgb;
use crate::shared::frame::Frame;
use crate::shared::size::Size;

const GLYPH_SIZE: i32 = 8;

/// Paints one persistent item into `frame`, clipping at the frame edges.
pub fn paint_item(frame: &mut Frame, item: &PersistentItem) {
    match item {
        PersistentItem::Text {
            x,
            y,
            text,
            color,
            scale,
        } => paint_text(frame, *x, *y, text, *color, *scale),
        PersistentItem::Image { x, y, image } => paint_image(frame, *x, *y, image),
        PersistentItem::Rect { x, y, size, color } => paint_rect(frame, *x, *y, *size, *color),
    }
}

/// Pixel extent of `text` at `scale`, as laid out by [`paint_item`].
pub fn text_size(text: &str, scale: u32) -> Size {
    let scale = scale.max(1);
    let lines: Vec<&str> = text.split('\n').collect();
    let columns = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u32;
    Size::new(
        columns * GLYPH_SIZE as u32 * scale,
        lines.len() as u32 * GLYPH_SIZE as u32 * scale,
    )
}

fn paint_text(frame: &mut Frame, x: i32, y: i32, text: &str, color: Rgb, scale: u32) {
    let scale = scale.max(1) as i32;
    let advance = GLYPH_SIZE * scale;

    for (line_no, line) in text.split('\n').enumerate() {
        let top = y + line_no as i32 * advance;
        for (col, ch) in line.chars().enumerate() {
            // Characters outside both tables render as blanks.
            let Some(rows) = BASIC_FONTS.get(ch).or_else(|| LATIN_FONTS.get(ch)) else {
                continue;
            };
            let left = x + col as i32 * advance;
            for (row, &bits) in rows.iter().enumerate() {
                for bit in 0..GLYPH_SIZE {
                    if bits & (1u8 << bit) == 0 {
                        continue;
                    }
                    let px = left + bit * scale;
                    let py = top + row as i32 * scale;
                    fill_block(frame, px, py, scale, scale, color);
                }
            }
        }
    }
}

fn paint_image(frame: &mut Frame, x: i32, y: i32, image: &Frame) {
    for iy in 0..image.height() {
        for ix in 0..image.width() {
            if let Some(color) = image.pixel(ix, iy) {
                frame.put_pixel(x + ix as i32, y + iy as i32, color);
            }
        }
    }
}

fn paint_rect(frame: &mut Frame, x: i32, y: i32, size: Size, color: Rgb) {
    fill_block(frame, x, y, size.width as i32, size.height as i32, color);
}

fn fill_block(frame: &mut Frame, x: i32, y: i32, width: i32, height: i32, color: Rgb) {
    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = x.saturating_add(width).min(frame.width() as i32);
    let y1 = y.saturating_add(height).min(frame.height() as i32);
    for py in y0..y1 {
        for px in x0..x1 {
            frame.put_pixel(px, py, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Rgb = Rgb::new(0, 0, 0);
    const INK: Rgb = Rgb::new(255, 255, 255);

    fn canvas(w: u32, h: u32) -> Frame {
        Frame::filled(Size::new(w, h), BG)
    }

    fn inked(frame: &Frame) -> usize {
        frame
            .data()
            .chunks(3)
            .filter(|px| *px == INK.to_array())
            .count()
    }

    #[test]
    fn test_text_inks_only_its_box() {
        let mut frame = canvas(40, 20);
        paint_item(&mut frame, &PersistentItem::text(4, 2, "Hi", INK, 1));

        assert!(inked(&frame) > 0);
        for y in 0..20 {
            for x in 0..40 {
                let inside = (4..20).contains(&x) && (2..10).contains(&y);
                if !inside {
                    assert_eq!(frame.pixel(x, y), Some(BG), "ink outside at ({x},{y})");
                }
            }
        }
    }

    #[test]
    fn test_text_scale_multiplies_ink() {
        let mut single = canvas(64, 64);
        let mut double = canvas(64, 64);
        paint_item(&mut single, &PersistentItem::text(0, 0, "A", INK, 1));
        paint_item(&mut double, &PersistentItem::text(0, 0, "A", INK, 2));
        assert_eq!(inked(&double), 4 * inked(&single));
    }

    #[test]
    fn test_space_is_blank() {
        let mut frame = canvas(16, 16);
        paint_item(&mut frame, &PersistentItem::text(0, 0, " ", INK, 1));
        assert_eq!(inked(&frame), 0);
    }

    #[test]
    fn test_text_size_counts_lines_and_columns() {
        assert_eq!(text_size("Welcome\nback", 2), Size::new(7 * 16, 2 * 16));
        assert_eq!(text_size("", 1), Size::new(0, 8));
    }

    #[test]
    fn test_image_is_stamped_and_clipped() {
        let stamp = Frame::filled(Size::new(4, 4), INK);
        let mut frame = canvas(10, 10);
        paint_item(&mut frame, &PersistentItem::image(8, -2, stamp));

        assert_eq!(frame.pixel(8, 0), Some(INK));
        assert_eq!(frame.pixel(9, 1), Some(INK));
        assert_eq!(frame.pixel(9, 2), Some(BG));
        assert_eq!(frame.pixel(7, 0), Some(BG));
        assert_eq!(inked(&frame), 4);
    }

    #[test]
    fn test_rect_fills_clipped_area() {
        let mut frame = canvas(10, 10);
        paint_item(
            &mut frame,
            &PersistentItem::rect(-3, 5, Size::new(5, 100), INK),
        );
        assert_eq!(inked(&frame), 2 * 5);
        assert_eq!(frame.pixel(1, 9), Some(INK));
        assert_eq!(frame.pixel(2, 9), Some(BG));
    }
}
