use iced::mouse;
use iced::widget::canvas::{self, LineCap, Path, Stroke};
use iced::{Color, Point, Rectangle, Renderer, Theme};

use crate::host::IcedOverlay;

/// Canvas program that strokes the overlay's border segments.
///
/// Stacked above the window content; the canvas covers the whole window so
/// segment coordinates map one-to-one onto logical pixels.
pub struct BorderCanvas<'a> {
    overlay: &'a IcedOverlay,
}

impl<'a> BorderCanvas<'a> {
    pub fn new(overlay: &'a IcedOverlay) -> Self {
        Self { overlay }
    }
}

impl<Message> canvas::Program<Message> for BorderCanvas<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let geometry = self.overlay.cache().draw(renderer, bounds.size(), |frame| {
            for segment in self.overlay.segments() {
                let [r, g, b] = segment.color.to_array();
                let path = Path::line(
                    Point::new(segment.outer.x, segment.outer.y),
                    Point::new(segment.inner.x, segment.inner.y),
                );
                frame.stroke(
                    &path,
                    Stroke::default()
                        .with_color(Color::from_rgb8(r, g, b))
                        .with_width(segment.stroke_width)
                        .with_line_cap(LineCap::Square),
                );
            }
        });
        vec![geometry]
    }
}
