use crate::shared::color::Rgb;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, direction: Point, distance: f32) -> Point {
        Point::new(self.x + direction.x * distance, self.y + direction.y * distance)
    }
}

/// One short stroke of the border, drawn from the window edge inward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BorderSegment {
    pub outer: Point,
    pub inner: Point,
    pub color: Rgb,
    pub stroke_width: f32,
}
