use std::f32::consts::{FRAC_PI_2, PI};

use crate::border::domain::border_segment::{BorderSegment, Point};
use crate::border::domain::gradient::rainbow_gradient;
use crate::border::domain::hue_phase::HuePhase;
use crate::shared::constants::{ARC_STROKE_WIDTH, STRAIGHT_STROKE_WIDTH};
use crate::shared::size::Size;

#[derive(Clone, Debug)]
enum Piece {
    Edge {
        start: Point,
        direction: Point,
        normal: Point,
        length: f32,
    },
    Arc {
        center: Point,
        radius: f32,
        start_angle: f32,
    },
}

impl Piece {
    fn length(&self) -> f32 {
        match self {
            Piece::Edge { length, .. } => *length,
            Piece::Arc { radius, .. } => FRAC_PI_2 * radius,
        }
    }

    /// Outline point `distance` into this piece, its inward normal, and
    /// whether it lies on a corner.
    fn locate(&self, distance: f32) -> (Point, Point, bool) {
        match *self {
            Piece::Edge {
                start,
                direction,
                normal,
                ..
            } => (start.offset(direction, distance), normal, false),
            Piece::Arc {
                center,
                radius,
                start_angle,
            } => {
                let angle = start_angle + distance / radius;
                let (sin, cos) = angle.sin_cos();
                let outer = Point::new(center.x + radius * cos, center.y + radius * sin);
                (outer, Point::new(-cos, -sin), true)
            }
        }
    }
}

/// Closed border outline of a window, walked clockwise.
///
/// The outline runs through pixel centers, starting where the top-left
/// corner ends: top edge, top-right arc, right edge, bottom-right arc, bottom
/// edge, bottom-left arc, left edge, top-left arc. Arcs are omitted for
/// square corners.
#[derive(Clone, Debug)]
pub struct BorderPath {
    pieces: Vec<Piece>,
    perimeter: f32,
    depth: f32,
    radius: f32,
}

impl BorderPath {
    /// Returns `None` when the window is too small to hold the border.
    pub fn fit(size: Size, border_width: u32, corner_radius: u32) -> Option<Self> {
        if size.is_empty() || !size.exceeds(border_width) {
            return None;
        }

        let (left, top) = (0.5, 0.5);
        let (right, bottom) = (size.width as f32 - 0.5, size.height as f32 - 0.5);
        let (outline_w, outline_h) = (right - left, bottom - top);
        let r = (corner_radius as f32).min(outline_w / 2.0).min(outline_h / 2.0);

        let edge = |start: Point, direction: Point, normal: Point, length: f32| Piece::Edge {
            start,
            direction,
            normal,
            length,
        };
        let arc = |center: Point, start_angle: f32| Piece::Arc {
            center,
            radius: r,
            start_angle,
        };

        let horizontal = outline_w - 2.0 * r;
        let vertical = outline_h - 2.0 * r;
        let mut pieces = vec![
            edge(
                Point::new(left + r, top),
                Point::new(1.0, 0.0),
                Point::new(0.0, 1.0),
                horizontal,
            ),
            arc(Point::new(right - r, top + r), -FRAC_PI_2),
            edge(
                Point::new(right, top + r),
                Point::new(0.0, 1.0),
                Point::new(-1.0, 0.0),
                vertical,
            ),
            arc(Point::new(right - r, bottom - r), 0.0),
            edge(
                Point::new(right - r, bottom),
                Point::new(-1.0, 0.0),
                Point::new(0.0, -1.0),
                horizontal,
            ),
            arc(Point::new(left + r, bottom - r), FRAC_PI_2),
            edge(
                Point::new(left, bottom - r),
                Point::new(0.0, -1.0),
                Point::new(1.0, 0.0),
                vertical,
            ),
            arc(Point::new(left + r, top + r), PI),
        ];
        pieces.retain(|p| p.length() > 0.0);

        let perimeter: f32 = pieces.iter().map(Piece::length).sum();
        if perimeter <= 0.0 {
            return None;
        }

        Some(Self {
            pieces,
            perimeter,
            depth: border_width.saturating_sub(1) as f32,
            radius: r,
        })
    }

    pub fn perimeter(&self) -> f32 {
        self.perimeter
    }

    /// Corner radius after clamping to half the shorter side.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Number of segments so that consecutive samples are about `spacing`
    /// pixels apart. Proportional to the perimeter, never zero.
    pub fn segment_count(&self, spacing: f32) -> usize {
        ((self.perimeter / spacing.max(f32::EPSILON)).round() as usize).max(1)
    }

    /// Outline point at `distance` along the path, with its inward normal.
    pub fn point_at(&self, distance: f32) -> (Point, Point, bool) {
        let mut remaining = distance.rem_euclid(self.perimeter);
        for piece in &self.pieces {
            let length = piece.length();
            if remaining < length {
                return piece.locate(remaining);
            }
            remaining -= length;
        }
        // Float drift past the final piece lands on its end.
        let last = &self.pieces[self.pieces.len() - 1];
        last.locate(last.length())
    }

    /// Colored segments for one frame: hues start at `phase` and wrap once
    /// around the wheel over the full perimeter.
    pub fn segments(&self, phase: HuePhase, spacing: f32) -> Vec<BorderSegment> {
        let count = self.segment_count(spacing);
        let step = self.perimeter / count as f32;

        rainbow_gradient(phase, count)
            .into_iter()
            .enumerate()
            .map(|(i, color)| {
                let (outer, normal, on_arc) = self.point_at(i as f32 * step);
                BorderSegment {
                    outer,
                    inner: outer.offset(normal, self.depth),
                    color,
                    stroke_width: if on_arc {
                        ARC_STROKE_WIDTH
                    } else {
                        STRAIGHT_STROKE_WIDTH
                    },
                }
            })
            .collect()
    }
}
