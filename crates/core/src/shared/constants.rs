use std::time::Duration;

pub const DEFAULT_BORDER_WIDTH: u32 = 5;
pub const DEFAULT_CORNER_RADIUS: u32 = 10;
pub const DEFAULT_FPS: u32 = 20;
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// X11 "dark gray".
pub const DEFAULT_BACKGROUND_HEX: &str = "#a9a9a9";

/// Hue rotation speed used to derive the per-tick phase step from the interval.
pub const DEGREES_PER_SECOND: f32 = 100.0;

/// Distance along the outline between two sampled colors, in pixels.
pub const SEGMENT_SPACING: f32 = 1.0;

pub const STRAIGHT_STROKE_WIDTH: f32 = 1.0;
pub const ARC_STROKE_WIDTH: f32 = 2.0;

/// Largest overlay edge the software rasterizer will allocate.
pub const MAX_OVERLAY_DIMENSION: u32 = 16_384;

/// Finest timer resolution a host scheduler is expected to honor.
pub const MIN_TICK_RESOLUTION: Duration = Duration::from_millis(1);

pub const SETTINGS_FILENAME: &str = "settings.json";
