/// Rotation offset into the 360° hue wheel. Always in [0, 360).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HuePhase(f32);

impl HuePhase {
    pub const ZERO: HuePhase = HuePhase(0.0);

    /// Wraps any finite angle into [0, 360). Non-finite input maps to 0.
    pub fn new(degrees: f32) -> Self {
        Self(wrap_degrees(degrees))
    }

    pub fn degrees(self) -> f32 {
        self.0
    }

    pub fn advanced_by(self, step: f32) -> Self {
        Self::new(self.0 + step)
    }

    /// Hue of sample `index` out of `count` evenly spaced around the wheel.
    pub fn sample(self, index: usize, count: usize) -> f32 {
        if count == 0 {
            return self.0;
        }
        wrap_degrees(self.0 + 360.0 * index as f32 / count as f32)
    }
}

pub fn wrap_degrees(degrees: f32) -> f32 {
    if !degrees.is_finite() {
        return 0.0;
    }
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
