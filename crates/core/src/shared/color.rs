use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("expected a color like #rrggbb, got {0:?}")]
    Format(String),
    #[error("invalid hex digits in {0:?}")]
    Digits(String),
}

/// 8-bit RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Color of the six-band rainbow ramp at `degrees` on the hue wheel.
    ///
    /// Bands: red → yellow → green → cyan → blue → magenta → red. Any finite
    /// angle is accepted and wrapped into [0, 360).
    pub fn rainbow(degrees: f32) -> Self {
        let hue = degrees.rem_euclid(360.0) / 60.0;
        let ramp = |t: f32| (255.0 * t.clamp(0.0, 1.0)) as u8;

        match hue {
            h if h < 1.0 => Rgb::new(255, ramp(h), 0),
            h if h < 2.0 => Rgb::new(ramp(2.0 - h), 255, 0),
            h if h < 3.0 => Rgb::new(0, 255, ramp(h - 2.0)),
            h if h < 4.0 => Rgb::new(0, ramp(4.0 - h), 255),
            h if h < 5.0 => Rgb::new(ramp(h - 4.0), 0, 255),
            h => Rgb::new(255, 0, ramp(6.0 - h)),
        }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .trim()
            .strip_prefix('#')
            .filter(|h| h.len() == 6 && h.is_ascii())
            .ok_or_else(|| ColorParseError::Format(s.to_string()))?;

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ColorParseError::Digits(s.to_string()))
        };

        Ok(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}
