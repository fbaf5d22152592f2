use std::time::Duration;

use thiserror::Error;

use crate::shared::color::Rgb;
use crate::shared::constants::{
    DEFAULT_BORDER_WIDTH, DEFAULT_CORNER_RADIUS, DEFAULT_INTERVAL, DEGREES_PER_SECOND,
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("border width must be positive")]
    NonPositiveBorderWidth,
    #[error("tick interval must be positive")]
    NonPositiveInterval,
    #[error("frame rate must be positive")]
    NonPositiveFps,
    #[error("phase step must be a positive finite number of degrees, got {0}")]
    InvalidPhaseStep(f32),
}

/// Border parameters fixed for the lifetime of an animator.
///
/// `corner_radius == 0` draws square corners.
#[derive(Clone, Debug, PartialEq)]
pub struct BorderConfig {
    border_width: u32,
    interval: Duration,
    corner_radius: u32,
    phase_step: f32,
    background: Rgb,
}

impl BorderConfig {
    pub fn new(
        border_width: u32,
        interval: Duration,
        corner_radius: u32,
    ) -> Result<Self, ConfigurationError> {
        if border_width == 0 {
            return Err(ConfigurationError::NonPositiveBorderWidth);
        }
        if interval.is_zero() {
            return Err(ConfigurationError::NonPositiveInterval);
        }
        Ok(Self {
            border_width,
            interval,
            corner_radius,
            phase_step: phase_step_for(interval),
            background: default_background(),
        })
    }

    /// Interval of `1000 / fps` milliseconds.
    pub fn from_fps(
        border_width: u32,
        fps: u32,
        corner_radius: u32,
    ) -> Result<Self, ConfigurationError> {
        if fps == 0 {
            return Err(ConfigurationError::NonPositiveFps);
        }
        Self::new(
            border_width,
            Duration::from_secs(1) / fps,
            corner_radius,
        )
    }

    /// Overrides the step derived from the interval.
    pub fn with_phase_step(mut self, degrees: f32) -> Result<Self, ConfigurationError> {
        if !degrees.is_finite() || degrees <= 0.0 {
            return Err(ConfigurationError::InvalidPhaseStep(degrees));
        }
        self.phase_step = degrees;
        Ok(self)
    }

    pub fn with_background(mut self, background: Rgb) -> Self {
        self.background = background;
        self
    }

    pub fn border_width(&self) -> u32 {
        self.border_width
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn corner_radius(&self) -> u32 {
        self.corner_radius
    }

    pub fn is_rounded(&self) -> bool {
        self.corner_radius > 0
    }

    /// Degrees the hue phase advances per tick.
    pub fn phase_step(&self) -> f32 {
        self.phase_step
    }

    pub fn background(&self) -> Rgb {
        self.background
    }
}

impl Default for BorderConfig {
    fn default() -> Self {
        Self {
            border_width: DEFAULT_BORDER_WIDTH,
            interval: DEFAULT_INTERVAL,
            corner_radius: DEFAULT_CORNER_RADIUS,
            phase_step: phase_step_for(DEFAULT_INTERVAL),
            background: default_background(),
        }
    }
}

pub fn phase_step_for(interval: Duration) -> f32 {
    interval.as_secs_f32() * DEGREES_PER_SECOND
}

fn default_background() -> Rgb {
    Rgb::new(0xa9, 0xa9, 0xa9)
}
