use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::border::domain::border_config::{BorderConfig, ConfigurationError};
use crate::shared::color::{ColorParseError, Rgb};
use crate::shared::constants::{DEFAULT_BORDER_WIDTH, DEFAULT_CORNER_RADIUS};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SettingsError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error("invalid background: {0}")]
    Background(#[from] ColorParseError),
    #[error("set either interval_ms or fps, not both")]
    ConflictingRate,
}

/// Border parameters as supplied by a user: every field optional, unset
/// fields fall back to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BorderSettings {
    pub border_width: Option<u32>,
    pub interval_ms: Option<u64>,
    pub fps: Option<u32>,
    pub corner_radius: Option<u32>,
    pub phase_step: Option<f32>,
    pub background: Option<String>,
}

impl BorderSettings {
    /// Fields set in `overrides` win. The tick rate is taken as a unit, so an
    /// override of `fps` also drops an inherited `interval_ms`.
    pub fn merged_with(self, overrides: BorderSettings) -> BorderSettings {
        let overrides_rate = overrides.interval_ms.is_some() || overrides.fps.is_some();
        let (interval_ms, fps) = if overrides_rate {
            (overrides.interval_ms, overrides.fps)
        } else {
            (self.interval_ms, self.fps)
        };

        BorderSettings {
            border_width: overrides.border_width.or(self.border_width),
            interval_ms,
            fps,
            corner_radius: overrides.corner_radius.or(self.corner_radius),
            phase_step: overrides.phase_step.or(self.phase_step),
            background: overrides.background.or(self.background),
        }
    }

    pub fn to_config(&self) -> Result<BorderConfig, SettingsError> {
        let border_width = self.border_width.unwrap_or(DEFAULT_BORDER_WIDTH);
        let corner_radius = self.corner_radius.unwrap_or(DEFAULT_CORNER_RADIUS);

        let mut config = match (self.interval_ms, self.fps) {
            (Some(_), Some(_)) => return Err(SettingsError::ConflictingRate),
            (Some(ms), None) => {
                BorderConfig::new(border_width, Duration::from_millis(ms), corner_radius)?
            }
            (None, Some(fps)) => BorderConfig::from_fps(border_width, fps, corner_radius)?,
            (None, None) => BorderConfig::new(
                border_width,
                BorderConfig::default().interval(),
                corner_radius,
            )?,
        };

        if let Some(step) = self.phase_step {
            config = config.with_phase_step(step)?;
        }
        if let Some(background) = &self.background {
            config = config.with_background(background.parse::<Rgb>()?);
        }
        Ok(config)
    }
}
