use std::path::PathBuf;

use rainbow_border_core::border::domain::border_config::BorderConfig;
use rainbow_border_core::border::infrastructure::settings_file::load_settings;
use rainbow_border_core::shared::constants::SETTINGS_FILENAME;

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("RainbowBorder").join(SETTINGS_FILENAME))
}

/// Border configuration from the user's settings file. A missing or invalid
/// file falls back to the defaults. The file is never written.
pub fn load_config() -> BorderConfig {
    let Some(path) = config_path() else {
        return BorderConfig::default();
    };
    if !path.exists() {
        log::debug!("No settings at {}, using defaults", path.display());
        return BorderConfig::default();
    }

    let settings = match load_settings(&path) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("{e}; using default border settings");
            return BorderConfig::default();
        }
    };
    match settings.to_config() {
        Ok(config) => config,
        Err(e) => {
            log::warn!(
                "Invalid border settings in {}: {e}; using defaults",
                path.display()
            );
            BorderConfig::default()
        }
    }
}
