pub mod border_config;
pub mod border_path;
pub mod border_segment;
pub mod border_settings;
pub mod gradient;
pub mod hue_phase;
