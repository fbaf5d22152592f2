use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::border::domain::border_settings::BorderSettings;

#[derive(Error, Debug)]
pub enum SettingsFileError {
    #[error("failed to read settings from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads border settings from a JSON file. The file is never written.
pub fn load_settings(path: &Path) -> Result<BorderSettings, SettingsFileError> {
    let json = fs::read_to_string(path).map_err(|source| SettingsFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&json).map_err(|source| SettingsFileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r##"{"border_width": 7, "background": "#000000"}"##).unwrap();

        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.border_width, Some(7));
        assert_eq!(settings.background.as_deref(), Some("#000000"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_settings(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(SettingsFileError::Read { .. })));
    }

    #[test]
    fn test_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ border_width: ").unwrap();
        let err = load_settings(&path).unwrap_err();
        assert!(matches!(err, SettingsFileError::Parse { .. }));
        assert!(err.to_string().contains("settings.json"));
    }
}
