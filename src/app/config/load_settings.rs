//! Settings loading from the optional TOML file and the environment.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, DATA_DIR_ENV, Settings};

/// Load settings from `path`, or defaults when no file is given.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, AppError> {
    let settings = match path {
        Some(path) => {
            if !path.exists() {
                return Err(AppError::config_error(format!(
                    "Settings file not found: {}",
                    path.display()
                )));
            }
            let content = fs::read_to_string(path)?;
            toml::from_str::<Settings>(&content)?
        }
        None => Settings::default(),
    };

    settings.validate()?;
    Ok(settings)
}

/// Data root: `CODAB_DATA_DIR` if set and non-empty, otherwise `data_dir` from settings.
pub fn resolve_data_dir(settings: &Settings) -> Result<PathBuf, AppError> {
    if let Some(value) = std::env::var_os(DATA_DIR_ENV).filter(|value| !value.is_empty()) {
        return Ok(PathBuf::from(value));
    }

    settings
        .data_dir
        .clone()
        .ok_or_else(|| AppError::EnvironmentVariableMissing(DATA_DIR_ENV.to_string()))
}
