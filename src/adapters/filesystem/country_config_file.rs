//! Country configurations supplied as YAML files outside the binary.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, CountryConfig, parse_country_config};

/// Read and validate a custom country configuration file.
pub fn read_country_config_file(path: &Path) -> Result<CountryConfig, AppError> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AppError::config_error(format!("Country config file not found: {}", path.display()))
        } else {
            AppError::Io(e)
        }
    })?;
    parse_country_config(&content, &path.display().to_string())
}
