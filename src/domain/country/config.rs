//! Country configuration model and YAML parsing.

use serde::{Deserialize, Serialize};

use super::CodAbConfig;
use crate::domain::{AppError, Iso3};

/// Everything needed to fetch and read data for one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CountryConfig {
    pub iso3: Iso3,
    pub codab: CodAbConfig,
}

/// Parse and validate a country configuration from YAML.
///
/// `source` names the origin (asset path or file path) for error messages.
pub fn parse_country_config(content: &str, source: &str) -> Result<CountryConfig, AppError> {
    let config: CountryConfig = serde_yaml::from_str(content).map_err(|e| {
        AppError::ParseError { what: format!("country config {source}"), details: e.to_string() }
    })?;

    config.codab.validate().map_err(|reason| AppError::InvalidCountryConfig {
        iso3: config.iso3.to_string(),
        reason,
    })?;

    Ok(config)
}
