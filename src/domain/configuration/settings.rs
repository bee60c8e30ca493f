use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Runtime settings read from an optional TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Root of the local data directory. `CODAB_DATA_DIR` takes precedence.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// HDX API access.
    #[serde(default)]
    pub hdx: HdxApiConfig,
}

impl Settings {
    pub fn validate(&self) -> Result<(), AppError> {
        self.hdx.validate()
    }
}

/// HDX API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HdxApiConfig {
    /// CKAN action API base URL.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Maximum attempts per request.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Base delay between retries in milliseconds.
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for HdxApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: default_timeout(),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

impl HdxApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("hdx.timeout_secs must be greater than 0"));
        }
        if self.max_retries == 0 {
            return Err(AppError::config_error("hdx.max_retries must be greater than 0"));
        }
        if self.retry_delay_ms == 0 {
            return Err(AppError::config_error("hdx.retry_delay_ms must be greater than 0"));
        }
        if self.api_url.cannot_be_a_base() {
            return Err(AppError::config_error(format!(
                "hdx.api_url '{}' cannot be used as a base URL",
                self.api_url
            )));
        }
        Ok(())
    }
}

fn default_api_url() -> Url {
    Url::parse("https://data.humdata.org/api/3/action/").expect("Default API URL must be valid")
}

fn default_timeout() -> u64 {
    120
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    1000
}
