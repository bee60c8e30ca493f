//! CodAB section of a country configuration.

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Placeholder substituted with the admin level in `layer_base_name`.
pub const ADMIN_LEVEL_PLACEHOLDER: &str = "{admin_level}";

const MAX_SUPPORTED_ADMIN_LEVEL: u8 = 10;

/// Where a country's administrative boundaries live on HDX and how the
/// layers inside the archive are named.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CodAbConfig {
    /// HDX dataset identifier, e.g. `cod-ab-bgd`.
    pub hdx_address: String,
    /// Resource within the dataset holding the zipped shapefiles.
    pub hdx_dataset_name: String,
    /// Layer name template containing `{admin_level}`.
    pub layer_base_name: String,
    /// Highest admin level available in the archive.
    pub admin_level_max: u8,
    /// Extra layers that do not follow `layer_base_name`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_layer_names: Vec<String>,
}

impl CodAbConfig {
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.hdx_address.trim().is_empty() {
            return Err("codab.hdx_address must not be empty".into());
        }
        if self.hdx_dataset_name.trim().is_empty() {
            return Err("codab.hdx_dataset_name must not be empty".into());
        }
        if !self.layer_base_name.contains(ADMIN_LEVEL_PLACEHOLDER) {
            return Err(format!(
                "codab.layer_base_name '{}' must contain {}",
                self.layer_base_name, ADMIN_LEVEL_PLACEHOLDER
            ));
        }
        if self.admin_level_max > MAX_SUPPORTED_ADMIN_LEVEL {
            return Err(format!(
                "codab.admin_level_max {} exceeds {}",
                self.admin_level_max, MAX_SUPPORTED_ADMIN_LEVEL
            ));
        }
        if let Some(pos) = self.custom_layer_names.iter().position(|name| name.trim().is_empty()) {
            return Err(format!("codab.custom_layer_names[{pos}] must not be empty"));
        }
        Ok(())
    }

    /// Layer name for an admin level, checked against `admin_level_max`.
    pub fn layer_name(&self, admin_level: u8) -> Result<String, AppError> {
        if admin_level > self.admin_level_max {
            return Err(AppError::AdminLevelOutOfRange {
                requested: admin_level,
                max: self.admin_level_max,
            });
        }
        Ok(self.layer_base_name.replace(ADMIN_LEVEL_PLACEHOLDER, &admin_level.to_string()))
    }

    /// Name of a custom layer by position.
    pub fn custom_layer_name(&self, index: usize) -> Result<&str, AppError> {
        self.custom_layer_names.get(index).map(String::as_str).ok_or(
            AppError::CustomLayerNotFound { index, available: self.custom_layer_names.len() },
        )
    }
}
