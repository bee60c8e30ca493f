use serde::Serialize;

use crate::domain::{AppError, Iso3};
use crate::ports::CountryCatalog;

/// One row of `codab countries`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountrySummary {
    pub iso3: Iso3,
    pub hdx_address: String,
    pub admin_level_max: u8,
    pub custom_layers: usize,
}

/// List every country the catalog knows about.
pub fn execute<C: CountryCatalog>(catalog: &C) -> Result<Vec<CountrySummary>, AppError> {
    catalog
        .available()?
        .into_iter()
        .map(|iso3| {
            let config = catalog.country_config(&iso3)?;
            Ok(CountrySummary {
                iso3,
                hdx_address: config.codab.hdx_address,
                admin_level_max: config.codab.admin_level_max,
                custom_layers: config.codab.custom_layer_names.len(),
            })
        })
        .collect()
}
