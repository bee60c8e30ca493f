pub mod countries;
pub mod download;
pub mod load;

use std::path::PathBuf;

use crate::adapters::read_country_config_file;
use crate::domain::{AppError, CountryConfig, Iso3};
use crate::ports::CountryCatalog;

/// How the user picked the country to work on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountrySelector {
    /// Look up an embedded configuration.
    Iso3(String),
    /// Read a configuration file.
    File(PathBuf),
}

impl CountrySelector {
    pub fn resolve<C: CountryCatalog>(&self, catalog: &C) -> Result<CountryConfig, AppError> {
        match self {
            CountrySelector::Iso3(code) => catalog.country_config(&Iso3::new(code)?),
            CountrySelector::File(path) => read_country_config_file(path),
        }
    }
}
