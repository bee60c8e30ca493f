//! Country configuration lookup port.

use crate::domain::{AppError, CountryConfig, Iso3};

/// Source of country configurations keyed by ISO3 code.
pub trait CountryCatalog {
    /// Resolve the configuration for a country.
    fn country_config(&self, iso3: &Iso3) -> Result<CountryConfig, AppError>;

    /// Every country this catalog can resolve, sorted.
    fn available(&self) -> Result<Vec<Iso3>, AppError>;
}
