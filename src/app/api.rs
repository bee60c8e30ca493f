//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::Path;

use tracing::debug;

use crate::adapters::{
    EmbeddedCountryCatalog, HttpHdxClient, RetryPolicy, RetryingHdxClient, ShapefileZipReader,
    read_country_config_file,
};
use crate::app::{
    AppContext,
    commands::{countries, download, load},
    config::{load_settings, resolve_data_dir},
};
use crate::ports::CountryCatalog;

pub use crate::app::codab::{CodAb, DownloadOutcome, DownloadStatus};
pub use crate::app::commands::CountrySelector;
pub use crate::app::commands::countries::CountrySummary;
pub use crate::app::commands::download::DownloadOptions;
pub use crate::app::commands::load::{LayerSelector, LoadOptions, LoadResult};
pub use crate::domain::{AppError, BoundaryDataset, CountryConfig, DataLayout, Iso3, Settings};

/// Context wired with the production adapters.
pub type DefaultContext =
    AppContext<EmbeddedCountryCatalog, RetryingHdxClient, ShapefileZipReader>;

/// Create an `AppContext` from settings.
pub fn create_context(settings: &Settings) -> Result<DefaultContext, AppError> {
    let layout = DataLayout::new(resolve_data_dir(settings)?);
    debug!(
        data_root = %layout.root().display(),
        api_url = %settings.hdx.api_url,
        "Creating context"
    );
    let http = HttpHdxClient::new(&settings.hdx)?;
    let hdx = RetryingHdxClient::new(Box::new(http), RetryPolicy::from_config(&settings.hdx));
    Ok(AppContext::new(EmbeddedCountryCatalog::new(), hdx, ShapefileZipReader::new(), layout))
}

// =============================================================================
// Country Configuration API
// =============================================================================

/// Resolve the embedded configuration for a country, e.g. `"bgd"`.
pub fn create_country_config(iso3: &str) -> Result<CountryConfig, AppError> {
    EmbeddedCountryCatalog::new().country_config(&Iso3::new(iso3)?)
}

/// Read a country configuration from a YAML file.
pub fn create_custom_country_config(path: impl AsRef<Path>) -> Result<CountryConfig, AppError> {
    read_country_config_file(path.as_ref())
}

/// ISO3 codes of the embedded configurations.
pub fn available_countries() -> Result<Vec<Iso3>, AppError> {
    EmbeddedCountryCatalog::new().available()
}

/// Summaries of the embedded configurations.
pub fn countries() -> Result<Vec<CountrySummary>, AppError> {
    countries::execute(&EmbeddedCountryCatalog::new())
}

// =============================================================================
// Boundary Data API
// =============================================================================

/// Download the raw CodAB archive for a country.
pub fn download_with(
    settings: &Settings,
    options: DownloadOptions,
) -> Result<DownloadOutcome, AppError> {
    let ctx = create_context(settings)?;
    download::execute(&ctx, options)
}

/// Load a boundary layer, downloading the archive first if requested.
pub fn load_with(settings: &Settings, options: LoadOptions) -> Result<LoadResult, AppError> {
    let ctx = create_context(settings)?;
    load::execute(&ctx, options)
}

/// Load boundaries for `iso3` at `admin_level` using default settings.
///
/// The data root is taken from `CODAB_DATA_DIR`; the archive is downloaded
/// from HDX when it is not cached.
pub fn load_admin_boundaries(iso3: &str, admin_level: u8) -> Result<BoundaryDataset, AppError> {
    let settings = load_settings(None)?;
    let result = load_with(
        &settings,
        LoadOptions {
            country: CountrySelector::Iso3(iso3.to_string()),
            layer: LayerSelector::AdminLevel(admin_level),
            download_missing: true,
        },
    )?;
    Ok(result.dataset)
}
