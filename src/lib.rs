//! codab: resolve country configurations and load Codes for Administrative
//! Boundaries (CodAB) published on HDX.
//!
//! ```no_run
//! let country_config = codab::create_country_config("bgd")?;
//! let admin0 = codab::load_admin_boundaries(country_config.iso3.as_str(), 0)?;
//! println!("{} feature(s)", admin0.len());
//! # Ok::<(), codab::AppError>(())
//! ```

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    CodAb, CountrySelector, CountrySummary, DefaultContext, DownloadOptions, DownloadOutcome,
    DownloadStatus, LayerSelector, LoadOptions, LoadResult, available_countries, countries,
    create_context, create_country_config, create_custom_country_config, download_with,
    load_admin_boundaries, load_with,
};
pub use app::AppContext;
pub use app::config::{load_settings, resolve_data_dir};
pub use domain::{
    AppError, AttributeValue, BoundaryDataset, BoundaryFeature, CodAbConfig, CountryConfig,
    DataLayout, HdxApiConfig, Iso3, Settings,
};
