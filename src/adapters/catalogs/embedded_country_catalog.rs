use include_dir::{Dir, include_dir};
use tracing::debug;

use crate::domain::{AppError, CountryConfig, Iso3, parse_country_config};
use crate::ports::CountryCatalog;

static COUNTRIES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/assets/countries");

const CONFIG_EXTENSION: &str = "yaml";

/// Country configurations compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCountryCatalog;

impl EmbeddedCountryCatalog {
    pub fn new() -> Self {
        Self
    }

    fn asset_path(iso3: &Iso3) -> String {
        format!("{}.{}", iso3, CONFIG_EXTENSION)
    }
}

impl CountryCatalog for EmbeddedCountryCatalog {
    fn country_config(&self, iso3: &Iso3) -> Result<CountryConfig, AppError> {
        let path = Self::asset_path(iso3);
        let Some(file) = COUNTRIES_DIR.get_file(&path) else {
            let available =
                self.available()?.iter().map(Iso3::as_str).collect::<Vec<_>>().join(", ");
            return Err(AppError::CountryConfigNotFound { iso3: iso3.to_string(), available });
        };

        let content = file.contents_utf8().ok_or_else(|| {
            AppError::AssetError(format!("Country config asset is not UTF-8: {path}"))
        })?;
        let config = parse_country_config(content, &path)?;

        if &config.iso3 != iso3 {
            return Err(AppError::AssetError(format!(
                "Country config asset {path} declares iso3 '{}'",
                config.iso3
            )));
        }

        debug!(iso3 = %iso3, asset = %path, "Resolved embedded country config");
        Ok(config)
    }

    fn available(&self) -> Result<Vec<Iso3>, AppError> {
        let mut codes = COUNTRIES_DIR
            .files()
            .filter(|file| {
                file.path().extension().is_some_and(|ext| ext == CONFIG_EXTENSION)
            })
            .filter_map(|file| file.path().file_stem().and_then(|stem| stem.to_str()))
            .map(Iso3::new)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| AppError::AssetError(format!("Invalid country config asset name: {e}")))?;
        codes.sort();
        Ok(codes)
    }
}
