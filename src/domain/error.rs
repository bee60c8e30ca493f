use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for codab operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Required environment variable is not set.
    #[error("Environment variable '{0}' is not set")]
    EnvironmentVariableMissing(String),

    /// Country identifier is not a three-letter code.
    #[error("Invalid ISO3 country code '{0}': must be exactly three ASCII letters")]
    InvalidIso3(String),

    /// No embedded configuration exists for the country.
    #[error("No country configuration for '{iso3}'. Available: {available}")]
    CountryConfigNotFound { iso3: String, available: String },

    /// Country configuration content is semantically invalid.
    #[error("Invalid country configuration for '{iso3}': {reason}")]
    InvalidCountryConfig { iso3: String, reason: String },

    /// Embedded asset is missing or malformed.
    #[error("Asset error: {0}")]
    AssetError(String),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Requested admin level exceeds the configured maximum.
    #[error("Admin level {requested} requested, but maximum is {max}")]
    AdminLevelOutOfRange { requested: u8, max: u8 },

    /// Custom layer index is out of range.
    #[error("Custom layer {index} requested, but {available} custom layer(s) are configured")]
    CustomLayerNotFound { index: usize, available: usize },

    /// HDX API request failed.
    #[error("HDX API error: {message}")]
    HdxApiError { message: String, status: Option<u16> },

    /// The HDX dataset does not contain the configured resource.
    #[error("Resource '{resource}' not found in HDX dataset '{dataset}'")]
    HdxResourceNotFound { dataset: String, resource: String },

    /// Raw archive has not been downloaded yet.
    #[error("Raw data not found at {}. Run 'codab download' first.", .0.display())]
    RawDataMissing(PathBuf),

    /// Layer is not present in the archive.
    #[error("Layer '{layer}' not found in {}", archive.display())]
    LayerNotFound { layer: String, archive: PathBuf },

    /// Archive or shapefile content could not be decoded.
    #[error("Failed to read archive: {0}")]
    Archive(String),

    /// Shape type other than polygon.
    #[error("Layer '{layer}' contains unsupported shape type {shape_type}")]
    UnsupportedShape { layer: String, shape_type: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers that classify failures.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidIso3(_)
            | AppError::InvalidCountryConfig { .. }
            | AppError::AdminLevelOutOfRange { .. }
            | AppError::CustomLayerNotFound { .. }
            | AppError::ParseError { .. }
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::EnvironmentVariableMissing(_)
            | AppError::CountryConfigNotFound { .. }
            | AppError::HdxResourceNotFound { .. }
            | AppError::RawDataMissing(_)
            | AppError::LayerNotFound { .. } => io::ErrorKind::NotFound,
            AppError::Archive(_) | AppError::UnsupportedShape { .. } | AppError::AssetError(_) => {
                io::ErrorKind::InvalidData
            }
            AppError::HdxApiError { .. } => io::ErrorKind::Other,
        }
    }
}
