pub mod boundary;
pub mod configuration;
pub mod country;
pub mod data_layout;
pub mod error;
pub mod identities;

pub use boundary::{AttributeValue, BoundaryDataset, BoundaryFeature, Ring, assemble_polygons};
pub use configuration::{HdxApiConfig, Settings};
pub use country::{ADMIN_LEVEL_PLACEHOLDER, CodAbConfig, CountryConfig, parse_country_config};
pub use data_layout::{DATA_DIR_ENV, DataLayout};
pub use error::AppError;
pub use identities::Iso3;
