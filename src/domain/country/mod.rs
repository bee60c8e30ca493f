pub mod codab;
pub mod config;

pub use codab::{ADMIN_LEVEL_PLACEHOLDER, CodAbConfig};
pub use config::{CountryConfig, parse_country_config};
