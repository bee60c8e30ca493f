pub mod embedded_country_catalog;

pub use embedded_country_catalog::EmbeddedCountryCatalog;
