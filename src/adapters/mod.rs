pub mod catalogs;
pub mod filesystem;
pub mod hdx_client_http;
pub mod hdx_client_retrying;
pub mod shapefile_archive;

pub use catalogs::EmbeddedCountryCatalog;
pub use filesystem::read_country_config_file;
pub use hdx_client_http::HttpHdxClient;
pub use hdx_client_retrying::{RetryPolicy, RetryingHdxClient};
pub use shapefile_archive::ShapefileZipReader;
