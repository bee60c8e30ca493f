mod country_catalog;
mod hdx_client;
mod layer_reader;

pub use country_catalog::CountryCatalog;
pub use hdx_client::HdxClient;
pub use layer_reader::LayerReader;
