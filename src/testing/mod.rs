
pub use call_log::CallLog;
pub use fake_hdx_client::FakeHdxClient;
pub use recording_country_catalog::RecordingCountryCatalog;
pub use recording_layer_reader::RecordingLayerReader;

use crate::domain::{CodAbConfig, CountryConfig, Iso3};

/// Country config with predictable layer names for tests.
pub fn country_config(iso3: &str, admin_level_max: u8) -> CountryConfig {
    CountryConfig {
        iso3: Iso3::new(iso3).unwrap(),
        codab: CodAbConfig {
            hdx_address: format!("cod-ab-{iso3}"),
            hdx_dataset_name: format!("{iso3}_adm_shp.zip"),
            layer_base_name: format!("{iso3}_admbnda_adm{{admin_level}}"),
            admin_level_max,
            custom_layer_names: vec![format!("{iso3}_admbndl_admALL")],
        },
    }
}
