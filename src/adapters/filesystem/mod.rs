pub mod country_config_file;

pub use country_config_file::read_country_config_file;
