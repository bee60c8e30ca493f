//! Settings loaders backed by files and the process environment.

mod load_settings;

pub use load_settings::{load_settings, resolve_data_dir};
