pub mod settings;

pub use settings::{HdxApiConfig, Settings};
