use super::{OutputFormat, print_json};
use crate::app::api;
use crate::domain::AppError;

pub(super) fn run_countries(format: OutputFormat) -> Result<(), AppError> {
    let rows = api::countries()?;

    match format {
        OutputFormat::Json => print_json(&rows),
        OutputFormat::Text => {
            println!("{:<6} {:<16} {:>9} {:>8}", "ISO3", "HDX DATASET", "MAX LEVEL", "CUSTOM");
            for row in rows {
                println!(
                    "{:<6} {:<16} {:>9} {:>8}",
                    row.iso3.as_str(), row.hdx_address, row.admin_level_max, row.custom_layers
                );
            }
            Ok(())
        }
    }
}
