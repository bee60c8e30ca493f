use std::collections::BTreeMap;

use serde::Serialize;

use super::download::print_download;
use super::{OutputFormat, print_json};
use crate::app::api::{
    self, CountrySelector, DownloadOutcome, LayerSelector, LoadOptions, LoadResult,
};
use crate::domain::{AppError, AttributeValue, Iso3, Settings};

#[derive(Serialize)]
struct LoadSummary<'a> {
    iso3: &'a Iso3,
    layer: &'a str,
    feature_count: usize,
    /// `[min_x, min_y, max_x, max_y]`
    bbox: Option<[f64; 4]>,
    attributes: Vec<&'a BTreeMap<String, AttributeValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    download: Option<&'a DownloadOutcome>,
}

impl<'a> LoadSummary<'a> {
    fn from_result(result: &'a LoadResult) -> Self {
        let dataset = &result.dataset;
        Self {
            iso3: &result.iso3,
            layer: &dataset.layer,
            feature_count: dataset.len(),
            bbox: dataset
                .bounding_box()
                .map(|rect| [rect.min().x, rect.min().y, rect.max().x, rect.max().y]),
            attributes: dataset.features.iter().map(|feature| &feature.attributes).collect(),
            download: result.download.as_ref(),
        }
    }
}

pub(super) fn run_load(
    settings: &Settings,
    country: CountrySelector,
    admin_level: u8,
    custom: Option<usize>,
    offline: bool,
    format: OutputFormat,
) -> Result<(), AppError> {
    let layer = match custom {
        Some(index) => LayerSelector::Custom(index),
        None => LayerSelector::AdminLevel(admin_level),
    };
    let options = LoadOptions { country, layer, download_missing: !offline };
    let result = api::load_with(settings, options)?;
    let summary = LoadSummary::from_result(&result);

    match format {
        OutputFormat::Json => print_json(&summary),
        OutputFormat::Text => {
            if let Some(download) = summary.download {
                print_download(download);
            }
            println!(
                "✅ Loaded {} feature(s) from layer {} ({})",
                summary.feature_count, summary.layer, summary.iso3
            );
            if let Some([min_x, min_y, max_x, max_y]) = summary.bbox {
                println!("   bbox: {min_x:.4}, {min_y:.4} .. {max_x:.4}, {max_y:.4}");
            }
            let names = result.dataset.attribute_names();
            if !names.is_empty() {
                println!("   attributes: {}", names.join(", "));
            }
            Ok(())
        }
    }
}
