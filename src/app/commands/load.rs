use tracing::info;

use super::CountrySelector;
use crate::app::AppContext;
use crate::app::codab::{CodAb, DownloadOutcome};
use crate::domain::{AppError, BoundaryDataset, Iso3};
use crate::ports::{CountryCatalog, HdxClient, LayerReader};

/// Which layer of the archive to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerSelector {
    AdminLevel(u8),
    Custom(usize),
}

impl Default for LayerSelector {
    fn default() -> Self {
        LayerSelector::AdminLevel(0)
    }
}

#[derive(Debug, Clone)]
pub struct LoadOptions {
    pub country: CountrySelector,
    pub layer: LayerSelector,
    /// Fetch the archive first when it is not cached yet.
    pub download_missing: bool,
}

#[derive(Debug, Clone)]
pub struct LoadResult {
    pub iso3: Iso3,
    pub dataset: BoundaryDataset,
    pub download: Option<DownloadOutcome>,
}

/// Resolve the country, construct its boundary client and load one layer.
pub fn execute<C, H, L>(
    ctx: &AppContext<C, H, L>,
    options: LoadOptions,
) -> Result<LoadResult, AppError>
where
    C: CountryCatalog,
    H: HdxClient,
    L: LayerReader,
{
    let country_config = options.country.resolve(ctx.catalog())?;
    let iso3 = country_config.iso3.clone();

    // Reject bad layer selections before touching the network.
    match options.layer {
        LayerSelector::AdminLevel(level) => {
            country_config.codab.layer_name(level)?;
        }
        LayerSelector::Custom(index) => {
            country_config.codab.custom_layer_name(index)?;
        }
    }

    let codab = CodAb::new(country_config, ctx.hdx(), ctx.reader(), ctx.layout());

    let download = if options.download_missing && !codab.raw_path().exists() {
        Some(codab.download(false)?)
    } else {
        None
    };

    let dataset = match options.layer {
        LayerSelector::AdminLevel(level) => codab.load(level)?,
        LayerSelector::Custom(index) => codab.load_custom(index)?,
    };
    info!(%iso3, layer = %dataset.layer, features = dataset.len(), "Load complete");

    Ok(LoadResult { iso3, dataset, download })
}
