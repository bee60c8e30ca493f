use tracing::info;

use super::CountrySelector;
use crate::app::AppContext;
use crate::app::codab::{CodAb, DownloadOutcome};
use crate::domain::AppError;
use crate::ports::{CountryCatalog, HdxClient, LayerReader};

#[derive(Debug, Clone)]
pub struct DownloadOptions {
    pub country: CountrySelector,
    pub clobber: bool,
}

/// Download the raw CodAB archive for a country.
pub fn execute<C, H, L>(
    ctx: &AppContext<C, H, L>,
    options: DownloadOptions,
) -> Result<DownloadOutcome, AppError>
where
    C: CountryCatalog,
    H: HdxClient,
    L: LayerReader,
{
    let country_config = options.country.resolve(ctx.catalog())?;
    info!(iso3 = %country_config.iso3, clobber = options.clobber, "Download requested");

    let codab = CodAb::new(country_config, ctx.hdx(), ctx.reader(), ctx.layout());
    codab.download(options.clobber)
}
