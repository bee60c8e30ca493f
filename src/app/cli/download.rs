use super::{OutputFormat, print_json};
use crate::app::api::{self, CountrySelector, DownloadOptions, DownloadOutcome, DownloadStatus};
use crate::domain::{AppError, Settings};

pub(super) fn run_download(
    settings: &Settings,
    country: CountrySelector,
    clobber: bool,
    format: OutputFormat,
) -> Result<(), AppError> {
    let outcome = api::download_with(settings, DownloadOptions { country, clobber })?;

    match format {
        OutputFormat::Json => print_json(&outcome),
        OutputFormat::Text => {
            print_download(&outcome);
            Ok(())
        }
    }
}

pub(super) fn print_download(outcome: &DownloadOutcome) {
    match outcome.status {
        DownloadStatus::Downloaded { bytes } => {
            println!("✅ Downloaded {} bytes to {}", bytes, outcome.path.display());
        }
        DownloadStatus::Cached => {
            println!("✅ Using cached archive {}", outcome.path.display());
        }
    }
    println!("   sha256: {}", outcome.sha256);
}
