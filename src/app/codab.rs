//! Boundary client bound to one country configuration.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::domain::{AppError, BoundaryDataset, CountryConfig, DataLayout};
use crate::ports::{HdxClient, LayerReader};

/// Whether `download` fetched the archive or reused the cached copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DownloadStatus {
    Downloaded { bytes: u64 },
    Cached,
}

/// Result of `CodAb::download`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadOutcome {
    pub path: PathBuf,
    #[serde(flatten)]
    pub status: DownloadStatus,
    pub sha256: String,
}

/// Codes for Administrative Boundaries for a single country.
pub struct CodAb<'a, H: HdxClient + ?Sized, L: LayerReader + ?Sized> {
    country_config: CountryConfig,
    hdx: &'a H,
    reader: &'a L,
    layout: &'a DataLayout,
}

impl<'a, H: HdxClient + ?Sized, L: LayerReader + ?Sized> CodAb<'a, H, L> {
    pub fn new(
        country_config: CountryConfig,
        hdx: &'a H,
        reader: &'a L,
        layout: &'a DataLayout,
    ) -> Self {
        Self { country_config, hdx, reader, layout }
    }

    pub fn country_config(&self) -> &CountryConfig {
        &self.country_config
    }

    /// Location of the raw zipped shapefiles.
    pub fn raw_path(&self) -> PathBuf {
        self.layout.codab_archive(&self.country_config.iso3)
    }

    /// Fetch the archive from HDX unless it is already on disk.
    ///
    /// With `clobber` the archive is fetched even when a copy exists. The new
    /// file only replaces the old one once it has been completely written.
    pub fn download(&self, clobber: bool) -> Result<DownloadOutcome, AppError> {
        let path = self.raw_path();
        let iso3 = &self.country_config.iso3;

        if path.exists() && !clobber {
            debug!(%iso3, path = %path.display(), "Using cached CodAB archive");
            return Ok(DownloadOutcome {
                sha256: sha256_file(&path)?,
                path,
                status: DownloadStatus::Cached,
            });
        }

        let dir = path.parent().ok_or_else(|| {
            AppError::config_error(format!("Invalid raw data path: {}", path.display()))
        })?;
        fs::create_dir_all(dir)?;

        let codab = &self.country_config.codab;
        let url = self.hdx.resource_url(&codab.hdx_address, &codab.hdx_dataset_name)?;
        info!(%iso3, %url, "Downloading CodAB archive");

        let mut staged = NamedTempFile::new_in(dir)?;
        let bytes = {
            let mut writer = BufWriter::new(staged.as_file_mut());
            let bytes = self.hdx.download(&url, &mut writer)?;
            writer.flush()?;
            bytes
        };
        staged.as_file().sync_all()?;
        staged.persist(&path).map_err(|e| e.error)?;

        info!(%iso3, bytes, path = %path.display(), "Stored CodAB archive");
        Ok(DownloadOutcome {
            sha256: sha256_file(&path)?,
            path,
            status: DownloadStatus::Downloaded { bytes },
        })
    }

    /// Load boundaries at `admin_level` (0 is the national outline).
    pub fn load(&self, admin_level: u8) -> Result<BoundaryDataset, AppError> {
        let layer = self.country_config.codab.layer_name(admin_level)?;
        self.read(&layer)
    }

    /// Load one of the configured custom layers by position.
    pub fn load_custom(&self, index: usize) -> Result<BoundaryDataset, AppError> {
        let layer = self.country_config.codab.custom_layer_name(index)?.to_string();
        self.read(&layer)
    }

    fn read(&self, layer: &str) -> Result<BoundaryDataset, AppError> {
        let path = self.raw_path();
        if !path.exists() {
            return Err(AppError::RawDataMissing(path));
        }
        self.reader.read_layer(&path, layer)
    }
}

fn sha256_file(path: &Path) -> Result<String, AppError> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher)?;
    Ok(format!("{:x}", hasher.finalize()))
}
