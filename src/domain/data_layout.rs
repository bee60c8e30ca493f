//! On-disk layout of downloaded data.

use std::path::{Path, PathBuf};

use crate::domain::Iso3;

/// Environment variable naming the data root.
pub const DATA_DIR_ENV: &str = "CODAB_DATA_DIR";

const PUBLIC_DIR: &str = "public";
const RAW_DIR: &str = "raw";
const CODAB_MODULE_DIR: &str = "cod_ab";

/// Resolves where each country's raw data is stored under the data root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataLayout {
    root: PathBuf,
}

impl DataLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/public/raw/<iso3>/cod_ab`
    pub fn raw_dir(&self, iso3: &Iso3) -> PathBuf {
        self.root.join(PUBLIC_DIR).join(RAW_DIR).join(iso3.as_str()).join(CODAB_MODULE_DIR)
    }

    /// `<raw_dir>/<iso3>_cod_ab.shp.zip`
    pub fn codab_archive(&self, iso3: &Iso3) -> PathBuf {
        self.raw_dir(iso3).join(format!("{}_cod_ab.shp.zip", iso3))
    }
}
