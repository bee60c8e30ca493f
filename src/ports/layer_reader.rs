use std::path::Path;

use crate::domain::{AppError, BoundaryDataset};

/// Reads a named boundary layer out of a downloaded archive.
pub trait LayerReader {
    fn read_layer(&self, archive: &Path, layer: &str) -> Result<BoundaryDataset, AppError>;
}
