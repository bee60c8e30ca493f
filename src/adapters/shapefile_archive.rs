//! Reads boundary layers from zipped ESRI shapefiles.

use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{Cursor, Read, Seek};
use std::path::Path;

use shapefile::dbase::{self, FieldValue};
use shapefile::{PolygonRing, Shape};
use tracing::{debug, info};
use zip::ZipArchive;

use crate::domain::{
    AppError, AttributeValue, BoundaryDataset, BoundaryFeature, Ring, assemble_polygons,
};
use crate::ports::LayerReader;

const SHP_EXTENSION: &str = "shp";
const DBF_EXTENSION: &str = "dbf";
/// Upper bound on the buffer reserved up front for one archive member.
const MAX_PREALLOCATION: u64 = 64 << 20;

/// `LayerReader` for CodAB archives: a zip holding `<layer>.shp` and
/// `<layer>.dbf` pairs, possibly nested in a sub-directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShapefileZipReader;

impl ShapefileZipReader {
    pub fn new() -> Self {
        Self
    }
}

impl LayerReader for ShapefileZipReader {
    fn read_layer(&self, archive: &Path, layer: &str) -> Result<BoundaryDataset, AppError> {
        let file = File::open(archive)?;
        let mut zip = ZipArchive::new(file).map_err(|e| {
            AppError::Archive(format!("{} is not a valid zip archive: {}", archive.display(), e))
        })?;

        let not_found =
            || AppError::LayerNotFound { layer: layer.to_string(), archive: archive.to_path_buf() };
        let shp_name = find_member(&zip, layer, SHP_EXTENSION).ok_or_else(not_found)?;
        let dbf_name = find_member(&zip, layer, DBF_EXTENSION).ok_or_else(not_found)?;
        debug!(layer, shp = %shp_name, dbf = %dbf_name, "Located layer members");

        let shp = read_member(&mut zip, &shp_name)?;
        let dbf = read_member(&mut zip, &dbf_name)?;

        let dataset = decode_layer(layer, Cursor::new(shp), Cursor::new(dbf))?;
        info!(layer, features = dataset.len(), "Loaded boundary layer");
        Ok(dataset)
    }
}

/// Find `<layer>.<extension>` anywhere in the archive, ignoring case.
fn find_member<R: Read + Seek>(
    zip: &ZipArchive<R>,
    layer: &str,
    extension: &str,
) -> Option<String> {
    let wanted = format!("{layer}.{extension}").to_ascii_lowercase();
    zip.file_names()
        .find(|name| {
            let base = name.rsplit('/').next().unwrap_or(name);
            base.to_ascii_lowercase() == wanted
        })
        .map(ToOwned::to_owned)
}

fn read_member<R: Read + Seek>(zip: &mut ZipArchive<R>, name: &str) -> Result<Vec<u8>, AppError> {
    let mut entry = zip
        .by_name(name)
        .map_err(|e| AppError::Archive(format!("Cannot open archive member {name}: {e}")))?;
    let mut buf = Vec::with_capacity(capacity_hint(entry.size()));
    entry.read_to_end(&mut buf)?;
    Ok(buf)
}

/// The declared size comes from the zip header and is not trusted.
fn capacity_hint(declared: u64) -> usize {
    usize::try_from(declared.min(MAX_PREALLOCATION)).unwrap_or(0)
}

fn decode_layer<S, D>(layer: &str, shp: S, dbf: D) -> Result<BoundaryDataset, AppError>
where
    S: Read + Seek,
    D: Read + Seek,
{
    let shape_reader = shapefile::ShapeReader::new(shp)
        .map_err(|e| AppError::Archive(format!("Invalid shapefile for layer {layer}: {e}")))?;
    let dbase_reader = dbase::Reader::new(dbf)
        .map_err(|e| AppError::Archive(format!("Invalid attribute table for layer {layer}: {e}")))?;
    let mut reader = shapefile::Reader::new(shape_reader, dbase_reader);

    let mut features = Vec::new();
    for result in reader.iter_shapes_and_records() {
        let (shape, record) = result
            .map_err(|e| AppError::Archive(format!("Corrupt record in layer {layer}: {e}")))?;

        let rings = shape_rings(layer, shape)?;
        let geometry = assemble_polygons(rings)
            .map_err(|reason| AppError::Archive(format!("Layer {layer}: {reason}")))?;
        let attributes = HashMap::<String, FieldValue>::from(record)
            .into_iter()
            .map(|(name, value)| (name, attribute_value(value)))
            .collect::<BTreeMap<_, _>>();

        features.push(BoundaryFeature { attributes, geometry });
    }

    Ok(BoundaryDataset { layer: layer.to_string(), features })
}

fn shape_rings(layer: &str, shape: Shape) -> Result<Vec<Ring>, AppError> {
    let rings = match shape {
        Shape::NullShape => Vec::new(),
        Shape::Polygon(polygon) => polygon
            .rings()
            .iter()
            .map(|ring| to_ring(ring, |p| (p.x, p.y)))
            .collect(),
        Shape::PolygonM(polygon) => polygon
            .rings()
            .iter()
            .map(|ring| to_ring(ring, |p| (p.x, p.y)))
            .collect(),
        Shape::PolygonZ(polygon) => polygon
            .rings()
            .iter()
            .map(|ring| to_ring(ring, |p| (p.x, p.y)))
            .collect(),
        other => {
            return Err(AppError::UnsupportedShape {
                layer: layer.to_string(),
                shape_type: format!("{:?}", other.shapetype()),
            });
        }
    };
    Ok(rings)
}

fn to_ring<P>(ring: &PolygonRing<P>, xy: impl Fn(&P) -> (f64, f64)) -> Ring {
    match ring {
        PolygonRing::Outer(points) => Ring::Outer(points.iter().map(&xy).collect()),
        PolygonRing::Inner(points) => Ring::Inner(points.iter().map(&xy).collect()),
    }
}

fn attribute_value(value: FieldValue) -> AttributeValue {
    match value {
        FieldValue::Character(Some(text)) => AttributeValue::Text(text.trim_end().to_string()),
        FieldValue::Memo(text) => AttributeValue::Text(text),
        FieldValue::Numeric(Some(number)) => AttributeValue::Number(number),
        FieldValue::Float(Some(number)) => AttributeValue::Number(f64::from(number)),
        FieldValue::Double(number) | FieldValue::Currency(number) => AttributeValue::Number(number),
        FieldValue::Integer(number) => AttributeValue::Integer(i64::from(number)),
        FieldValue::Logical(Some(flag)) => AttributeValue::Boolean(flag),
        FieldValue::Date(Some(date)) => AttributeValue::Text(iso_date(&date)),
        FieldValue::DateTime(datetime) => {
            let time = datetime.time();
            AttributeValue::Text(format!(
                "{}T{:02}:{:02}:{:02}",
                iso_date(&datetime.date()),
                time.hours(),
                time.minutes(),
                time.seconds()
            ))
        }
        FieldValue::Character(None)
        | FieldValue::Numeric(None)
        | FieldValue::Float(None)
        | FieldValue::Logical(None)
        | FieldValue::Date(None) => AttributeValue::Null,
    }
}

/// `YYYY-MM-DD`
fn iso_date(date: &dbase::Date) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}
