//! Builds small but real CodAB archives: zipped `.shp` and `.dbf` pairs.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use zip::ZipWriter;
use zip::write::FileOptions;

const SHAPE_TYPE_POLYGON: i32 = 5;
const SHP_HEADER_LEN: usize = 100;
const DBF_FIELD_LEN: u8 = 32;

/// One polygon feature; every ring is written clockwise as an outer ring.
#[derive(Debug, Clone)]
pub(crate) struct FixtureFeature {
    pub(crate) attributes: Vec<(&'static str, String)>,
    pub(crate) squares: Vec<(f64, f64, f64)>,
}

impl FixtureFeature {
    pub(crate) fn new(attributes: &[(&'static str, &str)], squares: &[(f64, f64, f64)]) -> Self {
        Self {
            attributes: attributes.iter().map(|(k, v)| (*k, v.to_string())).collect(),
            squares: squares.to_vec(),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct FixtureLayer {
    pub(crate) name: String,
    pub(crate) features: Vec<FixtureFeature>,
}

impl FixtureLayer {
    pub(crate) fn new(name: impl Into<String>, features: Vec<FixtureFeature>) -> Self {
        Self { name: name.into(), features }
    }
}

/// Two layers shaped like the published Bangladesh archive.
pub(crate) fn bgd_layers() -> Vec<FixtureLayer> {
    vec![
        FixtureLayer::new(
            "bgd_admbnda_adm0_bbs_20201113",
            vec![FixtureFeature::new(
                &[("ADM0_EN", "Bangladesh"), ("ADM0_PCODE", "BD")],
                &[(88.0, 20.5, 4.5)],
            )],
        ),
        FixtureLayer::new(
            "bgd_admbnda_adm1_bbs_20201113",
            vec![
                FixtureFeature::new(
                    &[("ADM1_EN", "Barisal"), ("ADM1_PCODE", "BD10")],
                    &[(89.5, 21.5, 1.0), (91.0, 21.0, 0.5)],
                ),
                FixtureFeature::new(
                    &[("ADM1_EN", "Dhaka"), ("ADM1_PCODE", "BD30")],
                    &[(90.0, 23.0, 1.5)],
                ),
            ],
        ),
        FixtureLayer::new(
            "bgd_admbndl_admALL_bbs_itos_20201113",
            vec![FixtureFeature::new(&[("BND_TYPE", "coast")], &[(88.0, 20.5, 0.5)])],
        ),
    ]
}

/// Write `layers` into a zip at `path`, nesting members under `prefix`.
pub(crate) fn write_codab_archive(path: &Path, prefix: &str, layers: &[FixtureLayer]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let mut writer = ZipWriter::new(File::create(path).unwrap());
    for layer in layers {
        writer.start_file(format!("{prefix}{}.shp", layer.name), FileOptions::default()).unwrap();
        writer.write_all(&shp_bytes(&layer.features)).unwrap();
        writer.start_file(format!("{prefix}{}.dbf", layer.name), FileOptions::default()).unwrap();
        writer.write_all(&dbf_bytes(&layer.features)).unwrap();
    }
    writer.finish().unwrap();
}

fn clockwise_square(x0: f64, y0: f64, size: f64) -> [(f64, f64); 5] {
    [(x0, y0), (x0, y0 + size), (x0 + size, y0 + size), (x0 + size, y0), (x0, y0)]
}

fn bbox(points: impl Iterator<Item = (f64, f64)>) -> [f64; 4] {
    points.fold([f64::MAX, f64::MAX, f64::MIN, f64::MIN], |b, (x, y)| {
        [b[0].min(x), b[1].min(y), b[2].max(x), b[3].max(y)]
    })
}

fn polygon_content(feature: &FixtureFeature) -> Vec<u8> {
    let rings: Vec<[(f64, f64); 5]> =
        feature.squares.iter().map(|&(x, y, s)| clockwise_square(x, y, s)).collect();
    let points: Vec<(f64, f64)> = rings.iter().flatten().copied().collect();

    let mut out = Vec::new();
    out.extend_from_slice(&SHAPE_TYPE_POLYGON.to_le_bytes());
    for value in bbox(points.iter().copied()) {
        out.extend_from_slice(&value.to_le_bytes());
    }
    out.extend_from_slice(&(rings.len() as i32).to_le_bytes());
    out.extend_from_slice(&(points.len() as i32).to_le_bytes());
    for index in 0..rings.len() {
        out.extend_from_slice(&((index * 5) as i32).to_le_bytes());
    }
    for (x, y) in points {
        out.extend_from_slice(&x.to_le_bytes());
        out.extend_from_slice(&y.to_le_bytes());
    }
    out
}

fn shp_bytes(features: &[FixtureFeature]) -> Vec<u8> {
    let mut records = Vec::new();
    for (index, feature) in features.iter().enumerate() {
        let content = polygon_content(feature);
        records.extend_from_slice(&((index + 1) as i32).to_be_bytes());
        records.extend_from_slice(&((content.len() / 2) as i32).to_be_bytes());
        records.extend_from_slice(&content);
    }

    let all_points = features
        .iter()
        .flat_map(|f| f.squares.iter().flat_map(|&(x, y, s)| clockwise_square(x, y, s)));
    let extent = bbox(all_points);

    let mut out = Vec::with_capacity(SHP_HEADER_LEN + records.len());
    out.extend_from_slice(&9994_i32.to_be_bytes());
    out.extend_from_slice(&[0u8; 20]);
    out.extend_from_slice(&(((SHP_HEADER_LEN + records.len()) / 2) as i32).to_be_bytes());
    out.extend_from_slice(&1000_i32.to_le_bytes());
    out.extend_from_slice(&SHAPE_TYPE_POLYGON.to_le_bytes());
    for value in extent {
        out.extend_from_slice(&value.to_le_bytes());
    }
    out.extend_from_slice(&[0u8; 32]);
    assert_eq!(out.len(), SHP_HEADER_LEN);
    out.extend_from_slice(&records);
    out
}

fn dbf_bytes(features: &[FixtureFeature]) -> Vec<u8> {
    let fields: Vec<&str> = features
        .first()
        .map(|f| f.attributes.iter().map(|(name, _)| *name).collect())
        .unwrap_or_default();
    let header_len = 32 + 32 * fields.len() + 1;
    let record_len = 1 + DBF_FIELD_LEN as usize * fields.len();

    let mut out = Vec::new();
    out.extend_from_slice(&[0x03, 124, 1, 1]);
    out.extend_from_slice(&(features.len() as u32).to_le_bytes());
    out.extend_from_slice(&(header_len as u16).to_le_bytes());
    out.extend_from_slice(&(record_len as u16).to_le_bytes());
    out.extend_from_slice(&[0u8; 20]);

    for name in &fields {
        let mut descriptor = [0u8; 32];
        descriptor[..name.len()].copy_from_slice(name.as_bytes());
        descriptor[11] = b'C';
        descriptor[16] = DBF_FIELD_LEN;
        out.extend_from_slice(&descriptor);
    }
    out.push(0x0D);

    for feature in features {
        out.push(b' ');
        for (_, value) in &feature.attributes {
            let mut cell = vec![b' '; DBF_FIELD_LEN as usize];
            cell[..value.len()].copy_from_slice(value.as_bytes());
            out.extend_from_slice(&cell);
        }
    }
    out.push(0x1A);
    out
}
