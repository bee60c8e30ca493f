use codab::adapters::{HttpHdxClient, ShapefileZipReader};
use codab::{AppError, AttributeValue, CodAb, DataLayout, HdxApiConfig, create_country_config};
use tempfile::TempDir;

use crate::harness::{FixtureFeature, FixtureLayer, bgd_layers, write_codab_archive};

struct Workspace {
    _dir: TempDir,
    layout: DataLayout,
    hdx: HttpHdxClient,
    reader: ShapefileZipReader,
}

impl Workspace {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let layout = DataLayout::new(dir.path());
        let hdx = HttpHdxClient::new(&HdxApiConfig::default()).unwrap();
        Self { _dir: dir, layout, hdx, reader: ShapefileZipReader::new() }
    }

    fn bgd(&self) -> CodAb<'_, HttpHdxClient, ShapefileZipReader> {
        CodAb::new(create_country_config("bgd").unwrap(), &self.hdx, &self.reader, &self.layout)
    }
}

#[test]
fn load_reads_features_from_cached_archive() {
    let ws = Workspace::new();
    let codab = ws.bgd();
    write_codab_archive(&codab.raw_path(), "bgd_adm_bbs_20201113_SHP/", &bgd_layers());

    let admin0 = codab.load(0).unwrap();
    assert_eq!(admin0.layer, "bgd_admbnda_adm0_bbs_20201113");
    assert_eq!(admin0.len(), 1);
    assert_eq!(
        admin0.features[0].attribute("ADM0_EN"),
        Some(&AttributeValue::Text("Bangladesh".into()))
    );
    let bbox = admin0.bounding_box().unwrap();
    assert_eq!((bbox.min().x, bbox.min().y), (88.0, 20.5));
    assert_eq!((bbox.max().x, bbox.max().y), (92.5, 25.0));

    let admin1 = codab.load(1).unwrap();
    assert_eq!(admin1.len(), 2);
    assert_eq!(admin1.features[0].geometry.0.len(), 2, "Barisal has two parts");
    assert_eq!(admin1.attribute_names(), vec!["ADM1_EN", "ADM1_PCODE"]);
}

#[test]
fn cached_download_does_not_contact_hdx() {
    let ws = Workspace::new();
    let codab = ws.bgd();
    write_codab_archive(&codab.raw_path(), "", &bgd_layers());

    let outcome = codab.download(false).unwrap();
    assert_eq!(outcome.status, codab::DownloadStatus::Cached);
    assert_eq!(outcome.path, codab.raw_path());
}

#[test]
fn load_without_archive_reports_raw_data_missing() {
    let ws = Workspace::new();

    let err = ws.bgd().load(0).unwrap_err();
    assert!(matches!(
        err,
        AppError::RawDataMissing(ref path) if path.ends_with("bgd_cod_ab.shp.zip")
    ));
}

#[test]
fn layer_missing_from_archive_is_reported() {
    let ws = Workspace::new();
    let codab = ws.bgd();
    write_codab_archive(
        &codab.raw_path(),
        "",
        &[FixtureLayer::new(
            "bgd_admbnda_adm0_bbs_20201113",
            vec![FixtureFeature::new(&[("ADM0_EN", "Bangladesh")], &[(88.0, 20.5, 1.0)])],
        )],
    );

    let err = codab.load(2).unwrap_err();
    assert!(matches!(
        err,
        AppError::LayerNotFound { ref layer, .. } if layer == "bgd_admbnda_adm2_bbs_20201113"
    ));
}
