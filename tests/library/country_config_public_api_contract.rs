use codab::{AppError, available_countries, create_country_config, create_custom_country_config};
use tempfile::TempDir;

#[test]
fn embedded_country_config_is_resolved_case_insensitively() {
    let config = create_country_config("BGD").expect("bgd should be embedded");

    assert_eq!(config.iso3.as_str(), "bgd");
    assert_eq!(config.codab.hdx_address, "cod-ab-bgd");
    assert_eq!(config.codab.admin_level_max, 4);
    assert_eq!(config.codab.layer_name(2).unwrap(), "bgd_admbnda_adm2_bbs_20201113");
}

#[test]
fn available_countries_lists_every_embedded_config() {
    let codes: Vec<String> =
        available_countries().unwrap().into_iter().map(String::from).collect();

    assert!(codes.contains(&"bgd".to_string()));
    assert!(codes.windows(2).all(|pair| pair[0] < pair[1]), "codes should be sorted: {codes:?}");
    for code in &codes {
        let config = create_country_config(code).unwrap();
        assert_eq!(config.iso3.as_str(), code);
    }
}

#[test]
fn unknown_country_is_not_found() {
    let err = create_country_config("xyz").unwrap_err();
    assert!(matches!(err, AppError::CountryConfigNotFound { .. }));
}

#[test]
fn custom_country_config_round_trips_through_yaml_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.yaml");
    std::fs::write(
        &path,
        r#"iso3: abc
codab:
  hdx_address: cod-ab-abc
  hdx_dataset_name: abc_SHP.zip
  layer_base_name: abc_adm{admin_level}
  admin_level_max: 2
  custom_layer_names: [abc_lines]
"#,
    )
    .unwrap();

    let config = create_custom_country_config(&path).unwrap();
    assert_eq!(config.iso3.as_str(), "abc");
    assert_eq!(config.codab.custom_layer_name(0).unwrap(), "abc_lines");
    assert!(matches!(
        config.codab.layer_name(3),
        Err(AppError::AdminLevelOutOfRange { requested: 3, max: 2 })
    ));
}
