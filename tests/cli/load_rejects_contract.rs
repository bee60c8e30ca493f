use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn rejects_admin_level_above_maximum() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["load", "bgd", "--admin-level", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Admin level 5 requested, but maximum is 4"));
}

#[test]
fn rejects_malformed_iso3() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["load", "bd"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid ISO3 country code 'bd'"));
}

#[test]
fn rejects_country_without_configuration() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["load", "xyz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No country configuration for 'xyz'"))
        .stderr(predicate::str::contains("bgd"));
}

#[test]
fn requires_data_dir() {
    let ctx = TestContext::new();

    ctx.bare_cli()
        .args(["load", "bgd", "--offline"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("CODAB_DATA_DIR"));
}

#[test]
fn offline_load_without_archive_points_to_download() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["load", "bgd", "--offline"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Run 'codab download' first"));
}

#[test]
fn admin_level_conflicts_with_custom() {
    let ctx = TestContext::new();

    ctx.cli().args(["load", "bgd", "-a", "1", "--custom", "0"]).assert().failure();
}

#[test]
fn missing_layer_in_archive_is_reported() {
    let ctx = TestContext::new();
    ctx.seed_bgd();

    ctx.cli()
        .args(["load", "bgd", "-a", "3", "--offline"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Layer 'bgd_admbnda_adm3_bbs_20201113' not found"));
}

#[test]
fn explicit_iso3_conflicts_with_country_config_file() {
    let ctx = TestContext::new();
    let config = ctx.write_file("other.yaml", "iso3: tst\n");

    ctx.cli()
        .args(["load", "npl", "--offline", "--country-config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
