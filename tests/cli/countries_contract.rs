use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn countries_lists_embedded_configurations() {
    let ctx = TestContext::new();

    ctx.bare_cli()
        .arg("countries")
        .assert()
        .success()
        .stdout(predicate::str::contains("cod-ab-bgd"))
        .stdout(predicate::str::contains("eth"))
        .stdout(predicate::str::contains("npl"));
}

#[test]
fn countries_json_reports_admin_level_max() {
    let ctx = TestContext::new();

    let output = ctx.bare_cli().args(["countries", "--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let bgd = rows
        .as_array()
        .unwrap()
        .iter()
        .find(|row| row["iso3"] == "bgd")
        .expect("bgd should be listed");
    assert_eq!(bgd["admin_level_max"], 4);
    assert_eq!(bgd["hdx_address"], "cod-ab-bgd");
}
