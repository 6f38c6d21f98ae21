use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("textloc").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("textloc"));
}

#[test]
fn resolve_prints_anchor_json() {
    let out = Command::cargo_bin("textloc")
        .unwrap()
        .args(["resolve", "NorthEast", "--hbuffer", "0.1", "--vbuffer", "0.25"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["x"], 0.9);
    assert_eq!(v["y"], 0.75);
    assert_eq!(v["halign"], "right");
    assert_eq!(v["valign"], "top");
}

#[test]
fn resolve_accepts_negative_legacy_code() {
    let mut cmd = Command::cargo_bin("textloc").unwrap();
    cmd.args(["resolve", "-1"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"halign\": \"left\""));
}

#[test]
fn unknown_location_fails() {
    let mut cmd = Command::cargo_bin("textloc").unwrap();
    cmd.args(["resolve", "northnorth"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized location"));
}

#[test]
fn locations_lists_every_keyword() {
    let mut cmd = Command::cargo_bin("textloc").unwrap();
    cmd.arg("locations");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("southwestoutsidebelow"))
        .stdout(predicate::str::contains("random"));
}

#[test]
fn render_writes_svg() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("fig.svg");
    let mut cmd = Command::cargo_bin("textloc").unwrap();
    cmd.args([
        "render",
        "--labels",
        "A),B)|second",
        "--location",
        "northwestoutside",
        "--hbuffer",
        "0.3",
        "--hbuffer-unit",
        "inches",
        "--style",
        "fontsize=18",
        "--out",
    ])
    .arg(&out);
    cmd.assert().success();
    let svg = std::fs::read_to_string(&out).unwrap();
    assert!(svg.contains("A)"));
    assert!(svg.contains("second"));
}

#[test]
fn render_rejects_bad_unit() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("textloc").unwrap();
    cmd.args(["render", "--labels", "A)", "--vbuffer-unit", "miles", "--out"])
        .arg(dir.path().join("x.svg"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized unit"));
}

#[test]
fn render_rejects_mismatched_grid() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("textloc").unwrap();
    cmd.args(["render", "--labels", "A),B),C)", "--rows", "1", "--cols", "2", "--out"])
        .arg(dir.path().join("x.svg"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("shape mismatch"));
}

#[test]
fn render_fills_partial_last_row() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("partial.svg");
    let mut cmd = Command::cargo_bin("textloc").unwrap();
    cmd.args(["render", "--labels", "A),B),C)", "--rows", "2", "--out"])
        .arg(&out);
    cmd.assert().success();
    let svg = std::fs::read_to_string(&out).unwrap();
    for label in ["A)", "B)", "C)"] {
        assert!(svg.contains(label), "{label} missing from svg");
    }
}

#[test]
fn png_with_labels_and_no_font_fails_with_a_hint() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("textloc").unwrap();
    cmd.args(["render", "--labels", "A)", "--out"])
        .arg(dir.path().join("x.png"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("needs a registered font"));
}
