use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn orphans(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("orphans").expect("orphans binary");
    cmd.env("NO_COLOR", "1").env("RUST_LOG", "off").current_dir(root);
    cmd
}

fn seed_orphans(root: &Path) {
    let dir = root.join("_orphans");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("componentSamples.json"), r#"{"amp-img":["basic"]}"#).unwrap();
    fs::write(dir.join("samples.json"), r#"{"samples":[]}"#).unwrap();
}

#[test]
fn run_bootstraps_default_mappings() {
    let root = TempDir::new().unwrap();
    seed_orphans(root.path());

    orphans(root.path())
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 orphan file(s) bootstrapped"));

    let copied = root.path().join("pages/shared/data/componentSamples.json");
    assert_eq!(
        fs::read_to_string(copied).unwrap(),
        r#"{"amp-img":["basic"]}"#
    );
}

#[test]
fn second_run_reports_nothing_needed() {
    let root = TempDir::new().unwrap();
    seed_orphans(root.path());

    orphans(root.path()).arg("run").assert().success();
    orphans(root.path())
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "no orphan files needed to be bootstrapped",
        ));
}

#[test]
fn dry_run_writes_nothing() {
    let root = TempDir::new().unwrap();
    seed_orphans(root.path());

    orphans(root.path())
        .args(["run", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[dry-run]"));

    assert!(!root.path().join("pages").exists(), "dry-run must not create files");
}

#[test]
fn json_output_lists_every_entry() {
    let root = TempDir::new().unwrap();
    seed_orphans(root.path());
    fs::remove_file(root.path().join("_orphans/samples.json")).unwrap();

    let output = orphans(root.path())
        .args(["run", "--json"])
        .output()
        .expect("run orphans");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(json["counts"]["copied"], 1);
    assert_eq!(json["counts"]["skipped"], 1);
    assert_eq!(json["counts"]["failed"], 0);
    assert_eq!(json["outcomes"][1]["outcome"]["status"], "skipped_missing_source");
}

#[test]
fn custom_manifest_is_honoured() {
    let root = TempDir::new().unwrap();
    fs::create_dir_all(root.path().join("fallbacks")).unwrap();
    fs::write(root.path().join("fallbacks/a.json"), r#"{"x":1}"#).unwrap();
    fs::write(
        root.path().join("orphans.yaml"),
        "orphans_dir: fallbacks\nentries:\n  - source: a.json\n    destination: out/a.json\n    description: A\n  - source: b.json\n    destination: out/b.json\n    description: B\n",
    )
    .unwrap();

    orphans(root.path())
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 orphan file(s) bootstrapped, 1 skipped"));

    assert_eq!(
        fs::read_to_string(root.path().join("out/a.json")).unwrap(),
        r#"{"x":1}"#
    );
    assert!(!root.path().join("out/b.json").exists());
}

#[test]
fn invalid_manifest_fails_fast() {
    let root = TempDir::new().unwrap();
    fs::write(root.path().join("orphans.yaml"), "entries: [not, a, mapping]\n").unwrap();

    orphans(root.path())
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("orphans.yaml"));
}

#[test]
fn status_shows_pending_copies() {
    let root = TempDir::new().unwrap();
    seed_orphans(root.path());

    orphans(root.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Component samples mapping"))
        .stdout(predicate::str::contains("COPY"));

    assert!(!root.path().join("pages").exists(), "status must not write");
}

#[test]
fn status_json_flags_match_action() {
    let root = TempDir::new().unwrap();
    seed_orphans(root.path());
    fs::remove_file(root.path().join("_orphans/samples.json")).unwrap();

    let output = orphans(root.path())
        .args(["status", "--json"])
        .output()
        .expect("run orphans status");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(json[0]["action"], "copy");
    assert_eq!(json[0]["source_present"], true);
    assert_eq!(json[0]["destination_present"], false);
    assert_eq!(json[1]["action"], "no_orphan");
    assert_eq!(json[1]["source_present"], false);
}

#[test]
fn init_writes_manifest_and_refuses_to_overwrite() {
    let root = TempDir::new().unwrap();

    orphans(root.path()).arg("init").assert().success();
    let manifest = root.path().join("orphans.yaml");
    let written = fs::read_to_string(&manifest).unwrap();
    assert!(written.contains("componentSamples.json"));

    orphans(root.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    orphans(root.path()).args(["init", "--force"]).assert().success();
}
