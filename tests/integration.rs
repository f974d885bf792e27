use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_flag() {
    let mut cmd = Command::cargo_bin("sectorscope").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sectorscope"))
        .stdout(predicate::str::contains("prospect database"));
}

#[test]
fn test_version_flag() {
    let mut cmd = Command::cargo_bin("sectorscope").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sectorscope"));
}

#[test]
fn test_list_modes() {
    let mut cmd = Command::cargo_bin("sectorscope").unwrap();
    cmd.arg("--list-modes")
        .assert()
        .success()
        .stdout(predicate::str::contains("basic"))
        .stdout(predicate::str::contains("Proposition 3"))
        .stdout(predicate::str::contains("20 records"));
}

#[test]
fn test_default_render_includes_table_and_charts() {
    let mut cmd = Command::cargo_bin("sectorscope").unwrap();
    cmd.args(["--mode", "advanced"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Proposition 2 - Advanced IT Infrastructure & Support",
        ))
        .stdout(predicate::str::contains("Global Bank Corp"))
        .stdout(predicate::str::contains(
            "Number of Endpoints (SME vs Large Enterprise)",
        ))
        .stdout(predicate::str::contains("IT Budget Comparison"));
}

#[test]
fn test_charts_only() {
    let mut cmd = Command::cargo_bin("sectorscope").unwrap();
    cmd.args(["--mode", "basic", "--charts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Avg Endpoints: 825"))
        .stdout(predicate::str::contains("Avg Servers: 216"));
}

#[test]
fn test_export_writes_conventional_filename() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("sectorscope").unwrap();
    cmd.args(["--mode", "advanced", "--export", "--output"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 20 records"));

    let content =
        std::fs::read_to_string(dir.path().join("all_sector_proposition2.csv")).unwrap();
    assert!(content.starts_with("customerName,companyName,"));
    assert_eq!(content.lines().count(), 21);
}

#[test]
fn test_unknown_mode_is_rejected() {
    let mut cmd = Command::cargo_bin("sectorscope").unwrap();
    cmd.args(["--mode", "platinum"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown mode"));
}

#[test]
fn test_invalid_flag() {
    let mut cmd = Command::cargo_bin("sectorscope").unwrap();
    cmd.arg("--invalid-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_mode_alias_accepted() {
    let mut cmd = Command::cargo_bin("sectorscope").unwrap();
    cmd.args(["--mode", "proposition3", "--table"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Premium with Financial & Commercial Insights",
        ));
}
