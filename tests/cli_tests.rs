//! End-to-end tests of the `hgnc-db` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use std::path::PathBuf;

fn sample_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/hgnc_sample.tsv")
}

fn hgnc_db() -> Command {
    Command::cargo_bin("hgnc-db").unwrap()
}

#[test]
fn test_fields_indexed() {
    let output = hgnc_db()
        .args(["fields", "--indexed", "--format", "tsv"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    // Header plus seven indexed fields
    assert_eq!(stdout.lines().count(), 8);
    assert!(stdout.contains("hgnc_id\ttrue"));
    assert!(stdout.contains("omim_id\ttrue"));
    assert!(!stdout.contains("mane_select"));
}

#[test]
fn test_fetch_resolves_previous_symbol() {
    hgnc_db()
        .args(["fetch", "--data"])
        .arg(sample_path())
        .arg("GBA")
        .assert()
        .success()
        .stdout(predicate::str::contains("GBA1 (HGNC:4177)"))
        .stdout(predicate::str::contains("glucosylceramidase beta 1"));
}

#[test]
fn test_fetch_no_normalize() {
    hgnc_db()
        .args(["fetch", "--no-normalize", "--data"])
        .arg(sample_path())
        .arg("GBA")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No records found for 'GBA'"));
}

#[test]
fn test_fetch_unindexed_field_as_json() {
    let output = hgnc_db()
        .args(["--format", "json", "fetch", "--field", "location", "--data"])
        .arg(sample_path())
        .arg("1q22")
        .output()
        .unwrap();
    assert!(output.status.success());

    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let symbols: Vec<&str> = records
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["symbol"].as_str().unwrap())
        .collect();
    assert_eq!(symbols, vec!["GBA1", "GBAP1"]);
}

#[test]
fn test_lookup_mixed_identifiers() {
    hgnc_db()
        .args(["lookup", "--target", "entrez_id", "--data"])
        .arg(sample_path())
        .args(["BRCA1", "HGNC:11998", "ENSG00000146648", "HER1", "NOPE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BRCA1 -> 672"))
        .stdout(predicate::str::contains("HGNC:11998 -> 7157"))
        .stdout(predicate::str::contains("ENSG00000146648 -> 1956"))
        .stdout(predicate::str::contains("HER1 -> 1956"))
        .stdout(predicate::str::contains("NOPE -> (not found)"));
}

#[test]
fn test_lookup_tsv() {
    hgnc_db()
        .args(["lookup", "-t", "symbol", "--format", "tsv", "--data"])
        .arg(sample_path())
        .arg("7157")
        .assert()
        .success()
        .stdout("query\tfield\tsymbol\n7157\tentrez_id\tTP53\n");
}

#[test]
fn test_lookup_unknown_field_is_rejected() {
    hgnc_db()
        .args(["lookup", "--target", "entrez", "--data"])
        .arg(sample_path())
        .arg("BRCA1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown HGNC field"));
}

#[test]
fn test_info_reads_gzip_by_extension() {
    use flate2::write::GzEncoder;
    use flate2::Compression;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hgnc_complete_set.txt.gz");
    let mut encoder = GzEncoder::new(std::fs::File::create(&path).unwrap(), Compression::default());
    encoder
        .write_all(&std::fs::read(sample_path()).unwrap())
        .unwrap();
    encoder.finish().unwrap();

    hgnc_db()
        .args(["info", "--format", "tsv", "--data"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("records\t9\n"))
        .stdout(predicate::str::contains("aliases\t15\n"));
}

#[test]
fn test_missing_data_file() {
    hgnc_db()
        .args(["info", "--data", "/nonexistent/hgnc.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not load"));
}
