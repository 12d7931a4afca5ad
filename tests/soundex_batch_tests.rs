//! Tests for batch encoding over files

use serde_json::Value;
use soundex::{encode_lines, BatchOptions, Encoder, OutputFormat};
use std::fs::{self, File};
use std::io::BufReader;
use tempfile::TempDir;

const NAMES: &str = "Vijendran\nvIjeNDran\n\nA\n1\nAABB\nBBBBBBBB\nA1B2C\nJo\nAlexander\n";

fn write_names(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("names.txt");
    fs::write(&path, NAMES).unwrap();
    path
}

#[test]
fn test_encode_file_as_text() {
    let tmp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_names(&tmp_dir);

    let mut out = Vec::new();
    let reader = BufReader::new(File::open(&path).unwrap());
    let summary =
        encode_lines(&Encoder::default(), reader, &mut out, BatchOptions::default()).unwrap();

    let out = String::from_utf8(out).unwrap();
    let codes: Vec<&str> = out
        .lines()
        .map(|l| l.split('\t').nth(1).unwrap())
        .collect();
    assert_eq!(
        codes,
        vec!["V253", "V253", "A000", "1000", "A100", "B000", "A120", "J000", "A425"]
    );
    assert_eq!(summary.lines, 10);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.encoded, 9);
    assert_eq!(summary.defaults, 0);
}

#[test]
fn test_encode_file_as_json_lines() {
    let tmp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_names(&tmp_dir);

    let options = BatchOptions {
        format: OutputFormat::Json,
        ..BatchOptions::default()
    };
    let mut out = Vec::new();
    let reader = BufReader::new(File::open(&path).unwrap());
    encode_lines(&Encoder::default(), reader, &mut out, options).unwrap();

    let rows: Vec<Value> = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(rows.len(), 9);
    assert_eq!(rows[0]["name"], "Vijendran");
    assert_eq!(rows[0]["code"], "V253");
    assert_eq!(rows[8]["code"], "A425");
}
