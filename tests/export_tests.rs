use chrono::NaiveDate;
use predicates::str::contains;
use sessiontracker::export::parse_range;
use std::fs;
use std::io::Read;

mod common;
use common::{setup_test_file, sst, temp_out, write_sample_file};

#[test]
fn test_export_csv_all() {
    let data = setup_test_file("export_csv_all");
    write_sample_file(&data);
    let out = temp_out("export_csv_all", "csv");

    sst()
        .args(["--data", &data, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("id,activity,start,end,duration,comments"));
    assert_eq!(
        lines.next(),
        Some("1,Work,2025-01-01T09:00:00.000000,2025-01-01T10:30:00.000000,5400,Sprint planning")
    );
    assert_eq!(content.lines().count(), 4);
}

#[test]
fn test_export_csv_empty_store_writes_header() {
    let data = setup_test_file("export_csv_empty");
    let out = temp_out("export_csv_empty", "csv");

    sst()
        .args(["--data", &data, "export", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert_eq!(content.trim(), "id,activity,start,end,duration,comments");
}

#[test]
fn test_export_json_range() {
    let data = setup_test_file("export_json_range");
    write_sample_file(&data);
    let out = temp_out("export_json_range", "json");

    sst()
        .args([
            "--data", &data, "export", "--format", "json", "--file", &out, "--range", "2025-01",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let v: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let arr = v.as_array().expect("array");
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[1]["activity"], "Reading");
    assert!(!content.contains("2025-02-03"));
}

#[test]
fn test_export_requires_absolute_path() {
    let data = setup_test_file("export_relative");
    write_sample_file(&data);

    sst()
        .args(["--data", &data, "export", "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_existing_file_needs_force() {
    let data = setup_test_file("export_force");
    write_sample_file(&data);
    let out = temp_out("export_force", "csv");
    fs::write(&out, "keep me").expect("write");

    sst()
        .args(["--data", &data, "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&out).expect("read"), "keep me");

    sst()
        .args(["--data", &data, "export", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).expect("read").starts_with("id,activity"));
}

#[test]
fn test_backup_plain_copy() {
    let data = setup_test_file("backup_plain");
    write_sample_file(&data);
    let out = temp_out("backup_plain", "json");

    sst()
        .args(["--data", &data, "backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert_eq!(
        fs::read_to_string(&out).expect("read backup"),
        fs::read_to_string(&data).expect("read data")
    );
}

#[test]
fn test_backup_compressed() {
    let data = setup_test_file("backup_zip");
    write_sample_file(&data);
    let out = temp_out("backup_zip", "json");
    let zip_out = temp_out("backup_zip", "zip");

    sst()
        .args(["--data", &data, "backup", "--file", &out, "--compress"])
        .assert()
        .success();

    assert!(!std::path::Path::new(&out).exists());

    let file = fs::File::open(&zip_out).expect("zip exists");
    let mut archive = zip::ZipArchive::new(file).expect("valid zip");
    assert_eq!(archive.len(), 1);

    let mut entry = archive.by_index(0).expect("entry");
    let mut content = String::new();
    entry.read_to_string(&mut content).expect("read entry");
    assert_eq!(content, fs::read_to_string(&data).expect("read data"));
}

#[test]
fn test_backup_missing_sessions_file_fails() {
    let data = setup_test_file("backup_missing");
    let out = temp_out("backup_missing", "json");

    sst()
        .args(["--data", &data, "backup", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("Sessions file not found"));
}

#[test]
fn test_parse_range_forms() {
    let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).expect("date");

    let r = parse_range("2024-02").expect("ok").expect("bounded");
    assert_eq!((r.from, r.to), (d(2024, 2, 1), d(2024, 2, 29)));

    let r = parse_range("2025").expect("ok").expect("bounded");
    assert_eq!((r.from, r.to), (d(2025, 1, 1), d(2025, 12, 31)));

    let r = parse_range("2025-11:2026-01").expect("ok").expect("bounded");
    assert_eq!((r.from, r.to), (d(2025, 11, 1), d(2026, 1, 31)));

    let r = parse_range("2025-06-01:2025-06-10").expect("ok").expect("bounded");
    assert!(r.contains(d(2025, 6, 10)));
    assert!(!r.contains(d(2025, 6, 11)));

    assert!(parse_range("all").expect("ok").is_none());
    assert!(parse_range("2025:2025-01").is_err());
    assert!(parse_range("2025-06-10:2025-06-01").is_err());
    assert!(parse_range("yesterday").is_err());
}
