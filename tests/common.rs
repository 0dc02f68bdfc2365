#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use sessiontracker::SessionRecord;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with HOME pointed at a private temp directory so the
/// user's real configuration is never read.
pub fn sst() -> Command {
    let mut cmd = cargo_bin_cmd!("sessiontracker");
    cmd.env("HOME", test_home());
    cmd
}

pub fn test_home() -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push("sessiontracker_test_home");
    fs::create_dir_all(&path).ok();
    path
}

/// Create a unique sessions file path inside the system temp dir and remove
/// any file (and its backup / log siblings) left by a previous run.
pub fn setup_test_file(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_sessions.json", name));
    fs::remove_file(&path).ok();
    fs::remove_file(path.with_extension("backup")).ok();
    fs::remove_file(path.with_extension("log")).ok();
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|d| d.and_hms_opt(h, min, s))
        .expect("valid timestamp")
}

/// Completed record starting at `start` and lasting `duration` seconds.
pub fn record(id: u64, activity: &str, start: NaiveDateTime, duration: i64) -> SessionRecord {
    SessionRecord {
        id,
        activity: activity.to_string(),
        start,
        end: Some(start + chrono::Duration::seconds(duration)),
        duration,
        comments: String::new(),
    }
}

/// Write a small sessions file with three records (ids 1..=3).
pub fn write_sample_file(path: &str) {
    let json = r#"[
  {
    "id": 1,
    "activity": "Work",
    "start": "2025-01-01T09:00:00.000000",
    "end": "2025-01-01T10:30:00.000000",
    "duration": 5400,
    "comments": "Sprint planning"
  },
  {
    "id": 2,
    "activity": "Reading",
    "start": "2025-01-15T14:00:00.000000",
    "end": "2025-01-15T14:30:00.000000",
    "duration": 1800,
    "comments": ""
  },
  {
    "id": 3,
    "activity": "Work",
    "start": "2025-02-03T08:00:00.000000",
    "end": "2025-02-03T09:00:00.000000",
    "duration": 3600,
    "comments": ""
  }
]"#;
    fs::write(path, json).expect("write sample sessions");
}
