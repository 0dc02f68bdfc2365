use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

mod common;
use common::sst;

/// Fresh HOME directory so each test owns its configuration file.
fn fresh_home(name: &str) -> PathBuf {
    let mut home = env::temp_dir();
    home.push(format!("sessiontracker_home_{name}"));
    fs::remove_dir_all(&home).ok();
    fs::create_dir_all(&home).expect("create home");
    home
}

fn conf_path(home: &Path) -> PathBuf {
    home.join(".session_tracker").join("sessiontracker.conf")
}

#[test]
fn test_init_writes_config_and_sessions_file() {
    let home = fresh_home("init");

    sst().env("HOME", &home).arg("init").assert().success();

    let conf = fs::read_to_string(conf_path(&home)).expect("config written");
    assert!(conf.contains("data_file:"));
    assert!(conf.contains("default_activity: Work"));
    assert!(conf.contains("use_12hour_format: true"));
    assert!(home.join(".session_tracker").join("sessions.json").exists());
}

#[test]
fn test_config_default_activity_used_by_track() {
    let home = fresh_home("default_activity");
    let dir = home.join(".session_tracker");
    fs::create_dir_all(&dir).expect("dir");
    fs::write(
        conf_path(&home),
        format!(
            "data_file: {}\ndefault_activity: Study\nuse_12hour_format: false\n",
            dir.join("sessions.json").display()
        ),
    )
    .expect("write config");

    sst()
        .env("HOME", &home)
        .arg("track")
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(contains("'Study' saved"));

    sst()
        .env("HOME", &home)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Study"))
        .stdout(contains(" AM").not())
        .stdout(contains(" PM").not());
}

#[test]
fn test_config_check_and_migrate() {
    let home = fresh_home("migrate");
    let dir = home.join(".session_tracker");
    fs::create_dir_all(&dir).expect("dir");
    fs::write(conf_path(&home), "default_activity: Coding\n").expect("write partial config");

    sst()
        .env("HOME", &home)
        .args(["config", "--check"])
        .assert()
        .success()
        .stderr(contains("Missing fields: data_file, use_12hour_format"));

    sst()
        .env("HOME", &home)
        .args(["config", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Configuration updated"));

    let conf = fs::read_to_string(conf_path(&home)).expect("read config");
    assert!(conf.contains("default_activity: Coding"));
    assert!(conf.contains("use_12hour_format: true"));

    sst()
        .env("HOME", &home)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration file is complete."));
}

#[test]
fn test_config_print() {
    let home = fresh_home("print");

    sst()
        .env("HOME", &home)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("default_activity: Work"));
}
