use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use sessiontracker::SessionStore;
use std::fs;

mod common;
use common::{setup_test_file, sst, write_sample_file};

#[test]
fn test_init_creates_empty_sessions_file() {
    let data = setup_test_file("cli_init");

    sst()
        .args(["--data", &data, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert_eq!(fs::read_to_string(&data).expect("read").trim(), "[]");
}

#[test]
fn test_init_keeps_existing_sessions() {
    let data = setup_test_file("cli_init_existing");
    write_sample_file(&data);

    sst()
        .args(["--data", &data, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Sessions    : 3"));

    assert_eq!(SessionStore::load(&data).sessions().len(), 3);
}

#[test]
fn test_track_with_enter_appends_record() {
    let data = setup_test_file("cli_track");
    write_sample_file(&data);

    sst()
        .args(["--data", &data, "track", "Reading"])
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(contains("Session #4 'Reading' saved"));

    let store = SessionStore::load(&data);
    let last = store.sessions().last().expect("a record");
    assert_eq!(store.sessions().len(), 4);
    assert_eq!(last.id, 4);
    assert_eq!(last.activity, "Reading");
    assert!(last.end.is_some());
    assert!(last.duration >= 0 && last.duration <= 2);
}

#[test]
fn test_track_default_activity_on_end_of_input() {
    let data = setup_test_file("cli_track_default");

    sst()
        .args(["--data", &data, "track"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(contains("'Work' saved"));

    let store = SessionStore::load(&data);
    assert_eq!(store.sessions().len(), 1);
    assert_eq!(store.sessions()[0].id, 1);
}

#[test]
fn test_list_24h_and_12h() {
    let data = setup_test_file("cli_list");
    write_sample_file(&data);

    sst()
        .args(["--data", &data, "list", "--24h"])
        .assert()
        .success()
        .stdout(contains("2025-01-15 14:00:00"))
        .stdout(contains("01:30:00"))
        .stdout(contains("Sprint planning"))
        .stdout(contains("3 session(s)"));

    sst()
        .args(["--data", &data, "list", "--12h"])
        .assert()
        .success()
        .stdout(contains("2025-01-15 02:00:00 PM"))
        .stdout(contains("2025-01-01 09:00:00 AM"));
}

#[test]
fn test_list_filters_period_and_activity() {
    let data = setup_test_file("cli_list_filter");
    write_sample_file(&data);

    sst()
        .args(["--data", &data, "list", "--period", "2025-02", "--24h"])
        .assert()
        .success()
        .stdout(contains("2025-02-03 08:00:00"))
        .stdout(contains("2025-01-01").not())
        .stdout(contains("1 session(s)"));

    sst()
        .args(["--data", &data, "list", "--activity", "reading"])
        .assert()
        .success()
        .stdout(contains("Reading"))
        .stdout(contains("1 session(s)"));
}

#[test]
fn test_list_invalid_period_fails() {
    let data = setup_test_file("cli_list_bad_period");
    write_sample_file(&data);

    sst()
        .args(["--data", &data, "list", "--period", "2025-13"])
        .assert()
        .failure()
        .stderr(contains("Invalid range"));
}

#[test]
fn test_stats_summary_and_chart() {
    let data = setup_test_file("cli_stats");
    write_sample_file(&data);

    sst()
        .args(["--data", &data, "stats", "--chart"])
        .assert()
        .success()
        .stdout(contains("Total Sessions:   3"))
        .stdout(contains("Total Time:       3 hours, 0 minutes"))
        .stdout(contains("Average Duration: 60 minutes"))
        .stdout(contains("Work: 2 sessions, 2h 30m"))
        .stdout(contains("Reading: 1 sessions, 0h 30m"))
        .stdout(contains("Activity Distribution"))
        .stdout(contains("83.3%"));
}

#[test]
fn test_stats_json() {
    let data = setup_test_file("cli_stats_json");
    write_sample_file(&data);

    let output = sst()
        .args(["--data", &data, "stats", "--json"])
        .output()
        .expect("run stats");
    assert!(output.status.success());

    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(v["total_sessions"], 3);
    assert_eq!(v["total_time"], 10800);
    assert_eq!(v["average_duration"], 3600);
    assert_eq!(v["activities"]["Work"]["count"], 2);
    assert_eq!(v["activities"]["Reading"]["total_time"], 1800);
}

#[test]
fn test_stats_empty_store() {
    let data = setup_test_file("cli_stats_empty");

    sst()
        .args(["--data", &data, "stats"])
        .assert()
        .success()
        .stdout(contains("Total Sessions:   0"))
        .stdout(contains("Average Duration: 0 minutes"));
}

#[test]
fn test_edit_comments_and_unknown_key() {
    let data = setup_test_file("cli_edit");
    write_sample_file(&data);

    sst()
        .args([
            "--data",
            &data,
            "edit",
            "2",
            "--comments",
            "chapter 4",
            "--set",
            "duration=1",
        ])
        .assert()
        .success()
        .stderr(contains("Ignoring unknown field 'duration'"))
        .stdout(contains("Session #2 updated"));

    let store = SessionStore::load(&data);
    let rec = store.get(2).expect("id 2");
    assert_eq!(rec.comments, "chapter 4");
    assert_eq!(rec.duration, 1800);
    assert_eq!(rec.activity, "Reading");
}

#[test]
fn test_edit_activity_via_set() {
    let data = setup_test_file("cli_edit_set");
    write_sample_file(&data);

    sst()
        .args(["--data", &data, "edit", "3", "--set", "activity=Meetings"])
        .assert()
        .success();

    assert_eq!(
        SessionStore::load(&data).get(3).map(|r| r.activity.clone()),
        Some("Meetings".to_string())
    );
}

#[test]
fn test_edit_missing_id_fails() {
    let data = setup_test_file("cli_edit_missing");
    write_sample_file(&data);
    let before = fs::read_to_string(&data).expect("read");

    sst()
        .args(["--data", &data, "edit", "42", "--comments", "nope"])
        .assert()
        .failure()
        .stderr(contains("Entry with ID 42 not found."));

    assert_eq!(fs::read_to_string(&data).expect("read"), before);
}

#[test]
fn test_del_with_yes() {
    let data = setup_test_file("cli_del");
    write_sample_file(&data);

    sst()
        .args(["--data", &data, "del", "1", "3", "--yes"])
        .assert()
        .success()
        .stdout(contains("2 entries deleted successfully."));

    let store = SessionStore::load(&data);
    let ids: Vec<u64> = store.sessions().iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![2]);
}

#[test]
fn test_del_partial_reports_missing() {
    let data = setup_test_file("cli_del_partial");
    write_sample_file(&data);

    sst()
        .args(["--data", &data, "del", "2", "9", "-y"])
        .assert()
        .failure()
        .stdout(contains("Entry deleted successfully."))
        .stderr(contains("Entry with ID 9 not found."));

    assert!(SessionStore::load(&data).get(2).is_none());
}

#[test]
fn test_del_cancelled_without_confirmation() {
    let data = setup_test_file("cli_del_cancel");
    write_sample_file(&data);

    sst()
        .args(["--data", &data, "del", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    assert_eq!(SessionStore::load(&data).sessions().len(), 3);
}

#[test]
fn test_log_records_operations() {
    let data = setup_test_file("cli_log");
    write_sample_file(&data);

    sst()
        .args(["--data", &data, "del", "1", "--yes"])
        .assert()
        .success();

    sst()
        .args(["--data", &data, "edit", "2", "--activity", "Study"])
        .assert()
        .success();

    sst()
        .args(["--data", &data, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("Deleted 1 session(s)"))
        .stdout(contains("Updated fields: activity"));
}
