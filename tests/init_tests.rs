//! Integration tests for init and config commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{init_journal, moodlog_cmd};

#[test]
fn test_init_creates_config() {
    let temp = TempDir::new().unwrap();

    moodlog_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized moodlog journal"))
        .stdout(predicate::str::contains("Locale: de"));

    let config_path = temp.path().join(".moodlog/config.toml");
    assert!(config_path.exists());

    let content = fs::read_to_string(config_path).unwrap();
    assert!(content.contains("locale = \"de\""));
    assert!(content.contains("window_days = 7"));
    assert!(content.contains("merge_tolerance_secs = 30"));
}

#[test]
fn test_init_with_english_locale() {
    let temp = init_journal("en");

    let content = fs::read_to_string(temp.path().join(".moodlog/config.toml")).unwrap();
    assert!(content.contains("locale = \"en\""));
}

#[test]
fn test_init_invalid_locale_fails() {
    let temp = TempDir::new().unwrap();

    moodlog_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--locale")
        .arg("fr")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid locale"));

    assert!(!temp.path().join(".moodlog").exists());
}

#[test]
fn test_init_already_initialized_fails() {
    let temp = init_journal("de");

    moodlog_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn test_config_get_and_set() {
    let temp = init_journal("de");

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["config", "window_days", "14"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set window_days = 14"));

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["config", "window_days"])
        .assert()
        .success()
        .stdout("14\n");
}

#[test]
fn test_config_list() {
    let temp = init_journal("en");

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["config", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("locale = en"))
        .stdout(predicate::str::contains("window_days = 7"))
        .stdout(predicate::str::contains("merge_tolerance_secs = 30"))
        .stdout(predicate::str::contains("created = "));
}

#[test]
fn test_config_rejects_invalid_values() {
    let temp = init_journal("de");

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["config", "window_days", "0"])
        .assert()
        .failure();

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["config", "merge_tolerance_secs", "9223372036854775807"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("timeline")
        .assert()
        .success();

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["config", "created", "2025-01-01T00:00:00Z"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("read-only"));

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["config", "colour", "blue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_config_outside_journal_fails() {
    let temp = TempDir::new().unwrap();

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["config", "--list"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("moodlog init"));
}

#[test]
fn test_moodlog_root_env() {
    let journal = init_journal("en");
    let elsewhere = TempDir::new().unwrap();

    moodlog_cmd()
        .current_dir(elsewhere.path())
        .env("MOODLOG_ROOT", journal.path())
        .args(["config", "locale"])
        .assert()
        .success()
        .stdout("en\n");
}
