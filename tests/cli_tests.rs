mod common;
use common::{hrp, workdir, write_config};
use predicates::str::contains;
use std::fs;

#[test]
fn test_init_creates_config_once() {
    let dir = workdir("init");
    let cfg = dir.join("hrportal.conf");
    let cfg_s = cfg.to_string_lossy().to_string();

    hrp()
        .args(["--config", &cfg_s, "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    let content = fs::read_to_string(&cfg).expect("read config");
    assert!(content.contains("api_base_url"));
    assert!(content.contains("poll_interval_secs: 60"));

    hrp()
        .args(["--config", &cfg_s, "init"])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    hrp()
        .args(["--config", &cfg_s, "init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_config_print_shows_values() {
    let dir = workdir("config_print");
    let cfg = write_config(&dir, "http://portal.local/api");

    hrp()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("http://portal.local/api"))
        .stdout(contains("grouping_role"));
}

#[test]
fn test_login_writes_session() {
    let dir = workdir("login");
    let cfg = write_config(&dir, "http://127.0.0.1:9/api");

    hrp()
        .args([
            "--config", &cfg, "login", "--token", "abc123", "--role", "IT", "--name", "Ana",
        ])
        .assert()
        .success()
        .stdout(contains("role 'it'"));

    let saved: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(dir.join("session.json")).expect("read session"),
    )
    .expect("parse session");
    assert_eq!(saved["token"], "abc123");
    assert_eq!(saved["role"], "it");
}

#[test]
fn test_login_rejects_blank_token() {
    let dir = workdir("login_blank");
    let cfg = write_config(&dir, "http://127.0.0.1:9/api");

    hrp()
        .args(["--config", &cfg, "login", "--token", "  ", "--role", "hr"])
        .assert()
        .failure()
        .stderr(contains("token must not be empty"));
}

#[test]
fn test_tickets_without_session_fails() {
    let dir = workdir("tickets_no_session");
    let cfg = write_config(&dir, "http://127.0.0.1:9/api");

    hrp()
        .args(["--config", &cfg, "tickets"])
        .assert()
        .failure()
        .stderr(contains("No active session"));
}

#[test]
fn test_invalid_range_format() {
    let dir = workdir("bad_range");
    let cfg = write_config(&dir, "http://127.0.0.1:9/api");

    hrp()
        .args(["--config", &cfg, "summary", "-r", "January"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));
}
