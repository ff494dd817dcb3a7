use crate::support::ucs;
use predicates::prelude::*;

#[test]
fn test_log_level_debug_shows_debug_messages() {
    ucs()
        .args(["--log-level", "debug", "demo"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_log_level_warn_hides_debug_messages() {
    ucs()
        .args(["--log-level", "warn", "demo"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_verbose_shows_search_stats() {
    ucs()
        .args(["--verbose", "demo"])
        .assert()
        .success()
        .stderr(predicate::str::contains("search stats"))
        .stderr(predicate::str::contains("expansions"));
}

#[test]
fn test_default_logging_is_quiet() {
    ucs()
        .arg("demo")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_log_json_emits_json_lines() {
    let output = ucs()
        .args(["--log-json", "--verbose", "demo"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let first = stderr.lines().next().unwrap();
    let value: serde_json::Value = serde_json::from_str(first).unwrap();
    assert!(value.get("level").is_some());
}

#[test]
fn test_ucs_log_env_var() {
    ucs()
        .env("UCS_LOG", "ucs=debug")
        .arg("demo")
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}
