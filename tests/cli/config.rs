use crate::support::{ucs, write_graph, NEGATIVE_JSON, TOWNS_JSON};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_config_sets_default_format() {
    let dir = tempdir().unwrap();
    let config = write_graph(dir.path(), "config.toml", "[output]\nformat = \"records\"\n");

    ucs()
        .arg("--config")
        .arg(&config)
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("H ucs=1 records=1 mode=search"));
}

#[test]
fn test_format_flag_overrides_config() {
    let dir = tempdir().unwrap();
    let config = write_graph(dir.path(), "config.toml", "[output]\nformat = \"records\"\n");

    ucs()
        .arg("--config")
        .arg(&config)
        .args(["--format", "human", "demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cheapest path: A -> B -> C"));
}

#[test]
fn test_config_dir_env_var() {
    let dir = tempdir().unwrap();
    write_graph(dir.path(), "config.toml", "[output]\nformat = \"json\"\n");

    ucs()
        .env("UCS_CONFIG_DIR", dir.path())
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"found\": true"));
}

#[test]
fn test_config_unchecked_cost_policy() {
    let dir = tempdir().unwrap();
    let config = write_graph(
        dir.path(),
        "config.toml",
        "[search]\ncost_policy = \"unchecked\"\n",
    );
    let graph = write_graph(dir.path(), "negative.json", NEGATIVE_JSON);

    ucs()
        .arg("--config")
        .arg(&config)
        .args(["search", "A", "C", "--graph"])
        .arg(&graph)
        .assert()
        .success();
}

#[test]
fn test_config_expansion_limit() {
    let dir = tempdir().unwrap();
    let config = write_graph(dir.path(), "config.toml", "[search]\nmax_expansions = 1\n");
    let graph = write_graph(dir.path(), "towns.json", TOWNS_JSON);

    ucs()
        .arg("--config")
        .arg(&config)
        .args(["search", "A", "C", "--graph"])
        .arg(&graph)
        .assert()
        .code(1);

    // The flag wins over the configured limit
    ucs()
        .arg("--config")
        .arg(&config)
        .args(["search", "A", "C", "--max-expansions", "10", "--graph"])
        .arg(&graph)
        .assert()
        .success();
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = tempdir().unwrap();

    ucs()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .arg("demo")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_malformed_config_fails() {
    let dir = tempdir().unwrap();
    let config = write_graph(dir.path(), "config.toml", "[output]\nformat = \"xml\"\n");

    ucs()
        .arg("--config")
        .arg(&config)
        .arg("demo")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}
