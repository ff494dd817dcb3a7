use crate::support::{stdout_json, ucs, write_graph, NEGATIVE_JSON, TOWNS_JSON, TOWNS_TOML, TOWNS_YAML};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_search_human_output() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "towns.json", TOWNS_JSON);

    ucs()
        .args(["search", "A", "C", "--graph"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("Cheapest path: A -> B -> C"))
        .stdout(predicate::str::contains("Cost of cheapest path: 3"));
}

#[test]
fn test_search_same_result_for_every_document_format() {
    let dir = tempdir().unwrap();
    for (name, content) in [
        ("towns.json", TOWNS_JSON),
        ("towns.yaml", TOWNS_YAML),
        ("towns.toml", TOWNS_TOML),
    ] {
        let graph = write_graph(dir.path(), name, content);
        ucs()
            .args(["search", "A", "C", "--graph"])
            .arg(&graph)
            .assert()
            .success()
            .stdout(predicate::str::contains("Cheapest path: A -> B -> C"));
    }
}

#[test]
fn test_search_explicit_graph_format() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "towns.txt", TOWNS_YAML);

    ucs()
        .args(["search", "A", "C", "--graph-format", "yaml", "--graph"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("Cost of cheapest path: 3"));
}

#[test]
fn test_search_reads_stdin() {
    ucs()
        .args(["search", "A", "C", "--graph", "-"])
        .write_stdin(TOWNS_JSON)
        .assert()
        .success()
        .stdout(predicate::str::contains("Cheapest path: A -> B -> C"));
}

#[test]
fn test_search_json_output() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "towns.json", TOWNS_JSON);

    let output = ucs()
        .args(["--format", "json", "search", "A", "C", "--graph"])
        .arg(&graph)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["from"], "A");
    assert_eq!(json["to"], "C");
    assert_eq!(json["found"], true);
    assert_eq!(json["path"], serde_json::json!(["A", "B", "C"]));
    assert_eq!(json["cost"].as_f64(), Some(3.0));
    assert_eq!(json["hops"], 2);
    assert_eq!(json["stats"]["expansions"], 2);
}

#[test]
fn test_search_records_output() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "towns.json", TOWNS_JSON);

    ucs()
        .args(["--format", "records", "search", "A", "C", "--graph"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H ucs=1 records=1 mode=search from=A to=C found=true cost=3 hops=2\n",
        ))
        .stdout(predicate::str::contains("N 1 B\n"))
        .stdout(predicate::str::contains("E B C 2\n"));
}

#[test]
fn test_search_no_path_is_success() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "towns.json", TOWNS_JSON);

    ucs()
        .args(["search", "C", "A", "--graph"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("No path from C to A"));
}

#[test]
fn test_search_no_path_json() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "towns.json", TOWNS_JSON);

    let output = ucs()
        .args(["--format", "json", "search", "A", "Z", "--graph"])
        .arg(&graph)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["found"], false);
    assert_eq!(json["path"], serde_json::json!([]));
    assert!(json["cost"].is_null());
}

#[test]
fn test_search_unknown_node_warns() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "towns.json", TOWNS_JSON);

    ucs()
        .args(["search", "A", "Z", "--graph"])
        .arg(&graph)
        .assert()
        .success()
        .stderr(predicate::str::contains("node does not appear in the graph"));
}

#[test]
fn test_search_trivial_path() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "towns.json", TOWNS_JSON);

    ucs()
        .args(["search", "B", "B", "--graph"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("Cheapest path: B\n"))
        .stdout(predicate::str::contains("Cost of cheapest path: 0"));
}

#[test]
fn test_search_rejects_negative_cost() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "negative.json", NEGATIVE_JSON);

    ucs()
        .args(["search", "A", "C", "--graph"])
        .arg(&graph)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid edge cost -1"));
}

#[test]
fn test_search_unchecked_costs() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "negative.json", NEGATIVE_JSON);

    ucs()
        .args(["search", "A", "C", "--unchecked-costs", "--graph"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("Cheapest path: A -> B -> C"));
}

#[test]
fn test_search_malformed_graph_exit_code_3() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "bad.json", r#"{ "A": [["B"]] }"#);

    ucs()
        .args(["--format", "json", "search", "A", "B", "--graph"])
        .arg(&graph)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"invalid_graph\""));
}

#[test]
fn test_search_unknown_extension_exit_code_2() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "towns.csv", TOWNS_JSON);

    ucs()
        .args(["search", "A", "C", "--graph"])
        .arg(&graph)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unsupported graph format"));
}

#[test]
fn test_search_records_keep_odd_labels_on_one_line() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        dir.path(),
        "odd.json",
        r#"{ "New\nYork": [["x=1", 2]], "x=1": [] }"#,
    );

    let output = ucs()
        .args(["--format", "records", "search", "New\nYork", "x=1", "--graph"])
        .arg(&graph)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "H ucs=1 records=1 mode=search from=\"New\\nYork\" to=\"x=1\" found=true cost=2 hops=1",
            "N 0 \"New\\nYork\"",
            "N 1 \"x=1\"",
            "E \"New\\nYork\" \"x=1\" 2",
        ]
    );
}
