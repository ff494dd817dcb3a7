use crate::support::{stdout_json, ucs};
use predicates::prelude::*;

#[test]
fn test_demo_defaults_to_towns() {
    ucs()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cheapest path: A -> B -> C"))
        .stdout(predicate::str::contains("Cost of cheapest path: 3"));
}

#[test]
fn test_demo_extended() {
    ucs()
        .args(["demo", "--graph", "extended"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cheapest path: A -> B -> F -> H -> J"))
        .stdout(predicate::str::contains("Cost of cheapest path: 9"));
}

#[test]
fn test_demo_explicit_endpoints() {
    let output = ucs()
        .args(["--format", "json", "demo", "--graph", "extended", "D", "I"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["from"], "D");
    assert_eq!(json["to"], "I");
    assert_eq!(json["cost"].as_f64(), Some(11.0));
}

#[test]
fn test_demo_unreachable_goal() {
    ucs()
        .args(["demo", "J", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path from J to A"));
}

#[test]
fn test_demo_unknown_graph_exit_code_2() {
    ucs()
        .args(["demo", "--graph", "moon"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown built-in graph"));
}
