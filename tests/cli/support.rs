use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::{Path, PathBuf};

pub const TOWNS_JSON: &str = r#"{ "A": [["B", 1], ["C", 5]], "B": [["C", 2]], "C": [] }"#;

pub const TOWNS_YAML: &str = "A:\n  - [B, 1]\n  - [C, 5]\nB:\n  - to: C\n    cost: 2\nC: []\n";

pub const TOWNS_TOML: &str = "A = [[\"B\", 1], [\"C\", 5]]\nB = [{ to = \"C\", cost = 2 }]\nC = []\n";

pub const NEGATIVE_JSON: &str = r#"{ "A": [["B", -1]], "B": [["C", 1]], "C": [] }"#;

/// Get a Command for ucs with logging and config isolated from the host
pub fn ucs() -> Command {
    let mut cmd = cargo_bin_cmd!("ucs");
    cmd.env_remove("RUST_LOG")
        .env_remove("UCS_LOG")
        .env(
            "UCS_CONFIG_DIR",
            Path::new(env!("CARGO_TARGET_TMPDIR")).join("no-config"),
        );
    cmd
}

/// Write a graph document into `dir` and return its path
pub fn write_graph(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Parse stdout of a successful command as JSON
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
