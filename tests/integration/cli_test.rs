//! Integration tests for top-level CLI behavior

use predicates::prelude::*;

use crate::helpers::{run_litmd, Sandbox};

#[test]
fn version_includes_package_version() {
    let sandbox = Sandbox::new();
    sandbox
        .command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "litmd {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn help_lists_subcommands() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = run_litmd(&sandbox, &["--help"]);

    assert_eq!(exit_code, 0);
    for name in ["view", "decode", "render", "copy", "export", "examples", "config"] {
        assert!(stdout.contains(name), "missing {} in help", name);
    }
}

#[test]
fn examples_lists_three_presets() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = run_litmd(&sandbox, &["examples"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("1. Basic Headers"));
    assert!(stdout.contains("2. Formatting"));
    assert!(stdout.contains("3. Lists & Escapes"));
    assert!(stdout.contains("# Header 1\\n## Header 2"));
}

#[test]
fn examples_json_is_parseable() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = run_litmd(&sandbox, &["examples", "--json"]);

    assert_eq!(exit_code, 0);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let presets = value.as_array().unwrap();
    assert_eq!(presets.len(), 3);
    assert_eq!(presets[1]["title"], "Formatting");
    assert!(presets[0]["body"].as_str().unwrap().contains("\\n"));
}

#[test]
fn completions_for_bash() {
    let sandbox = Sandbox::new();
    sandbox
        .command()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_litmd"));
}

#[test]
fn viewer_requires_a_terminal() {
    let sandbox = Sandbox::new();
    let (_stdout, stderr, exit_code) = run_litmd(&sandbox, &["view", "x"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("terminal"));
}

#[test]
fn copy_help_mentions_raw() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = run_litmd(&sandbox, &["copy", "--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("--raw"));
    assert!(stdout.contains("clipboard"));
}

#[test]
fn unknown_subcommand_is_a_usage_error() {
    let sandbox = Sandbox::new();
    let (_stdout, stderr, exit_code) = run_litmd(&sandbox, &["frobnicate"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("frobnicate"));
}
