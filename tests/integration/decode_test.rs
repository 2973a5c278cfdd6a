//! Integration tests for the decode command

use predicates::prelude::*;

use crate::helpers::{run_litmd, Sandbox};

#[test]
fn decode_positional_text() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = run_litmd(&sandbox, &["decode", "# Title\\n\\nBody\\ttab"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "# Title\n\nBody\ttab\n");
}

#[test]
fn decode_escaped_backslash_is_not_a_newline() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = run_litmd(&sandbox, &["decode", "C:\\\\new"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "C:\\new\n");
}

#[test]
fn decode_passes_unknown_escapes_through() {
    let sandbox = Sandbox::new();
    let (stdout, _, _) = run_litmd(&sandbox, &["decode", "\\x41 \\u00e9 \\"]);

    assert_eq!(stdout, "\\x41 \\u00e9 \\\n");
}

#[test]
fn decode_reads_piped_stdin() {
    let sandbox = Sandbox::new();
    sandbox
        .command()
        .arg("decode")
        .write_stdin("line 1\\nline 2\n")
        .assert()
        .success()
        .stdout("line 1\nline 2\n");
}

#[test]
fn decode_dash_forces_stdin() {
    let sandbox = Sandbox::new();
    sandbox
        .command()
        .args(["decode", "-"])
        .write_stdin("\\\"quoted\\\"")
        .assert()
        .success()
        .stdout("\"quoted\"\n");
}

#[test]
fn decode_reads_file() {
    let sandbox = Sandbox::new();
    let input = sandbox.path().join("input.txt");
    std::fs::write(&input, "- a\\n- b").unwrap();

    sandbox
        .command()
        .args(["decode", "--file"])
        .arg(&input)
        .assert()
        .success()
        .stdout("- a\n- b\n");
}

#[test]
fn decode_missing_file_fails() {
    let sandbox = Sandbox::new();
    sandbox
        .command()
        .args(["decode", "-f", "does-not-exist.txt"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn decode_text_and_file_conflict() {
    let sandbox = Sandbox::new();
    let (_stdout, stderr, exit_code) = run_litmd(&sandbox, &["decode", "x", "-f", "in.txt"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("cannot be used with"));
}
