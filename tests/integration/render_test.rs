//! Integration tests for the render command

use predicates::prelude::*;

use crate::helpers::{run_litmd, Sandbox};

#[test]
fn render_headers_example() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = run_litmd(
        &sandbox,
        &["render", "--no-color", "# Header 1\\n## Header 2\\n\\nRegular text"],
    );

    assert_eq!(exit_code, 0);
    insta::assert_snapshot!(stdout, @r"
    Header 1

    Header 2

    Regular text
    ");
}

#[test]
fn render_lists_and_quotes() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = run_litmd(
        &sandbox,
        &["render", "--", "- Item 1\\n- Item 2\\n  - Nested item\\n\\n> Quote"],
    );

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("• Item 1\n• Item 2\n  • Nested item"));
    assert!(stdout.contains("│ Quote"));
}

#[test]
fn render_output_has_no_escape_codes_when_piped() {
    let sandbox = Sandbox::new();
    sandbox
        .command()
        .env_remove("NO_COLOR")
        .args(["render", "**bold** and ~~gone~~"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not())
        .stdout(predicate::str::contains("bold and gone"));
}

#[test]
fn render_table_from_stdin() {
    let sandbox = Sandbox::new();
    sandbox
        .command()
        .arg("render")
        .write_stdin("| a | b |\\n|---|---|\\n| 1 | 2 |")
        .assert()
        .success()
        .stdout(predicate::str::contains("a │ b"))
        .stdout(predicate::str::contains("1 │ 2"));
}

#[test]
fn render_undecoded_newlines_would_stay_one_heading() {
    // Without decoding, the whole input is a single heading line.
    let doc = litmd::markdown::parse("# A\\n# B");
    assert_eq!(doc.headings().count(), 1);

    let doc = litmd::markdown::parse(&litmd::decode("# A\\n# B"));
    assert_eq!(doc.headings().count(), 2);
}
