//! Integration tests for the export command

use predicates::prelude::*;

use crate::helpers::{run_litmd, Sandbox};

#[test]
fn export_writes_decoded_text_to_default_name() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = run_litmd(&sandbox, &["export", "# Title\\n\\nBody"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.starts_with("Saved "));
    assert!(stdout.trim_end().ends_with("markdown-content.md"));

    let written = std::fs::read_to_string(sandbox.path().join("markdown-content.md")).unwrap();
    assert_eq!(written, "# Title\n\nBody");
}

#[test]
fn export_never_overwrites() {
    let sandbox = Sandbox::new();
    std::fs::write(sandbox.path().join("notes.md"), "keep me").unwrap();

    let (_stdout, _stderr, exit_code) = run_litmd(&sandbox, &["export", "-o", "notes", "first"]);
    assert_eq!(exit_code, 0);
    let (stdout, _stderr, _) = run_litmd(&sandbox, &["export", "-o", "notes", "second"]);
    assert!(stdout.trim_end().ends_with("notes-2.md"));

    let read = |name: &str| std::fs::read_to_string(sandbox.path().join(name)).unwrap();
    assert_eq!(read("notes.md"), "keep me");
    assert_eq!(read("notes-1.md"), "first");
    assert_eq!(read("notes-2.md"), "second");
}

#[test]
fn export_raw_keeps_escapes() {
    let sandbox = Sandbox::new();
    run_litmd(&sandbox, &["export", "--raw", "-o", "raw", "a\\nb"]);

    let written = std::fs::read_to_string(sandbox.path().join("raw.md")).unwrap();
    assert_eq!(written, "a\\nb");
}

#[test]
fn export_creates_target_directory() {
    let sandbox = Sandbox::new();
    sandbox
        .command()
        .args(["export", "-d", "out/docs", "-o", "Meeting Notes", "x"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Meeting-Notes.md"));

    assert!(sandbox.path().join("out/docs/Meeting-Notes.md").is_file());
}

#[test]
fn export_uses_configured_directory_and_template() {
    let sandbox = Sandbox::new();
    let config_path = sandbox.config_path();
    std::fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    let target = sandbox.path().join("saved");
    std::fs::write(
        &config_path,
        format!(
            "[export]\ndirectory = {:?}\nfilename_template = \"draft-{{name}}\"\n",
            target.to_str().unwrap()
        ),
    )
    .unwrap();

    let (_stdout, stderr, exit_code) = run_litmd(&sandbox, &["export", "-o", "intro", "text"]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(target.join("draft-intro.md").is_file());
}

#[test]
fn export_with_bad_template_fails() {
    let sandbox = Sandbox::new();
    let config_path = sandbox.config_path();
    std::fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    std::fs::write(&config_path, "[export]\nfilename_template = \"{bogus}\"\n").unwrap();

    let (_stdout, stderr, exit_code) = run_litmd(&sandbox, &["export", "text"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Unknown template tag: bogus"));
}
