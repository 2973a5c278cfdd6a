//! Integration tests for the config subcommands

use predicates::prelude::*;

use crate::helpers::{run_litmd, Sandbox};

#[test]
fn config_path_honors_env_override() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = run_litmd(&sandbox, &["config", "path"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim_end(), sandbox.config_path().display().to_string());
}

#[test]
fn config_show_prints_defaults_without_a_file() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = run_litmd(&sandbox, &["config", "show"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("[view]"));
    assert!(stdout.contains("default_mode = \"rendered\""));
    assert!(stdout.contains("indicator_ms = 2000"));
    assert!(stdout.contains("filename_template = \"{name}\""));
    assert!(!sandbox.config_path().exists());
}

#[test]
fn config_show_reflects_theme_flag() {
    let sandbox = Sandbox::new();
    let (stdout, _, _) = run_litmd(&sandbox, &["--theme", "light", "config", "show"]);

    assert!(stdout.contains("mode = \"light\""));
}

#[test]
fn config_migrate_yes_creates_file() {
    let sandbox = Sandbox::new();
    sandbox
        .command()
        .args(["config", "migrate", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config file created successfully."));

    let content = std::fs::read_to_string(sandbox.config_path()).unwrap();
    assert!(content.contains("[export]"));

    // A second run has nothing to add.
    sandbox
        .command()
        .args(["config", "migrate", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config is already up to date."));
}

#[test]
fn config_migrate_keeps_existing_values() {
    let sandbox = Sandbox::new();
    let path = sandbox.config_path();
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "# mine\n[theme]\nmode = \"light\"\n").unwrap();

    let (_stdout, stderr, exit_code) = run_litmd(&sandbox, &["config", "migrate", "-y"]);
    assert_eq!(exit_code, 0, "stderr: {}", stderr);

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# mine\n"));
    assert!(content.contains("mode = \"light\""));
    assert!(content.contains("[clipboard]"));
}

#[test]
fn invalid_config_is_reported() {
    let sandbox = Sandbox::new();
    let path = sandbox.config_path();
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "[theme]\nmode = \"sepia\"\n").unwrap();

    let (_stdout, stderr, exit_code) = run_litmd(&sandbox, &["decode", "x"]);
    // decode does not read the config
    assert_eq!(exit_code, 0);
    assert!(stderr.is_empty());

    let (_stdout, stderr, exit_code) = run_litmd(&sandbox, &["render", "x"]);
    assert_eq!(exit_code, 1);
    assert!(stderr.starts_with("Error: "));
}
