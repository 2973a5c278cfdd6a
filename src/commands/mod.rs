//! Subcommand handlers for the `litmd` binary.

pub mod completions;
pub mod config;
pub mod copy;
pub mod decode;
pub mod examples;
pub mod export;
pub mod render;
pub mod view;

use std::fs;
use std::io::{self, Read};

use anyhow::{bail, Context, Result};

use litmd::cli::InputArgs;
use litmd::theme::{Theme, ThemeMode};
use litmd::Config;

/// Load the config file and apply the `--theme` override.
pub fn load_config(theme: Option<ThemeMode>) -> Result<Config> {
    let mut config = Config::load()?;
    if let Some(mode) = theme {
        config.theme.mode = mode;
    }
    Ok(config)
}

/// Theme for CLI output.
pub fn cli_theme(config: &Config) -> Theme {
    Theme::for_mode(config.theme.mode.resolve())
}

/// Read the input text for a command.
///
/// Order: TEXT (`-` forces stdin), then `--file`, then stdin when it is not a
/// terminal, then `fallback`.
pub fn read_input(args: &InputArgs, fallback: Option<&str>) -> Result<String> {
    resolve_input(args, atty::is(atty::Stream::Stdin), read_stdin, fallback)
}

fn read_stdin() -> io::Result<String> {
    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    Ok(text)
}

fn resolve_input(
    args: &InputArgs,
    stdin_is_tty: bool,
    stdin: impl FnOnce() -> io::Result<String>,
    fallback: Option<&str>,
) -> Result<String> {
    if let Some(text) = &args.text {
        if text == "-" {
            return read_piped(stdin);
        }
        return Ok(text.clone());
    }
    if let Some(path) = &args.file {
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }
    if !stdin_is_tty {
        return read_piped(stdin);
    }
    match fallback {
        Some(text) => Ok(text.to_string()),
        None => bail!("No input given. Pass TEXT, --file FILE, or pipe text on stdin."),
    }
}

/// Stdin with the trailing newline added by `echo` and friends removed.
fn read_piped(stdin: impl FnOnce() -> io::Result<String>) -> Result<String> {
    let mut text = stdin().context("Failed to read standard input")?;
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}
