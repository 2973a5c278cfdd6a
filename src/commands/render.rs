//! Render command handler

use anyhow::Result;

use litmd::cli::InputArgs;
use litmd::markdown;
use litmd::theme::{color_enabled, ThemeMode};

/// Print the decoded text rendered as Markdown.
///
/// Colors are used only when stdout is a terminal, `--no-color` is absent
/// and `NO_COLOR` is unset.
pub fn handle(input: &InputArgs, no_color: bool, theme: Option<ThemeMode>) -> Result<()> {
    let config = super::load_config(theme)?;
    let text = super::read_input(input, None)?;
    let decoded = litmd::decode(&text);

    let doc = markdown::parse(&decoded);
    let color = !no_color && color_enabled() && atty::is(atty::Stream::Stdout);
    let output = markdown::to_ansi(&doc, &super::cli_theme(&config), color);
    tracing::debug!(blocks = doc.blocks.len(), color, "rendered");

    println!("{}", output);
    Ok(())
}
