//! Copy command handler

use anyhow::Result;

use litmd::cli::InputArgs;
use litmd::clipboard::copy_text;
use litmd::theme::ThemeMode;
use litmd::ViewMode;

/// Copy the decoded (or, with `--raw`, the original) text to the clipboard.
#[cfg(not(tarpaulin_include))]
pub fn handle(input: &InputArgs, raw: bool, theme: Option<ThemeMode>) -> Result<()> {
    let config = super::load_config(theme)?;
    let text = super::read_input(input, None)?;
    let decoded = litmd::decode(&text);

    let mode = if raw { ViewMode::Raw } else { ViewMode::Rendered };
    let result = copy_text(mode.payload(&text, &decoded))?;

    println!("{}", super::cli_theme(&config).success_text(&result.message()));
    Ok(())
}
