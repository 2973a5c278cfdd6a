//! View command handler (the default command)

use anyhow::Result;

use litmd::cli::InputArgs;
use litmd::presets;
use litmd::theme::ThemeMode;
use litmd::tui::run_viewer;

/// Open the interactive viewer, starting from the first quick example when
/// no input is given.
#[cfg(not(tarpaulin_include))]
pub fn handle(input: &InputArgs, theme: Option<ThemeMode>) -> Result<()> {
    let config = super::load_config(theme)?;
    let text = super::read_input(input, Some(presets::initial().body))?;

    if !atty::is(atty::Stream::Stdout) {
        anyhow::bail!("The viewer needs a terminal. Use `litmd render` for piped output.");
    }
    run_viewer(&text, &config)
}
