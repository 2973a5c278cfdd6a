//! Export command handler

use std::path::PathBuf;

use anyhow::Result;

use litmd::cli::InputArgs;
use litmd::export::Exporter;
use litmd::theme::ThemeMode;
use litmd::ViewMode;

/// Options for the export command.
pub struct ExportOptions {
    pub name: Option<String>,
    pub dir: Option<PathBuf>,
    pub raw: bool,
}

/// Save the decoded (or, with `--raw`, the original) text as a `.md` file.
pub fn handle(input: &InputArgs, options: ExportOptions, theme: Option<ThemeMode>) -> Result<()> {
    let config = super::load_config(theme)?;
    let text = super::read_input(input, None)?;
    let decoded = litmd::decode(&text);

    let exporter = match options.dir {
        Some(dir) => Exporter::new(dir).with_template(&config.export.filename_template)?,
        None => config.export.exporter()?,
    };
    let name = options.name.unwrap_or_else(|| config.export.name.clone());
    let mode = if options.raw {
        ViewMode::Raw
    } else {
        ViewMode::Rendered
    };

    let result = exporter.export(mode.payload(&text, &decoded), &name)?;
    println!("{}", super::cli_theme(&config).success_text(&result.message()));
    Ok(())
}
