//! Config subcommands handler

use anyhow::Result;
use std::fs;
use std::io::{self, BufRead, Write};

use litmd::config::{migrate_config, MigrationResult};
use litmd::theme::{ansi, color_enabled, Theme, ThemeMode};
use litmd::Config;

/// Theme for config output. Falls back to defaults so a broken config file
/// can still be edited or migrated.
fn current_theme(theme: Option<ThemeMode>) -> Theme {
    let mode = theme.unwrap_or_else(|| {
        Config::load()
            .map(|config| config.theme.mode)
            .unwrap_or_default()
    });
    Theme::for_mode(mode.resolve())
}

/// Show current configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(theme: Option<ThemeMode>) -> Result<()> {
    let config = super::load_config(theme)?;
    let toml_str = toml::to_string_pretty(&config)?;
    let theme = super::cli_theme(&config);
    println!("{}", theme.primary_text(&toml_str));
    Ok(())
}

/// Print the config file location.
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Open configuration file in the default editor.
///
/// Uses $EDITOR environment variable (defaults to 'vi').
#[cfg(not(tarpaulin_include))]
pub fn handle_edit(theme: Option<ThemeMode>) -> Result<()> {
    let config_path = Config::config_path()?;
    let theme = current_theme(theme);

    // Ensure config exists
    if !config_path.exists() {
        Config::default().save_to(&config_path)?;
    }

    // Get editor from environment
    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());

    println!(
        "{}",
        theme.primary_text(&format!(
            "Opening {} with {}",
            config_path.display(),
            editor
        ))
    );

    std::process::Command::new(&editor)
        .arg(&config_path)
        .status()
        .map_err(|e| anyhow::anyhow!("Failed to open editor: {}", e))?;

    Ok(())
}

/// Migrate config file by adding missing fields.
///
/// Reads the existing config file (or empty if it doesn't exist),
/// adds any missing fields from the current default config,
/// shows a preview of changes, and prompts for confirmation unless `yes`.
#[cfg(not(tarpaulin_include))]
pub fn handle_migrate(yes: bool, theme: Option<ThemeMode>) -> Result<()> {
    let theme = current_theme(theme);
    let config_path = Config::config_path()?;
    let file_exists = config_path.exists();

    // Read existing content (empty string if file doesn't exist)
    let content = if file_exists {
        fs::read_to_string(&config_path)?
    } else {
        String::new()
    };

    // Run migration
    let result = migrate_config(&content)?;

    // Case 1: No changes needed
    if !result.has_changes() {
        println!("{}", theme.primary_text("Config is already up to date."));
        return Ok(());
    }

    // Case 2: Config file doesn't exist - offer to create with full defaults
    if !file_exists {
        println!(
            "{}",
            theme.primary_text("Config file does not exist. Will create with default settings.")
        );
        println!();
        print_diff_preview(&result, true);
        println!();

        if !yes && !prompt_confirmation(&format!("Create {}?", config_path.display()), &theme)? {
            println!("{}", theme.primary_text("No changes made."));
            return Ok(());
        }

        // Create config directory and write file
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_path, &result.content)?;
        println!(
            "{}",
            theme.success_text("Config file created successfully.")
        );
        return Ok(());
    }

    // Case 3: Config exists but has missing fields - show diff and confirm
    let total_fields = result.added_fields.len();
    let total_sections = result.sections_added.len();

    // Print summary
    if total_sections > 0 {
        println!(
            "{}",
            theme.primary_text(&format!(
                "Found {} missing field(s) in {} new section(s):",
                total_fields, total_sections
            ))
        );
    } else {
        println!(
            "{}",
            theme.primary_text(&format!("Found {} missing field(s):", total_fields))
        );
    }
    println!();

    // Show diff preview - compare old content with new content
    print_diff_preview(&result, false);
    println!();

    // Prompt for confirmation
    if !yes
        && !prompt_confirmation(
            &format!("Apply these changes to {}?", config_path.display()),
            &theme,
        )?
    {
        println!("{}", theme.primary_text("No changes made."));
        return Ok(());
    }

    // Write the updated config
    fs::write(&config_path, &result.content)?;
    println!("{}", theme.success_text("Config updated successfully."));

    Ok(())
}

/// One line of the migration preview.
#[derive(Debug, Clone, PartialEq, Eq)]
enum DiffLine {
    Added(String),
    Context(String),
}

/// Print a diff-style preview of the config changes.
fn print_diff_preview(result: &MigrationResult, is_new_file: bool) {
    let color = color_enabled();
    for line in diff_preview(result, is_new_file) {
        match line {
            DiffLine::Added(text) if color => println!("{}+ {}{}", ansi::GREEN, text, ansi::RESET),
            DiffLine::Added(text) => println!("+ {}", text),
            DiffLine::Context(text) => println!("  {}", text),
        }
    }
}

/// Lines of the migrated content worth showing: added fields (and, for a new
/// file, everything), each preceded once by its section header.
fn diff_preview(result: &MigrationResult, is_new_file: bool) -> Vec<DiffLine> {
    let mut out = Vec::new();
    let mut section = String::new();
    let mut section_is_new = false;
    let mut pending_header: Option<String> = None;

    for line in result.content.lines() {
        let trimmed = line.trim();

        if trimmed.starts_with('[') && trimmed.ends_with(']') {
            section = trimmed[1..trimmed.len() - 1].trim().to_string();
            section_is_new = is_new_file || result.sections_added.contains(&section);
            pending_header = Some(line.to_string());
            continue;
        }

        let added = match trimmed.split_once('=') {
            Some((key, _)) => {
                is_new_file
                    || result
                        .added_fields
                        .contains(&format!("{}.{}", section, key.trim()))
            }
            None => is_new_file && !trimmed.is_empty(),
        };
        if !added {
            continue;
        }

        if let Some(header) = pending_header.take() {
            out.push(if section_is_new {
                DiffLine::Added(header)
            } else {
                DiffLine::Context(header)
            });
        }
        out.push(DiffLine::Added(line.to_string()));
    }
    out
}

/// Prompt user for yes/no confirmation.
///
/// Returns true if user confirms (y/yes), false otherwise.
/// If stdin is not a TTY (non-interactive), returns false.
fn prompt_confirmation(message: &str, theme: &Theme) -> Result<bool> {
    // Check if stdin is a TTY - if not, skip prompt and return false
    if !atty::is(atty::Stream::Stdin) {
        println!(
            "{}",
            theme.secondary_text("Non-interactive mode: use --yes to apply changes automatically")
        );
        return Ok(false);
    }

    print!("{} [y/N] ", theme.primary_text(message));
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;

    let response = input.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn added(text: &str) -> DiffLine {
        DiffLine::Added(text.to_string())
    }

    fn context(text: &str) -> DiffLine {
        DiffLine::Context(text.to_string())
    }

    #[test]
    fn new_file_shows_everything_as_added() {
        let result = migrate_config("").unwrap();
        let lines = diff_preview(&result, true);

        assert!(lines.iter().all(|l| matches!(l, DiffLine::Added(_))));
        assert!(lines.contains(&added("[view]")));
        assert!(lines
            .iter()
            .any(|l| matches!(l, DiffLine::Added(t) if t.starts_with("indicator_ms"))));
    }

    #[test]
    fn existing_section_header_is_context() {
        let result = migrate_config("[export]\nname = \"notes\"\n").unwrap();
        let lines = diff_preview(&result, false);

        assert!(lines.contains(&context("[export]")));
        assert!(lines
            .iter()
            .any(|l| matches!(l, DiffLine::Added(t) if t.starts_with("directory"))));
        assert!(!lines
            .iter()
            .any(|l| matches!(l, DiffLine::Added(t) if t.starts_with("name"))));
        assert!(lines.contains(&added("[clipboard]")));
    }

    #[test]
    fn unchanged_sections_are_omitted() {
        let content = "[view]\ndefault_mode = \"raw\"\n";
        let result = migrate_config(content).unwrap();
        let lines = diff_preview(&result, false);

        assert!(!lines.contains(&context("[view]")));
        assert!(!lines.contains(&added("[view]")));
    }
}
