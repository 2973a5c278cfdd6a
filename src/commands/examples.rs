//! Examples command handler

use anyhow::Result;
use terminal_size::{terminal_size, Width};
use unicode_width::UnicodeWidthChar;

use litmd::presets::PRESETS;
use litmd::theme::ThemeMode;

/// Indent before each example body.
const BODY_INDENT: &str = "   ";

/// List the quick examples, or print them as JSON.
pub fn handle(json: bool, theme: Option<ThemeMode>) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(PRESETS)?);
        return Ok(());
    }

    let config = super::load_config(theme)?;
    let theme = super::cli_theme(&config);
    let width = terminal_size()
        .filter(|_| atty::is(atty::Stream::Stdout))
        .map(|(Width(w), _)| usize::from(w).saturating_sub(BODY_INDENT.len()));

    for (i, preset) in PRESETS.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", theme.accent_text(&format!("{}. {}", i + 1, preset.title)));
        let body = match width {
            Some(width) => fit_width(preset.body, width),
            None => preset.body.to_string(),
        };
        println!("{}{}", BODY_INDENT, theme.secondary_text(&body));
    }
    Ok(())
}

/// Cut `text` to `width` display columns, ending with `…` when shortened.
fn fit_width(text: &str, width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
