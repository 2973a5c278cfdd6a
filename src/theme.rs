//! Theme configuration for TUI and CLI
//!
//! Centralizes all color and style definitions for the light and dark
//! palettes. Provides both ratatui styles (for the viewer) and ANSI escape
//! codes (for the `render` subcommand and other CLI output).

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Theme selection as chosen by the user.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the terminal background
    #[default]
    System,
}

impl ThemeMode {
    /// All modes in cycle order.
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    /// The next mode in the cycle (light -> dark -> system -> light).
    pub fn next(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
            ThemeMode::System => ThemeMode::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
            ThemeMode::System => "System",
        }
    }

    /// Resolve `System` to a concrete light or dark mode.
    pub fn resolve(self) -> ThemeMode {
        match self {
            ThemeMode::System => {
                let colorfgbg = std::env::var("COLORFGBG").ok();
                match background_is_light(colorfgbg.as_deref()) {
                    Some(true) => ThemeMode::Light,
                    _ => ThemeMode::Dark,
                }
            }
            mode => mode,
        }
    }
}

/// Interpret a `COLORFGBG` value (`"fg;bg"` or `"fg;default;bg"`).
///
/// Background indices 7 (white) and 15 (bright white) count as light.
fn background_is_light(colorfgbg: Option<&str>) -> Option<bool> {
    let bg = colorfgbg?.rsplit(';').next()?.trim();
    let index: u8 = bg.parse().ok()?;
    Some(matches!(index, 7 | 15))
}

/// Theme palette for the viewer and CLI output.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (used for most content)
    pub text_primary: Color,
    /// Secondary/dimmed text color
    pub text_secondary: Color,
    /// Accent color for highlights and important elements
    pub accent: Color,
    /// Markdown heading color
    pub heading: Color,
    /// Inline code and code block color
    pub code: Color,
    /// Block quote color
    pub quote: Color,
    /// Link color
    pub link: Color,
    /// Error/warning color
    pub error: Color,
    /// Success color
    pub success: Color,
    /// Background color (usually default/transparent)
    pub background: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Palette for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::Green,
            heading: Color::LightCyan,
            code: Color::Yellow,
            quote: Color::DarkGray,
            link: Color::LightBlue,
            error: Color::Red,
            success: Color::Green,
            background: Color::Reset,
        }
    }

    /// Palette for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            text_primary: Color::Black,
            text_secondary: Color::DarkGray,
            accent: Color::Blue,
            heading: Color::Magenta,
            code: Color::Red,
            quote: Color::DarkGray,
            link: Color::Blue,
            error: Color::Red,
            success: Color::Green,
            background: Color::Reset,
        }
    }

    /// Palette for a theme mode, resolving `System` first.
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode.resolve() {
            ThemeMode::Light => Self::light(),
            _ => Self::dark(),
        }
    }

    // Style helpers

    /// Style for primary text content.
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for secondary/dimmed text.
    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for accented/highlighted text.
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for bold accented text (keybindings, etc).
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for a Markdown heading of the given level.
    pub fn heading_style(&self, level: u8) -> Style {
        let style = Style::default().fg(self.heading).add_modifier(Modifier::BOLD);
        if level == 1 {
            style.add_modifier(Modifier::UNDERLINED)
        } else {
            style
        }
    }

    pub fn code_style(&self) -> Style {
        Style::default().fg(self.code)
    }

    pub fn quote_style(&self) -> Style {
        Style::default().fg(self.quote).add_modifier(Modifier::ITALIC)
    }

    pub fn link_style(&self) -> Style {
        Style::default()
            .fg(self.link)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// Style for error text.
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for success text.
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    // ANSI color helpers for CLI output

    /// Format text with the accent color (for CLI output).
    pub fn accent_text(&self, text: &str) -> String {
        paint(self.accent, text)
    }

    /// Format text with the primary color (for CLI output).
    pub fn primary_text(&self, text: &str) -> String {
        paint(self.text_primary, text)
    }

    /// Format text with the secondary color (for CLI output).
    pub fn secondary_text(&self, text: &str) -> String {
        paint(self.text_secondary, text)
    }

    /// Format text with the error color (for CLI output).
    pub fn error_text(&self, text: &str) -> String {
        paint(self.error, text)
    }

    /// Format text with the success color (for CLI output).
    pub fn success_text(&self, text: &str) -> String {
        paint(self.success, text)
    }
}

fn paint(color: Color, text: &str) -> String {
    if !color_enabled() {
        return text.to_string();
    }
    format!("{}{}{}", color_to_ansi(color), text, ansi::RESET)
}

/// Whether ANSI colors may be written (honors `NO_COLOR`).
pub fn color_enabled() -> bool {
    std::env::var_os("NO_COLOR").map_or(true, |v| v.is_empty())
}

/// Raw ANSI sequences for output that is not routed through a [`Theme`].
pub mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const ITALIC: &str = "\x1b[3m";
    pub const UNDERLINE: &str = "\x1b[4m";
    pub const STRIKETHROUGH: &str = "\x1b[9m";
    pub const GREEN: &str = "\x1b[32m";
}

/// Convert a ratatui Color to an ANSI escape code.
pub fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        // RGB and indexed colors are not used by the palettes
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_mode_cycles_through_all_modes() {
        let mut mode = ThemeMode::Light;
        for expected in [ThemeMode::Dark, ThemeMode::System, ThemeMode::Light] {
            mode = mode.next();
            assert_eq!(mode, expected);
        }
    }

    #[test]
    fn default_theme_mode_is_system() {
        assert_eq!(ThemeMode::default(), ThemeMode::System);
    }

    #[test]
    fn explicit_modes_resolve_to_themselves() {
        assert_eq!(ThemeMode::Light.resolve(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.resolve(), ThemeMode::Dark);
    }

    #[test]
    fn colorfgbg_white_background_is_light() {
        assert_eq!(background_is_light(Some("0;15")), Some(true));
        assert_eq!(background_is_light(Some("0;default;7")), Some(true));
    }

    #[test]
    fn colorfgbg_black_background_is_dark() {
        assert_eq!(background_is_light(Some("15;0")), Some(false));
    }

    #[test]
    fn colorfgbg_garbage_is_unknown() {
        assert_eq!(background_is_light(None), None);
        assert_eq!(background_is_light(Some("")), None);
        assert_eq!(background_is_light(Some("15;default")), None);
    }

    #[test]
    fn light_and_dark_palettes_differ() {
        assert_ne!(Theme::light().text_primary, Theme::dark().text_primary);
        assert_eq!(Theme::for_mode(ThemeMode::Light).text_primary, Color::Black);
        assert_eq!(Theme::for_mode(ThemeMode::Dark).text_primary, Color::Gray);
    }

    #[test]
    fn style_helpers_return_correct_colors() {
        let theme = Theme::dark();
        assert_eq!(theme.text_style().fg, Some(Color::Gray));
        assert_eq!(theme.text_secondary_style().fg, Some(Color::DarkGray));
        assert_eq!(theme.accent_style().fg, Some(Color::Green));
        assert!(theme
            .heading_style(1)
            .add_modifier
            .contains(Modifier::UNDERLINED));
        assert!(!theme
            .heading_style(2)
            .add_modifier
            .contains(Modifier::UNDERLINED));
    }

    #[test]
    fn color_to_ansi_maps_standard_colors() {
        assert_eq!(color_to_ansi(Color::Green), "\x1b[32m");
        assert_eq!(color_to_ansi(Color::Red), "\x1b[31m");
        assert_eq!(color_to_ansi(Color::Gray), "\x1b[37m");
        assert_eq!(color_to_ansi(Color::DarkGray), "\x1b[90m");
        assert_eq!(color_to_ansi(Color::Reset), "\x1b[0m");
        assert_eq!(color_to_ansi(Color::Rgb(1, 2, 3)), "");
    }
}
