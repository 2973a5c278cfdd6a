//! View mode selection and payload helpers.

use serde::{Deserialize, Serialize};

/// Which representation of the decoded text is displayed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Decoded text rendered as Markdown
    #[default]
    Rendered,
    /// Decoded text shown verbatim
    Raw,
}

impl ViewMode {
    /// Switch to the other mode.
    pub fn toggle(self) -> Self {
        match self {
            ViewMode::Rendered => ViewMode::Raw,
            ViewMode::Raw => ViewMode::Rendered,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Rendered => "Rendered",
            ViewMode::Raw => "Raw",
        }
    }

    /// One-line description shown under the preview.
    pub fn description(self) -> &'static str {
        match self {
            ViewMode::Rendered => "Showing rendered Markdown with escaped characters converted",
            ViewMode::Raw => "Showing raw text with escaped characters converted",
        }
    }

    /// Pick the text handed to the clipboard writer or file exporter.
    ///
    /// Raw mode hands over the input as typed; rendered mode hands over the
    /// decoded text.
    pub fn payload<'a>(self, input: &'a str, decoded: &'a str) -> &'a str {
        match self {
            ViewMode::Raw => input,
            ViewMode::Rendered => decoded,
        }
    }
}

/// Number of columns a tab expands to in the raw display.
pub const TAB_WIDTH: usize = 4;

/// Make decoded text safe to draw on a terminal.
///
/// Tabs expand to spaces and control characters other than newline are
/// replaced by their Unicode control pictures (`\r` -> `␍`). Only the display
/// changes; payloads always use the text itself.
pub fn visible_controls(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\n' => out.push('\n'),
            '\t' => out.push_str(&" ".repeat(TAB_WIDTH)),
            c if (c as u32) < 0x20 => {
                out.push(char::from_u32(0x2400 + c as u32).unwrap_or('?'));
            }
            '\u{7f}' => out.push('\u{2421}'),
            c => out.push(c),
        }
    }
    out
}
