//! Built-in quick examples for the viewer and the `examples` subcommand.

use serde::Serialize;

/// A quick example: a title and an escaped string literal body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Preset {
    pub title: &'static str,
    pub body: &'static str,
}

/// Number of body characters shown in a preset summary.
pub const SUMMARY_CHARS: usize = 50;

pub const PRESETS: &[Preset] = &[
    Preset {
        title: "Basic Headers",
        body: "# Header 1\\n## Header 2\\n### Header 3\\n\\nRegular text",
    },
    Preset {
        title: "Formatting",
        body: "**Bold text** and *italic text*\\n\\n`Code snippet`\\n\\n> Blockquote",
    },
    Preset {
        title: "Lists & Escapes",
        body: "- Item 1\\n- Item 2\\n  - Nested item\\n\\n\\tTab indented text\\n\\nLine 1\\nLine 2",
    },
];

impl Preset {
    /// First [`SUMMARY_CHARS`] characters of the body followed by `...`.
    pub fn summary(&self) -> String {
        let head: String = self.body.chars().take(SUMMARY_CHARS).collect();
        format!("{}...", head)
    }
}

/// The preset the viewer starts with.
pub fn initial() -> &'static Preset {
    &PRESETS[0]
}
