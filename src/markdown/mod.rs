//! Markdown rendering for decoded text
//!
//! Wraps `pulldown-cmark` with the GitHub-flavored extensions the preview
//! supports (tables, strikethrough, task lists) and turns its event stream into
//! a small block [`Document`]. The document is then drawn either as ratatui
//! [`Text`](ratatui::text::Text) for the viewer or as ANSI-colored lines for
//! the `render` subcommand.
//!
//! # Architecture
//!
//! - `parse`: event stream -> [`Document`]
//! - `render`: [`Document`] -> styled terminal lines
//!
//! # Usage
//!
//! ```
//! use litmd::markdown;
//!
//! let doc = markdown::parse("# Header 1\n## Header 2");
//! assert_eq!(doc.headings().count(), 2);
//! ```

mod parse;
mod render;

pub use parse::{options, parse};
pub use render::{to_ansi, to_text};

/// Marker of a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMarker {
    Bullet,
    Ordered(u64),
}

/// Kind of a rendered block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// Heading with level 1-6
    Heading(u8),
    Paragraph,
    /// Fenced or indented code, with the fence info string if any
    CodeBlock { lang: Option<String> },
    /// List item at nesting `depth` (0 = top level)
    ListItem {
        depth: usize,
        marker: ListMarker,
        /// `Some(checked)` for task list items
        task: Option<bool>,
    },
    /// Table row; each line of the block is one cell
    TableRow { header: bool },
    /// Thematic break
    Rule,
    /// Raw HTML block, shown verbatim
    Html,
}

/// Inline styling flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InlineStyle {
    pub strong: bool,
    pub emphasis: bool,
    pub strikethrough: bool,
    pub code: bool,
    pub link: bool,
}

/// A run of text with one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inline {
    pub text: String,
    pub style: InlineStyle,
}

/// One block of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    /// Number of enclosing block quotes
    pub quote_depth: usize,
    /// Indentation in list levels (continuation paragraphs of list items)
    pub indent: usize,
    /// Lines of inline runs (cells for table rows)
    pub lines: Vec<Vec<Inline>>,
}

impl Block {
    pub(crate) fn new(kind: BlockKind, quote_depth: usize, indent: usize) -> Self {
        Self {
            kind,
            quote_depth,
            indent,
            lines: Vec::new(),
        }
    }

    /// Text of the block without styling, lines joined with `\n`.
    pub fn plain_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.iter().map(|i| i.text.as_str()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.lines
            .iter()
            .all(|line| line.iter().all(|i| i.text.is_empty()))
    }
}

/// A parsed Markdown document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    /// Headings as `(level, text)` pairs in document order.
    pub fn headings(&self) -> impl Iterator<Item = (u8, String)> + '_ {
        self.blocks.iter().filter_map(|b| match b.kind {
            BlockKind::Heading(level) => Some((level, b.plain_text())),
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
