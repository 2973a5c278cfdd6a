//! Drawing a [`Document`] as styled terminal lines.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use unicode_width::UnicodeWidthStr;

use super::{Block, BlockKind, Document, Inline, InlineStyle, ListMarker};
use crate::theme::{ansi, color_to_ansi, Theme};
use crate::view::visible_controls;

/// Width of a thematic break.
const RULE_WIDTH: usize = 40;

/// Separator drawn between table cells.
const CELL_SEPARATOR: &str = " │ ";

/// Build ratatui text for the viewer's rendered preview.
///
/// Control characters in the text are drawn as visible replacements so they
/// never reach the terminal as cursor movements.
pub fn to_text(doc: &Document, theme: &Theme) -> Text<'static> {
    build_text(doc, theme, true)
}

fn build_text(doc: &Document, theme: &Theme, visible: bool) -> Text<'static> {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut prev: Option<&Block> = None;

    for block in &doc.blocks {
        if let Some(prev) = prev {
            if !continues(prev, block) {
                lines.push(Line::default());
            }
        }
        render_block(block, theme, visible, &mut lines);
        prev = Some(block);
    }

    Text::from(lines)
}

/// Build terminal output for the `render` subcommand.
///
/// With `color` off the result is plain text with the same layout. Text is
/// written as decoded, control characters included.
pub fn to_ansi(doc: &Document, theme: &Theme, color: bool) -> String {
    let text = build_text(doc, theme, false);
    let mut out = String::new();
    for (i, line) in text.lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        for span in &line.spans {
            if color && span.style != Style::default() {
                out.push_str(&style_to_ansi(span.style));
                out.push_str(&span.content);
                out.push_str(ansi::RESET);
            } else {
                out.push_str(&span.content);
            }
        }
    }
    out
}

/// Consecutive list items and table rows are drawn without a blank line.
fn continues(prev: &Block, next: &Block) -> bool {
    matches!(
        (&prev.kind, &next.kind),
        (BlockKind::ListItem { .. }, BlockKind::ListItem { .. })
            | (BlockKind::TableRow { .. }, BlockKind::TableRow { header: false })
    )
}

fn render_block(block: &Block, theme: &Theme, visible: bool, out: &mut Vec<Line<'static>>) {
    let base = if block.quote_depth > 0 {
        theme.quote_style()
    } else {
        theme.text_style()
    };

    match &block.kind {
        BlockKind::Heading(level) => {
            let style = theme.heading_style(*level);
            for line in &block.lines {
                out.push(with_prefix(block, theme, inline_spans(line, style, theme, visible)));
            }
        }
        BlockKind::Paragraph => {
            for line in &block.lines {
                out.push(with_prefix(block, theme, inline_spans(line, base, theme, visible)));
            }
        }
        BlockKind::CodeBlock { .. } => {
            if block.lines.is_empty() {
                out.push(with_prefix(block, theme, Vec::new()));
            }
            for line in &block.lines {
                let text: String = line.iter().map(|i| i.text.as_str()).collect();
                let text = shown(&text, visible);
                let spans = vec![Span::styled(format!("    {}", text), theme.code_style())];
                out.push(with_prefix(block, theme, spans));
            }
        }
        BlockKind::ListItem {
            depth,
            marker,
            task,
        } => {
            let mut bullet = "  ".repeat(*depth);
            match marker {
                ListMarker::Bullet => bullet.push_str("• "),
                ListMarker::Ordered(n) => bullet.push_str(&format!("{}. ", n)),
            }
            match task {
                Some(true) => bullet.push_str("[x] "),
                Some(false) => bullet.push_str("[ ] "),
                None => {}
            }
            let hang = " ".repeat(bullet.width());

            if block.lines.is_empty() {
                let spans = vec![Span::styled(bullet.clone(), theme.accent_style())];
                out.push(with_prefix(block, theme, spans));
            }
            for (i, line) in block.lines.iter().enumerate() {
                let lead = if i == 0 { bullet.clone() } else { hang.clone() };
                let mut spans = vec![Span::styled(lead, theme.accent_style())];
                spans.extend(inline_spans(line, base, theme, visible));
                out.push(with_prefix(block, theme, spans));
            }
        }
        BlockKind::TableRow { header } => {
            let style = if *header {
                theme.accent_bold_style()
            } else {
                base
            };
            let mut spans = Vec::new();
            let mut width = 0;
            for (i, cell) in block.lines.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::styled(CELL_SEPARATOR, theme.text_secondary_style()));
                    width += CELL_SEPARATOR.width();
                }
                let cell_spans = inline_spans(cell, style, theme, visible);
                width += cell_spans.iter().map(|s| s.content.width()).sum::<usize>();
                spans.extend(cell_spans);
            }
            out.push(with_prefix(block, theme, spans));
            if *header {
                let rule = Span::styled("─".repeat(width.max(1)), theme.text_secondary_style());
                out.push(with_prefix(block, theme, vec![rule]));
            }
        }
        BlockKind::Rule => {
            let rule = Span::styled("─".repeat(RULE_WIDTH), theme.text_secondary_style());
            out.push(with_prefix(block, theme, vec![rule]));
        }
        BlockKind::Html => {
            for line in &block.lines {
                let text: String = line.iter().map(|i| i.text.as_str()).collect();
                let spans = vec![Span::styled(shown(&text, visible), theme.text_secondary_style())];
                out.push(with_prefix(block, theme, spans));
            }
        }
    }
}

/// Prepend quote bars and list indentation.
fn with_prefix(block: &Block, theme: &Theme, spans: Vec<Span<'static>>) -> Line<'static> {
    let mut all = Vec::with_capacity(spans.len() + 2);
    if block.quote_depth > 0 {
        all.push(Span::styled("│ ".repeat(block.quote_depth), theme.quote_style()));
    }
    if block.indent > 0 {
        all.push(Span::raw("  ".repeat(block.indent)));
    }
    all.extend(spans);
    Line::from(all)
}

fn inline_spans(runs: &[Inline], base: Style, theme: &Theme, visible: bool) -> Vec<Span<'static>> {
    runs.iter()
        .map(|run| Span::styled(shown(&run.text, visible), inline_style(base, run.style, theme)))
        .collect()
}

fn shown(text: &str, visible: bool) -> String {
    if visible {
        visible_controls(text)
    } else {
        text.to_string()
    }
}

fn inline_style(base: Style, style: InlineStyle, theme: &Theme) -> Style {
    let mut out = if style.code {
        theme.code_style()
    } else if style.link {
        theme.link_style()
    } else {
        base
    };
    if style.strong {
        out = out.add_modifier(Modifier::BOLD);
    }
    if style.emphasis {
        out = out.add_modifier(Modifier::ITALIC);
    }
    if style.strikethrough {
        out = out.add_modifier(Modifier::CROSSED_OUT);
    }
    out
}

fn style_to_ansi(style: Style) -> String {
    let mut codes = String::new();
    if let Some(fg) = style.fg {
        codes.push_str(color_to_ansi(fg));
    }
    let modifiers = [
        (Modifier::BOLD, ansi::BOLD),
        (Modifier::ITALIC, ansi::ITALIC),
        (Modifier::UNDERLINED, ansi::UNDERLINE),
        (Modifier::CROSSED_OUT, ansi::STRIKETHROUGH),
    ];
    for (modifier, code) in modifiers {
        if style.add_modifier.contains(modifier) {
            codes.push_str(code);
        }
    }
    codes
}
