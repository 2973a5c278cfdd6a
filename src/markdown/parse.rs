//! Conversion of the `pulldown-cmark` event stream into a [`Document`].

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag};

use super::{Block, BlockKind, Document, Inline, InlineStyle, ListMarker};

/// Parser options: tables, strikethrough and task lists.
pub fn options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
}

/// Parse decoded text into a [`Document`].
pub fn parse(text: &str) -> Document {
    let mut builder = Builder::default();
    for event in Parser::new_ext(text, options()) {
        builder.event(event);
    }
    let doc = builder.finish();
    tracing::debug!(blocks = doc.blocks.len(), "parsed markdown");
    doc
}

/// Containers opened by `Event::Start`, popped on the matching `Event::End`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Open {
    Paragraph,
    Heading,
    BlockQuote,
    CodeBlock,
    Html,
    List,
    Item,
    Table,
    TableHead,
    TableRow,
    TableCell,
    Emphasis,
    Strong,
    Strikethrough,
    Link,
    Other,
}

#[derive(Debug, Default)]
struct Builder {
    blocks: Vec<Block>,
    current: Option<Block>,
    open: Vec<Open>,
    /// Next ordinal for each open list (`None` for bullet lists)
    lists: Vec<Option<u64>>,
    quote_depth: usize,
    strong: usize,
    emphasis: usize,
    strikethrough: usize,
    link: usize,
}

impl Builder {
    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(_) => {
                if let Some(open) = self.open.pop() {
                    self.end(open);
                }
            }
            Event::Text(text) => {
                if self.in_code_block() {
                    self.push_code(&text);
                } else {
                    self.push_text(&text, self.style());
                }
            }
            Event::Code(text) => {
                let style = InlineStyle {
                    code: true,
                    ..self.style()
                };
                self.push_text(&text, style);
            }
            Event::Html(text) => self.push_code(&text),
            Event::InlineHtml(text) => self.push_text(&text, self.style()),
            Event::SoftBreak => self.push_text(" ", self.style()),
            Event::HardBreak => {
                if let Some(block) = self.current.as_mut() {
                    block.lines.push(Vec::new());
                }
            }
            Event::Rule => {
                self.flush();
                self.blocks
                    .push(Block::new(BlockKind::Rule, self.quote_depth, 0));
            }
            Event::TaskListMarker(checked) => {
                if let Some(Block {
                    kind: BlockKind::ListItem { task, .. },
                    ..
                }) = self.current.as_mut()
                {
                    *task = Some(checked);
                }
            }
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        let open = match tag {
            Tag::Paragraph => {
                if !self.continues_item() {
                    self.open_block(BlockKind::Paragraph);
                }
                Open::Paragraph
            }
            Tag::Heading { level, .. } => {
                self.open_block(BlockKind::Heading(level as u8));
                Open::Heading
            }
            Tag::BlockQuote(..) => {
                self.flush();
                self.quote_depth += 1;
                Open::BlockQuote
            }
            Tag::CodeBlock(kind) => {
                let lang = match kind {
                    CodeBlockKind::Fenced(info) if !info.is_empty() => Some(info.to_string()),
                    _ => None,
                };
                self.open_block(BlockKind::CodeBlock { lang });
                Open::CodeBlock
            }
            Tag::HtmlBlock => {
                self.open_block(BlockKind::Html);
                Open::Html
            }
            Tag::List(start) => {
                self.flush();
                self.lists.push(start);
                Open::List
            }
            Tag::Item => {
                let marker = match self.lists.last_mut() {
                    Some(Some(next)) => {
                        let marker = ListMarker::Ordered(*next);
                        *next += 1;
                        marker
                    }
                    _ => ListMarker::Bullet,
                };
                let depth = self.lists.len().saturating_sub(1);
                self.flush();
                self.current = Some(Block::new(
                    BlockKind::ListItem {
                        depth,
                        marker,
                        task: None,
                    },
                    self.quote_depth,
                    0,
                ));
                Open::Item
            }
            Tag::Table(_) => {
                self.flush();
                Open::Table
            }
            Tag::TableHead => {
                self.open_block(BlockKind::TableRow { header: true });
                Open::TableHead
            }
            Tag::TableRow => {
                self.open_block(BlockKind::TableRow { header: false });
                Open::TableRow
            }
            Tag::TableCell => {
                if let Some(block) = self.current.as_mut() {
                    block.lines.push(Vec::new());
                }
                Open::TableCell
            }
            Tag::Emphasis => {
                self.emphasis += 1;
                Open::Emphasis
            }
            Tag::Strong => {
                self.strong += 1;
                Open::Strong
            }
            Tag::Strikethrough => {
                self.strikethrough += 1;
                Open::Strikethrough
            }
            Tag::Link { .. } | Tag::Image { .. } => {
                self.link += 1;
                Open::Link
            }
            _ => Open::Other,
        };
        self.open.push(open);
    }

    fn end(&mut self, open: Open) {
        match open {
            Open::Paragraph
            | Open::Heading
            | Open::CodeBlock
            | Open::Html
            | Open::Item
            | Open::Table
            | Open::TableHead
            | Open::TableRow => self.flush(),
            Open::BlockQuote => {
                self.flush();
                self.quote_depth = self.quote_depth.saturating_sub(1);
            }
            Open::List => {
                self.flush();
                self.lists.pop();
            }
            Open::Emphasis => self.emphasis = self.emphasis.saturating_sub(1),
            Open::Strong => self.strong = self.strong.saturating_sub(1),
            Open::Strikethrough => self.strikethrough = self.strikethrough.saturating_sub(1),
            Open::Link => self.link = self.link.saturating_sub(1),
            Open::TableCell | Open::Other => {}
        }
    }

    fn style(&self) -> InlineStyle {
        InlineStyle {
            strong: self.strong > 0,
            emphasis: self.emphasis > 0,
            strikethrough: self.strikethrough > 0,
            code: false,
            link: self.link > 0,
        }
    }

    fn in_code_block(&self) -> bool {
        matches!(
            self.current.as_ref().map(|b| &b.kind),
            Some(BlockKind::CodeBlock { .. })
        )
    }

    /// A paragraph directly inside a list item that has no text yet belongs to
    /// the item itself (loose lists).
    fn continues_item(&self) -> bool {
        match self.current.as_ref() {
            Some(block) => matches!(block.kind, BlockKind::ListItem { .. }) && block.is_empty(),
            None => false,
        }
    }

    fn open_block(&mut self, kind: BlockKind) {
        self.flush();
        self.current = Some(Block::new(kind, self.quote_depth, self.lists.len()));
    }

    fn flush(&mut self) {
        let Some(block) = self.current.take() else {
            return;
        };
        let keep_empty = matches!(
            block.kind,
            BlockKind::CodeBlock { .. } | BlockKind::ListItem { .. } | BlockKind::TableRow { .. }
        );
        if keep_empty || !block.is_empty() {
            self.blocks.push(block);
        }
    }

    fn push_text(&mut self, text: &str, style: InlineStyle) {
        if self.current.is_none() {
            self.open_block(BlockKind::Paragraph);
        }
        let Some(block) = self.current.as_mut() else {
            return;
        };
        if block.lines.is_empty() {
            block.lines.push(Vec::new());
        }
        let Some(line) = block.lines.last_mut() else {
            return;
        };
        match line.last_mut() {
            Some(last) if last.style == style => last.text.push_str(text),
            _ => line.push(Inline {
                text: text.to_string(),
                style,
            }),
        }
    }

    /// Append verbatim text (code and HTML blocks), one line per source line.
    fn push_code(&mut self, text: &str) {
        if self.current.is_none() {
            self.open_block(BlockKind::Html);
        }
        let Some(block) = self.current.as_mut() else {
            return;
        };
        for line in text.strip_suffix('\n').unwrap_or(text).split('\n') {
            block.lines.push(vec![Inline {
                text: line.to_string(),
                style: InlineStyle::default(),
            }]);
        }
    }

    fn finish(mut self) -> Document {
        self.flush();
        Document {
            blocks: self.blocks,
        }
    }
}
