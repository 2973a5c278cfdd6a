//! Interactive viewer
//!
//! Input pane on one side, live preview on the other. Every keystroke
//! re-decodes the input; the preview shows it either rendered as Markdown or
//! as raw decoded text. Copy and export act on the payload of the current
//! view mode and report failures in the status line without changing state.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::app::layout::{build_viewer_layout, ViewerLayout};
use super::app::status_footer::{render_error_line, render_footer, render_status_line};
use super::app::{App, KeyResult};
use super::input::TextInput;
use super::ui::modal_rect;
use crate::clipboard::Copy;
use crate::config::Config;
use crate::decode::{decode, legend_label, LEGEND};
use crate::export::Exporter;
use crate::markdown;
use crate::presets::{Preset, PRESETS};
use crate::theme::{Theme, ThemeMode};
use crate::view::{visible_controls, ViewMode};

/// How often the screen is redrawn without input.
pub const TICK_RATE: Duration = Duration::from_millis(250);

/// Lines moved by PageUp/PageDown.
const PAGE_SCROLL: u16 = 10;

pub const TITLE: &str = "String Literal to Markdown Viewer";
pub const TAGLINE: &str = "Paste a string literal with escape sequences and preview it as Markdown";

/// UI mode for the viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Editing the input
    #[default]
    Normal,
    /// Picking a quick example
    Presets,
    /// Typing the export filename
    ExportPrompt,
    /// Showing keyboard shortcuts
    Help,
}

/// One-line message in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub is_error: bool,
}

impl Notice {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Everything the viewer shows, independent of the terminal.
pub struct ViewerState {
    input: TextInput,
    view_mode: ViewMode,
    theme_mode: ThemeMode,
    theme: Theme,
    mode: Mode,
    scroll: u16,
    /// Inner width of the preview pane at the last draw; 0 before the first
    preview_width: u16,
    preset_idx: usize,
    export_name: TextInput,
    default_export_name: String,
    notice: Option<Notice>,
    copied_at: Option<Instant>,
    indicator: Duration,
    copy: Copy,
    exporter: Exporter,
}

impl ViewerState {
    pub fn new(initial: &str, config: &Config, copy: Copy, exporter: Exporter) -> Self {
        let theme_mode = config.theme.mode;
        Self {
            input: TextInput::new(initial),
            view_mode: config.view.default_mode,
            theme_mode,
            theme: Theme::for_mode(theme_mode.resolve()),
            mode: Mode::Normal,
            scroll: 0,
            preview_width: 0,
            preset_idx: 0,
            export_name: TextInput::default(),
            default_export_name: config.export.name.clone(),
            notice: None,
            copied_at: None,
            indicator: Duration::from_millis(config.clipboard.indicator_ms),
            copy,
            exporter,
        }
    }

    pub fn input(&self) -> &str {
        self.input.text()
    }

    pub fn decoded(&self) -> String {
        decode(self.input.text())
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Whether the "Copied" indicator is showing at `now`.
    pub fn is_copied(&self, now: Instant) -> bool {
        self.copied_at
            .is_some_and(|at| now.saturating_duration_since(at) < self.indicator)
    }

    /// Record the preview pane area from the last draw so scrolling can be
    /// clamped to the wrapped preview.
    pub fn set_preview_area(&mut self, area: Rect) {
        self.preview_width = area.width.saturating_sub(2);
    }

    /// Expire the copy indicator once its interval has passed.
    pub fn tick(&mut self, now: Instant) {
        if self.copied_at.is_some() && !self.is_copied(now) {
            self.copied_at = None;
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> KeyResult {
        match self.mode {
            Mode::Normal => return self.handle_normal_key(key, now),
            Mode::Presets => self.handle_presets_key(key),
            Mode::ExportPrompt => self.handle_export_key(key),
            Mode::Help => self.mode = Mode::Normal,
        }
        KeyResult::Continue
    }

    fn handle_normal_key(&mut self, key: KeyEvent, now: Instant) -> KeyResult {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return KeyResult::Quit,
            KeyCode::Char('q') | KeyCode::Char('c') if ctrl => return KeyResult::Quit,
            KeyCode::Char('y') if ctrl => self.copy_payload(now),
            KeyCode::Char('s') if ctrl => {
                self.export_name = TextInput::new(&self.default_export_name);
                self.mode = Mode::ExportPrompt;
            }
            KeyCode::Char('e') if ctrl => {
                self.preset_idx = 0;
                self.mode = Mode::Presets;
            }
            KeyCode::Char('t') if ctrl => self.cycle_theme(),
            KeyCode::Char('u') if ctrl => self.edit(TextInput::clear),
            KeyCode::Char(_) if ctrl => {}
            KeyCode::F(1) => self.mode = Mode::Help,
            KeyCode::Tab => {
                self.view_mode = self.view_mode.toggle();
                self.scroll = 0;
            }
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(PAGE_SCROLL),
            KeyCode::PageDown => {
                let max = self.preview_line_count().saturating_sub(1);
                self.scroll = self.scroll.saturating_add(PAGE_SCROLL).min(max);
            }
            KeyCode::Enter => self.edit(|input| input.insert_char('\n')),
            KeyCode::Backspace => self.edit(|input| {
                input.backspace();
            }),
            KeyCode::Delete => self.edit(|input| {
                input.delete();
            }),
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Up => self.input.move_up(),
            KeyCode::Down => self.input.move_down(),
            KeyCode::Home => self.input.move_home(),
            KeyCode::End => self.input.move_end(),
            KeyCode::Char(c) => self.edit(|input| input.insert_char(c)),
            _ => {}
        }
        KeyResult::Continue
    }

    fn handle_presets_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.preset_idx = self.preset_idx.saturating_sub(1),
            KeyCode::Down => self.preset_idx = (self.preset_idx + 1).min(PRESETS.len() - 1),
            KeyCode::Enter => {
                let preset = &PRESETS[self.preset_idx];
                self.load_preset(preset);
                self.mode = Mode::Normal;
            }
            KeyCode::Esc => self.mode = Mode::Normal,
            _ => {}
        }
    }

    fn handle_export_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                self.export_payload();
                self.mode = Mode::Normal;
            }
            KeyCode::Esc => self.mode = Mode::Normal,
            KeyCode::Backspace => {
                self.export_name.backspace();
            }
            KeyCode::Delete => {
                self.export_name.delete();
            }
            KeyCode::Left => self.export_name.move_left(),
            KeyCode::Right => self.export_name.move_right(),
            KeyCode::Home => self.export_name.move_home(),
            KeyCode::End => self.export_name.move_end(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.export_name.insert_char(c)
            }
            _ => {}
        }
    }

    /// Apply an edit to the input; the preview starts over from the top.
    fn edit(&mut self, f: impl FnOnce(&mut TextInput)) {
        f(&mut self.input);
        self.scroll = 0;
        self.notice = None;
    }

    fn load_preset(&mut self, preset: &Preset) {
        self.input.set_text(preset.body);
        self.scroll = 0;
        self.notice = Some(Notice::info(format!("Loaded example: {}", preset.title)));
    }

    fn cycle_theme(&mut self) {
        self.theme_mode = self.theme_mode.next();
        self.theme = Theme::for_mode(self.theme_mode.resolve());
        self.notice = Some(Notice::info(format!("Theme: {}", self.theme_mode.label())));
    }

    fn copy_payload(&mut self, now: Instant) {
        let decoded = self.decoded();
        let payload = self.view_mode.payload(self.input.text(), &decoded);
        match self.copy.text(payload) {
            Ok(result) => {
                self.copied_at = Some(now);
                self.notice = Some(Notice::info(result.message()));
            }
            Err(e) => {
                self.copied_at = None;
                self.notice = Some(Notice::error(format!("Copy failed: {}", e)));
            }
        }
    }

    fn export_payload(&mut self) {
        let name = match self.export_name.text().trim() {
            "" => self.default_export_name.clone(),
            name => name.to_string(),
        };
        let decoded = self.decoded();
        let payload = self.view_mode.payload(self.input.text(), &decoded);
        self.notice = Some(match self.exporter.export(payload, &name) {
            Ok(result) => Notice::info(result.message()),
            Err(e) => Notice::error(format!("Export failed: {}", e)),
        });
    }

    /// Preview contents for the current view mode.
    pub fn preview_text(&self) -> Text<'static> {
        let decoded = self.decoded();
        match self.view_mode {
            ViewMode::Rendered => {
                let doc = markdown::parse(&decoded);
                if doc.is_empty() {
                    Text::from(Line::from(Span::styled(
                        "Nothing to preview",
                        self.theme.text_secondary_style(),
                    )))
                } else {
                    markdown::to_text(&doc, &self.theme)
                }
            }
            ViewMode::Raw => Text::styled(visible_controls(&decoded), self.theme.text_style()),
        }
    }

    /// Rows the preview takes once wrapped to the pane width.
    fn preview_line_count(&self) -> u16 {
        let text = self.preview_text();
        let rows = match self.preview_width {
            0 => text.lines.len(),
            width => Paragraph::new(text)
                .wrap(Wrap { trim: false })
                .line_count(width),
        };
        u16::try_from(rows).unwrap_or(u16::MAX)
    }
}

/// Viewer bound to a real terminal.
pub struct ViewerApp {
    app: App,
    state: ViewerState,
}

impl ViewerApp {
    pub fn new(state: ViewerState) -> Result<Self> {
        let app = App::new(TICK_RATE)?;
        Ok(Self { app, state })
    }

    /// Event loop; returns when the user quits.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let now = Instant::now();
            self.state.tick(now);
            let state = &self.state;
            let mut preview_area = Rect::default();
            self.app.draw(|frame| {
                preview_area = build_viewer_layout(frame.area()).preview;
                render(frame, state, now);
            })?;
            self.state.set_preview_area(preview_area);

            if let Some(key) = self.app.next_key()? {
                if self.state.handle_key(key, Instant::now()) == KeyResult::Quit {
                    return Ok(());
                }
            }
        }
    }
}

/// Open the viewer on `initial` text.
pub fn run_viewer(initial: &str, config: &Config) -> Result<()> {
    let exporter = config.export.exporter()?;
    let state = ViewerState::new(initial, config, Copy::new(), exporter);
    tracing::info!(chars = initial.chars().count(), "viewer started");
    ViewerApp::new(state)?.run()
}

/// Draw the whole viewer.
/// Public for rendering tests.
pub fn render(frame: &mut Frame, state: &ViewerState, now: Instant) {
    let area = frame.area();
    let layout = build_viewer_layout(area);
    let theme = &state.theme;

    render_header(frame, layout.header, theme);
    render_input(frame, &layout, state);
    render_legend(frame, layout.legend, theme);
    render_preview(frame, layout.preview, state, now);

    let description = Paragraph::new(state.view_mode.description())
        .style(theme.text_secondary_style().add_modifier(Modifier::ITALIC));
    frame.render_widget(description, layout.description);

    match &state.notice {
        Some(notice) if notice.is_error => {
            render_error_line(frame, layout.status, &notice.text, theme)
        }
        Some(notice) => render_status_line(frame, layout.status, &notice.text, theme),
        None => render_status_line(frame, layout.status, &default_status(state), theme),
    }
    render_footer(frame, layout.footer, footer_keys(state.mode), theme);

    match state.mode {
        Mode::Help => render_help_modal(frame, area, theme),
        Mode::Presets => render_presets_modal(frame, area, state.preset_idx, theme),
        Mode::ExportPrompt => render_export_modal(frame, area, &state.export_name, theme),
        Mode::Normal => {}
    }
}

fn render_header(frame: &mut Frame, area: Rect, theme: &Theme) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(TITLE, theme.accent_bold_style())),
        Line::from(Span::styled(TAGLINE, theme.text_secondary_style())),
    ]);
    frame.render_widget(header, area);
}

fn render_input(frame: &mut Frame, layout: &ViewerLayout, state: &ViewerState) {
    let theme = &state.theme;
    let border = if state.mode == Mode::Normal {
        theme.accent_style()
    } else {
        theme.text_secondary_style()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(format!(" Input ({} chars) ", state.input.char_count()));
    let inner = block.inner(layout.input);

    let (row, column) = state.input.cursor_position();
    let v_scroll = row.saturating_sub(inner.height.saturating_sub(1));
    let h_scroll = column.saturating_sub(inner.width.saturating_sub(1));

    let input = Paragraph::new(visible_controls(state.input.text()))
        .style(theme.text_style())
        .block(block)
        .scroll((v_scroll, h_scroll));
    frame.render_widget(input, layout.input);

    if state.mode == Mode::Normal && inner.width > 0 && inner.height > 0 {
        frame.set_cursor_position((inner.x + (column - h_scroll), inner.y + (row - v_scroll)));
    }
}

fn render_legend(frame: &mut Frame, area: Rect, theme: &Theme) {
    let mut spans = vec![Span::styled("Escapes: ", theme.text_secondary_style())];
    for (i, entry) in LEGEND.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(legend_label(entry), theme.code_style()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_preview(frame: &mut Frame, area: Rect, state: &ViewerState, now: Instant) {
    let theme = &state.theme;
    let indicator = if state.is_copied(now) {
        Span::styled(" Copied ✓ ", theme.success_style())
    } else {
        Span::styled(" Copy: Ctrl+Y ", theme.text_secondary_style())
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.text_secondary_style())
        .title(format!(" Preview: {} ", state.view_mode.label()))
        .title_top(Line::from(indicator).right_aligned());

    let preview = Paragraph::new(state.preview_text())
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((state.scroll, 0));
    frame.render_widget(preview, area);
}

fn default_status(state: &ViewerState) -> String {
    format!(
        "View: {} | Theme: {} | {} decoded chars",
        state.view_mode.label(),
        state.theme_mode.label(),
        state.decoded().chars().count()
    )
}

fn footer_keys(mode: Mode) -> &'static [(&'static str, &'static str)] {
    match mode {
        Mode::Normal => &[
            ("Tab", "view"),
            ("Ctrl+Y", "copy"),
            ("Ctrl+S", "save"),
            ("Ctrl+E", "examples"),
            ("Ctrl+T", "theme"),
            ("F1", "help"),
            ("Esc", "quit"),
        ],
        Mode::Presets => &[("\u{2191}\u{2193}", "navigate"), ("Enter", "load"), ("Esc", "cancel")],
        Mode::ExportPrompt => &[("Enter", "save"), ("Esc", "cancel")],
        Mode::Help => &[("any key", "close help")],
    }
}

/// Render the help modal overlay.
pub fn render_help_modal(frame: &mut Frame, area: Rect, theme: &Theme) {
    let modal_area = modal_rect(52, 24, area);
    frame.render_widget(Clear, modal_area);

    let help = Paragraph::new(build_help_text(theme))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent))
                .title(" Help "),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(help, modal_area);
}

fn build_help_text(theme: &Theme) -> Vec<Line<'static>> {
    let key = |k: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<14}", k), Style::default().fg(theme.accent)),
            Span::raw(desc),
        ])
    };
    let heading = |text: &'static str| {
        Line::from(Span::styled(text, Style::default().fg(theme.text_secondary)))
    };

    vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        heading("Editing"),
        key("Arrows", "Move cursor"),
        key("Home/End", "Start/end of line"),
        key("Enter", "New line"),
        key("Ctrl+U", "Clear input"),
        Line::from(""),
        heading("Preview"),
        key("Tab", "Toggle rendered/raw"),
        key("PgUp/PgDn", "Scroll preview"),
        key("Ctrl+T", "Cycle theme"),
        Line::from(""),
        heading("Actions"),
        key("Ctrl+Y", "Copy to clipboard"),
        key("Ctrl+S", "Save as .md file"),
        key("Ctrl+E", "Quick examples"),
        key("F1", "This help"),
        key("Esc/Ctrl+Q", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(theme.text_secondary),
        )),
    ]
}

/// Render the quick examples picker.
pub fn render_presets_modal(frame: &mut Frame, area: Rect, selected: usize, theme: &Theme) {
    let height = (PRESETS.len() * 2 + 2) as u16;
    let modal_area = modal_rect(64, height, area);
    frame.render_widget(Clear, modal_area);

    let mut lines = Vec::with_capacity(PRESETS.len() * 2);
    for (i, preset) in PRESETS.iter().enumerate() {
        let (marker, style) = if i == selected {
            ("> ", theme.accent_bold_style())
        } else {
            ("  ", theme.text_style())
        };
        lines.push(Line::from(Span::styled(
            format!("{}{}", marker, preset.title),
            style,
        )));
        lines.push(Line::from(Span::styled(
            format!("    {}", preset.summary()),
            theme.text_secondary_style(),
        )));
    }

    let menu = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .title(" Quick Examples "),
    );
    frame.render_widget(menu, modal_area);
}

/// Render the export filename prompt.
pub fn render_export_modal(frame: &mut Frame, area: Rect, name: &TextInput, theme: &Theme) {
    let modal_area = modal_rect(50, 5, area);
    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .title(" Save as Markdown ");
    let inner = block.inner(modal_area);

    let lines = vec![
        Line::from(vec![
            Span::styled("Name: ", theme.text_secondary_style()),
            Span::styled(name.text().to_string(), theme.text_style()),
            Span::styled(".md", theme.text_secondary_style()),
        ]),
        Line::from(Span::styled(
            "Existing files are never overwritten",
            theme.text_secondary_style(),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), modal_area);

    let (_, column) = name.cursor_position();
    let x = (inner.x + 6 + column).min(inner.right().saturating_sub(1));
    frame.set_cursor_position((x, inner.y));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::fake::FakeTool;
    use crate::clipboard::CopyMethod;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use tempfile::TempDir;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn state_with(initial: &str, copy: Copy, dir: &TempDir) -> ViewerState {
        let mut config = Config::default();
        config.theme.mode = ThemeMode::Dark;
        ViewerState::new(initial, &config, copy, Exporter::new(dir.path()))
    }

    fn state(initial: &str, dir: &TempDir) -> ViewerState {
        state_with(
            initial,
            Copy::with_tools(vec![Box::new(FakeTool::ok(CopyMethod::Xclip))]),
            dir,
        )
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn draw(state: &ViewerState, now: Instant) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 32)).unwrap();
        terminal.draw(|frame| render(frame, state, now)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn mode_default_is_normal() {
        assert_eq!(Mode::default(), Mode::Normal);
    }

    #[test]
    fn typing_updates_input_and_decoded_text() {
        let dir = TempDir::new().unwrap();
        let mut state = state("", &dir);
        let now = Instant::now();
        for c in "a\\nb".chars() {
            state.handle_key(key(KeyCode::Char(c)), now);
        }

        assert_eq!(state.input(), "a\\nb");
        assert_eq!(state.decoded(), "a\nb");
    }

    #[test]
    fn shifted_characters_are_typed() {
        let dir = TempDir::new().unwrap();
        let mut state = state("", &dir);
        state.handle_key(
            KeyEvent::new(KeyCode::Char('#'), KeyModifiers::SHIFT),
            Instant::now(),
        );
        assert_eq!(state.input(), "#");
    }

    #[test]
    fn esc_and_ctrl_q_quit() {
        let dir = TempDir::new().unwrap();
        let mut state = state("", &dir);
        let now = Instant::now();
        assert_eq!(state.handle_key(key(KeyCode::Esc), now), KeyResult::Quit);
        assert_eq!(state.handle_key(ctrl('q'), now), KeyResult::Quit);
        assert_eq!(
            state.handle_key(key(KeyCode::Char('q')), now),
            KeyResult::Continue
        );
    }

    #[test]
    fn tab_toggles_view_mode() {
        let dir = TempDir::new().unwrap();
        let mut state = state("x", &dir);
        state.handle_key(key(KeyCode::Tab), Instant::now());
        assert_eq!(state.view_mode(), ViewMode::Raw);
        state.handle_key(key(KeyCode::Tab), Instant::now());
        assert_eq!(state.view_mode(), ViewMode::Rendered);
    }

    #[test]
    fn copy_sends_decoded_text_in_rendered_mode() {
        let dir = TempDir::new().unwrap();
        let tool = FakeTool::ok(CopyMethod::Xclip);
        let copied = tool.copied.clone();
        let mut state = state_with("# T\\nbody", Copy::with_tools(vec![Box::new(tool)]), &dir);

        state.handle_key(ctrl('y'), Instant::now());

        assert_eq!(*copied.lock().unwrap(), vec!["# T\nbody".to_string()]);
        assert!(!state.notice().unwrap().is_error);
    }

    #[test]
    fn copy_sends_input_as_typed_in_raw_mode() {
        let dir = TempDir::new().unwrap();
        let tool = FakeTool::ok(CopyMethod::Xclip);
        let copied = tool.copied.clone();
        let mut state = state_with("a\\tb", Copy::with_tools(vec![Box::new(tool)]), &dir);

        state.handle_key(key(KeyCode::Tab), Instant::now());
        state.handle_key(ctrl('y'), Instant::now());

        assert_eq!(*copied.lock().unwrap(), vec!["a\\tb".to_string()]);
    }

    #[test]
    fn copied_indicator_reverts_after_interval() {
        let dir = TempDir::new().unwrap();
        let mut state = state("x", &dir);
        let start = Instant::now();

        state.handle_key(ctrl('y'), start);
        assert!(state.is_copied(start + Duration::from_millis(1999)));
        assert!(!state.is_copied(start + Duration::from_millis(2000)));

        state.tick(start + Duration::from_secs(3));
        assert!(!state.is_copied(start));
    }

    #[test]
    fn copy_failure_is_a_notice_and_keeps_state() {
        let dir = TempDir::new().unwrap();
        let copy = Copy::with_tools(vec![Box::new(FakeTool::failing(
            CopyMethod::Xclip,
            "no display",
        ))]);
        let mut state = state_with("keep\\n", copy, &dir);
        let now = Instant::now();

        state.handle_key(ctrl('y'), now);

        let notice = state.notice().unwrap();
        assert!(notice.is_error);
        assert!(notice.text.contains("no display"));
        assert!(!state.is_copied(now));
        assert_eq!(state.input(), "keep\\n");
    }

    #[test]
    fn export_prompt_writes_markdown_file() {
        let dir = TempDir::new().unwrap();
        let mut state = state("# Hi\\n", &dir);
        let now = Instant::now();

        state.handle_key(ctrl('s'), now);
        assert_eq!(state.mode(), Mode::ExportPrompt);
        for _ in 0.."markdown-content".len() {
            state.handle_key(key(KeyCode::Backspace), now);
        }
        for c in "notes".chars() {
            state.handle_key(key(KeyCode::Char(c)), now);
        }
        state.handle_key(key(KeyCode::Enter), now);

        assert_eq!(state.mode(), Mode::Normal);
        let written = std::fs::read_to_string(dir.path().join("notes.md")).unwrap();
        assert_eq!(written, "# Hi\n");
        assert!(state.notice().unwrap().text.contains("notes.md"));
    }

    #[test]
    fn export_with_empty_name_uses_default() {
        let dir = TempDir::new().unwrap();
        let mut state = state("x", &dir);
        let now = Instant::now();

        state.handle_key(ctrl('s'), now);
        state.handle_key(ctrl('u'), now);
        for _ in 0..40 {
            state.handle_key(key(KeyCode::Backspace), now);
        }
        state.handle_key(key(KeyCode::Enter), now);

        assert!(dir.path().join("markdown-content.md").exists());
    }

    #[test]
    fn export_prompt_escape_cancels() {
        let dir = TempDir::new().unwrap();
        let mut state = state("x", &dir);
        let now = Instant::now();

        state.handle_key(ctrl('s'), now);
        state.handle_key(key(KeyCode::Esc), now);

        assert_eq!(state.mode(), Mode::Normal);
        assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
    }

    #[test]
    fn preset_picker_replaces_input() {
        let dir = TempDir::new().unwrap();
        let mut state = state("old", &dir);
        let now = Instant::now();

        state.handle_key(ctrl('e'), now);
        state.handle_key(key(KeyCode::Down), now);
        state.handle_key(key(KeyCode::Enter), now);

        assert_eq!(state.mode(), Mode::Normal);
        assert_eq!(state.input(), PRESETS[1].body);
        assert_eq!(state.notice().unwrap().text, "Loaded example: Formatting");
    }

    #[test]
    fn preset_selection_is_clamped() {
        let dir = TempDir::new().unwrap();
        let mut state = state("", &dir);
        let now = Instant::now();

        state.handle_key(ctrl('e'), now);
        state.handle_key(key(KeyCode::Up), now);
        for _ in 0..10 {
            state.handle_key(key(KeyCode::Down), now);
        }
        state.handle_key(key(KeyCode::Enter), now);

        assert_eq!(state.input(), PRESETS[PRESETS.len() - 1].body);
    }

    #[test]
    fn ctrl_t_cycles_theme() {
        let dir = TempDir::new().unwrap();
        let mut state = state("", &dir);
        state.handle_key(ctrl('t'), Instant::now());
        assert_eq!(state.theme_mode(), ThemeMode::System);
        state.handle_key(ctrl('t'), Instant::now());
        assert_eq!(state.theme_mode(), ThemeMode::Light);
    }

    #[test]
    fn ctrl_u_clears_input() {
        let dir = TempDir::new().unwrap();
        let mut state = state("abc", &dir);
        state.handle_key(ctrl('u'), Instant::now());
        assert_eq!(state.input(), "");
    }

    #[test]
    fn help_closes_on_any_key() {
        let dir = TempDir::new().unwrap();
        let mut state = state("", &dir);
        state.handle_key(key(KeyCode::F(1)), Instant::now());
        assert_eq!(state.mode(), Mode::Help);
        state.handle_key(key(KeyCode::Char('x')), Instant::now());
        assert_eq!(state.mode(), Mode::Normal);
        assert_eq!(state.input(), "");
    }

    #[test]
    fn page_down_is_clamped_to_preview_length() {
        let dir = TempDir::new().unwrap();
        let mut state = state("one\\n\\ntwo", &dir);
        state.handle_key(key(KeyCode::PageDown), Instant::now());
        assert_eq!(state.scroll(), 2);
        state.handle_key(key(KeyCode::PageUp), Instant::now());
        assert_eq!(state.scroll(), 0);
    }

    #[test]
    fn page_down_scrolls_through_wrapped_paragraph() {
        let dir = TempDir::new().unwrap();
        let mut state = state(&"word ".repeat(200), &dir);
        state.set_preview_area(Rect::new(0, 0, 42, 10));
        let now = Instant::now();

        state.handle_key(key(KeyCode::PageDown), now);
        assert_eq!(state.scroll(), PAGE_SCROLL);

        for _ in 0..10 {
            state.handle_key(key(KeyCode::PageDown), now);
        }
        // 1000 characters at 40 columns wrap to roughly 25 rows
        assert!(state.scroll() >= 20, "scroll {}", state.scroll());
        assert!(state.scroll() < 30, "scroll {}", state.scroll());
    }

    #[test]
    fn render_shows_title_panes_and_preview() {
        let dir = TempDir::new().unwrap();
        let state = state("# Header 1\\n## Header 2", &dir);

        let screen = draw(&state, Instant::now());

        assert!(screen.contains(TITLE));
        assert!(screen.contains("Input (23 chars)"));
        assert!(screen.contains("Preview: Rendered"));
        assert!(screen.contains("Header 1"));
        assert!(screen.contains("Header 2"));
        assert!(screen.contains("Showing rendered Markdown with escaped characters converted"));
        assert!(screen.contains("\\n → newline"));
    }

    #[test]
    fn rendered_preview_cells_hold_no_control_characters() {
        let dir = TempDir::new().unwrap();
        let state = state("zzA\\tB\\rC\\bD\\fE\\vF", &dir);

        let mut terminal = Terminal::new(TestBackend::new(120, 32)).unwrap();
        terminal
            .draw(|frame| render(frame, &state, Instant::now()))
            .unwrap();
        let buffer = terminal.backend().buffer();

        for cell in buffer.content.iter() {
            assert!(
                !cell.symbol().chars().any(char::is_control),
                "control character in cell: {:?}",
                cell.symbol()
            );
        }
        let screen = buffer_text(buffer);
        assert!(screen.contains("zzA    B"));
        assert!(screen.contains("C\u{2408}D"));
    }

    #[test]
    fn render_raw_mode_shows_decoded_text() {
        let dir = TempDir::new().unwrap();
        let mut state = state("# Title\\nline", &dir);
        state.handle_key(key(KeyCode::Tab), Instant::now());

        let screen = draw(&state, Instant::now());

        assert!(screen.contains("Preview: Raw"));
        assert!(screen.contains("Showing raw text with escaped characters converted"));
        // only the preview has the decoded second line at the pane edge
        assert!(screen.contains("│line"));
    }

    #[test]
    fn render_shows_copied_indicator() {
        let dir = TempDir::new().unwrap();
        let mut state = state("x", &dir);
        let now = Instant::now();

        assert!(draw(&state, now).contains("Copy: Ctrl+Y"));
        state.handle_key(ctrl('y'), now);
        assert!(draw(&state, now).contains("Copied ✓"));
        assert!(draw(&state, now + Duration::from_secs(5)).contains("Copy: Ctrl+Y"));
    }

    #[test]
    fn render_empty_input_shows_placeholder() {
        let dir = TempDir::new().unwrap();
        let state = state("", &dir);
        assert!(draw(&state, Instant::now()).contains("Nothing to preview"));
    }

    #[test]
    fn render_modals() {
        let dir = TempDir::new().unwrap();
        let mut state = state("", &dir);
        let now = Instant::now();

        state.handle_key(key(KeyCode::F(1)), now);
        assert!(draw(&state, now).contains("Keyboard Shortcuts"));

        state.handle_key(key(KeyCode::Esc), now);
        state.handle_key(ctrl('e'), now);
        let screen = draw(&state, now);
        assert!(screen.contains("Quick Examples"));
        assert!(screen.contains("> Basic Headers"));

        state.handle_key(key(KeyCode::Esc), now);
        state.handle_key(ctrl('s'), now);
        let screen = draw(&state, now);
        assert!(screen.contains("Save as Markdown"));
        assert!(screen.contains("Name: markdown-content.md"));
    }
}
