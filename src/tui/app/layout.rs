//! Screen layout for the viewer.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Below this width the input and preview panes are stacked.
pub const SIDE_BY_SIDE_MIN_WIDTH: u16 = 80;

/// Areas of the viewer screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerLayout {
    /// Title and tagline
    pub header: Rect,
    pub input: Rect,
    /// Escape legend under the input pane
    pub legend: Rect,
    pub preview: Rect,
    /// View mode description under the preview pane
    pub description: Rect,
    pub status: Rect,
    pub footer: Rect,
}

/// Split `area` into header, two panes, status line and footer.
pub fn build_viewer_layout(area: Rect) -> ViewerLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(4),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let direction = if area.width >= SIDE_BY_SIDE_MIN_WIDTH {
        Direction::Horizontal
    } else {
        Direction::Vertical
    };
    let panes = Layout::default()
        .direction(direction)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    let (input, legend) = split_caption(panes[0]);
    let (preview, description) = split_caption(panes[1]);

    ViewerLayout {
        header: rows[0],
        input,
        legend,
        preview,
        description,
        status: rows[2],
        footer: rows[3],
    }
}

/// Pane with a one-line caption underneath.
fn split_caption(area: Rect) -> (Rect, Rect) {
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);
    (parts[0], parts[1])
}
