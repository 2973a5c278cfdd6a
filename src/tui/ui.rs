//! Layout helpers for modal overlays.

use ratatui::layout::Rect;

/// Fixed-size modal centered in `area`, shrunk to leave a 2-cell margin.
pub fn modal_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(4));
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
