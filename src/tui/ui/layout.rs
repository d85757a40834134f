use ratatui::layout::Constraint;
use ratatui::prelude::{Direction, Layout, Rect};

/// Area inside a one-cell border.
pub(super) fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

pub(super) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    let area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1]);
    area[1]
}

/// `n` equal columns with a one-cell gutter between them.
pub(super) fn card_slots(area: Rect, n: u16) -> Vec<Rect> {
    let gutter = 1;
    let width = area.width.saturating_sub(gutter * n.saturating_sub(1)) / n.max(1);
    let mut constraints = Vec::with_capacity(usize::from(n) * 2);
    for i in 0..n {
        if i > 0 {
            constraints.push(Constraint::Length(gutter));
        }
        constraints.push(Constraint::Length(width));
    }
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area)
        .iter()
        .step_by(2)
        .copied()
        .collect()
}

/// Shrink `area` horizontally around its centre to `percent` of its width.
pub(super) fn squeeze(area: Rect, percent: u8) -> Rect {
    let width = (u32::from(area.width) * u32::from(percent.min(100)) / 100) as u16;
    let width = width.max(2).min(area.width);
    Rect { x: area.x + (area.width - width) / 2, width, ..area }
}
