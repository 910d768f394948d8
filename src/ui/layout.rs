use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Header, body, pagination bar and footer, top to bottom.
pub struct Regions {
    pub header: Rect,
    pub body: Rect,
    pub pager: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect, with_pager: bool) -> Regions {
    let pager_height = if with_pager { 4 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(pager_height),
            Constraint::Length(3),
        ])
        .split(area);
    Regions {
        header: chunks[0],
        body: chunks[1],
        pager: chunks[2],
        footer: chunks[3],
    }
}

pub fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let height = height.min(area.height);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
