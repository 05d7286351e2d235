use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct QuizLayout {
    pub header_area: Rect,
    pub body_area: Rect,
    pub pagination_area: Rect,
    pub result_area: Rect,
    pub help_area: Rect,
}

pub fn calculate_quiz_chunks(area: Rect) -> QuizLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    QuizLayout {
        header_area: chunks[0],
        body_area: chunks[1],
        pagination_area: chunks[2],
        result_area: chunks[3],
        help_area: chunks[4],
    }
}

/// Left-hand overlay for the test list: full height, about a third of the
/// width, never narrower than 24 columns unless the screen is.
pub fn selection_panel_area(area: Rect) -> Rect {
    let width = (area.width / 3).max(24).min(area.width);
    Rect::new(area.x, area.y, width, area.height)
}
