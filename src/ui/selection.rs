use crate::app::App;
use crate::ui::layout::selection_panel_area;
use crate::utils::truncate_string;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

pub fn draw_selection_panel(f: &mut Frame, app: &App) {
    let area = selection_panel_area(f.area());
    let title_width = area.width.saturating_sub(4) as usize;
    let active = app.session.state().active_test();

    let items: Vec<ListItem> = app
        .session
        .catalog()
        .tests
        .iter()
        .map(|test| {
            let style = if &test.id == active {
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(truncate_string(&test.title, title_width)).style(style)
        })
        .collect();

    let help = Line::from(vec![
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Select  "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Close"),
    ]);

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title("Select a Test")
                .title_bottom(help),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default().with_selected(Some(app.panel_cursor));

    f.render_widget(Clear, area);
    f.render_stateful_widget(list, area, &mut state);
}
