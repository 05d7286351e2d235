use crate::app::App;
use crate::session::OptionMark;
use crate::ui::layout::calculate_quiz_chunks;
use crate::ui::selection::draw_selection_panel;
use crate::utils::wrap_text;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn key_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

fn mark_style(mark: OptionMark) -> Style {
    match mark {
        OptionMark::Neutral => Style::default(),
        OptionMark::Selected => Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::BOLD),
        OptionMark::Correct => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        OptionMark::Incorrect => Style::default().fg(Color::Red),
    }
}

fn mark_suffix(mark: OptionMark) -> &'static str {
    match mark {
        OptionMark::Correct => " ✓",
        OptionMark::Incorrect => " ✗",
        _ => "",
    }
}

/// Lines for the current page plus the line range `[start, end)` covered by
/// the focused question.
pub fn build_page_lines(app: &App, width: usize) -> (Vec<Line<'static>>, (usize, usize)) {
    let session = &app.session;
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut focus_range = (0, 0);

    for (row, question) in session.current_page_questions().iter().enumerate() {
        let focused_question = row == app.focus.question;
        let start = lines.len();

        let number = session.page_offset() + row + 1;
        let prompt = format!("{}. {}", number, question.text);
        let question_style = if focused_question {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        for text in wrap_text(&prompt, width) {
            lines.push(Line::from(Span::styled(text, question_style)));
        }

        for (index, option) in question.options.iter().enumerate() {
            let mark = session.option_mark(question, &option.id);
            let pointer = if focused_question && index == app.focus.option {
                ">"
            } else {
                " "
            };
            let bullet = if session.is_selected(&question.id, &option.id) {
                "(•)"
            } else {
                "( )"
            };
            let prefix = format!(" {} {} {}) ", pointer, bullet, index + 1);
            let indent = " ".repeat(prefix.chars().count());
            let body = format!("{}{}", option.text, mark_suffix(mark));

            let mut style = mark_style(mark);
            if focused_question && index == app.focus.option {
                style = style.add_modifier(Modifier::REVERSED);
            }

            let wrapped = wrap_text(&body, width.saturating_sub(indent.len()));
            for (i, text) in wrapped.into_iter().enumerate() {
                let lead = if i == 0 { prefix.clone() } else { indent.clone() };
                lines.push(Line::from(vec![Span::raw(lead), Span::styled(text, style)]));
            }
        }

        if focused_question {
            focus_range = (start, lines.len());
        }
        lines.push(Line::from(""));
    }

    (lines, focus_range)
}

/// Scroll offset that keeps `[start, end)` on screen, moving as little as
/// possible from `current`. When the range is taller than the view its top
/// wins.
pub fn follow_scroll(current: usize, (start, end): (usize, usize), visible: usize) -> usize {
    if visible == 0 {
        return start;
    }
    let mut scroll = current;
    if end > scroll + visible {
        scroll = end - visible;
    }
    if start < scroll {
        scroll = start;
    }
    scroll
}

pub fn draw_quiz(f: &mut Frame, app: &mut App) {
    let layout = calculate_quiz_chunks(f.area());

    let test = app.session.current_test();
    let header_text = format!(
        "{}  ({} / {} answered)",
        test.title,
        app.session.answered_count(),
        test.question_count()
    );
    let header = Paragraph::new(header_text)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let text_width = layout.body_area.width.saturating_sub(2) as usize;
    let visible_height = layout.body_area.height.saturating_sub(2) as usize;
    let (lines, focus_range) = build_page_lines(app, text_width);
    let scroll = follow_scroll(app.scroll_y as usize, focus_range, visible_height);
    app.scroll_y = scroll.min(u16::MAX as usize) as u16;

    let body_title = if app.session.is_submitted() {
        "Review"
    } else {
        "Questions"
    };
    let body = Paragraph::new(lines)
        .scroll((app.scroll_y, 0))
        .block(Block::default().borders(Borders::ALL).title(body_title));
    f.render_widget(body, layout.body_area);

    draw_pagination(f, app, layout.pagination_area);
    draw_result(f, app, layout.result_area);
    draw_help(f, app, layout.help_area);

    if app.session.is_selection_open() {
        draw_selection_panel(f, app);
    }
}

fn draw_pagination(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let enabled = Style::default().add_modifier(Modifier::BOLD);
    let disabled = Style::default().fg(Color::DarkGray);

    let line = Line::from(vec![
        Span::styled(
            "◀ Previous (p)",
            if app.session.has_previous_page() {
                enabled
            } else {
                disabled
            },
        ),
        Span::from(format!(
            "     Page {} of {}     ",
            app.session.current_page() + 1,
            app.session.total_pages()
        )),
        Span::styled(
            "(n) Next ▶",
            if app.session.has_next_page() {
                enabled
            } else {
                disabled
            },
        ),
    ]);

    let pagination = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(pagination, area);
}

fn draw_result(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let line = match app.session.result() {
        Some(score) => Line::from(vec![
            Span::styled(
                format!("Your Score: {}", score),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from("   "),
            Span::styled("r", key_style()),
            Span::from(" Retake Quiz"),
        ]),
        None => Line::from(vec![
            Span::styled("s", key_style()),
            Span::from(format!(
                " Submit Quiz   ({} of {} answered)",
                app.session.answered_count(),
                app.session.current_test().question_count()
            )),
        ]),
    };

    let result = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(result, area);
}

fn draw_help(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let mut spans = vec![
        Span::styled("↑/↓", key_style()),
        Span::from(" Question  "),
    ];
    if !app.session.is_submitted() {
        spans.extend([
            Span::styled("←/→", key_style()),
            Span::from(" Option  "),
            Span::styled("Enter/1-9", key_style()),
            Span::from(" Answer  "),
        ]);
    }
    spans.extend([
        Span::styled("t", key_style()),
        Span::from(" Tests  "),
        Span::styled("Esc", key_style()),
        Span::from(" Quit"),
    ]);

    let help = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}

pub fn draw_quit_confirmation(f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(5)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Quit")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let message = Paragraph::new("Leave the quiz? Answers are not kept.")
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[1]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "y",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Yes (Quit)  "),
        Span::styled(
            "n",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::from(" No (Continue Quiz)  "),
        Span::styled("Ctrl+C", key_style()),
        Span::from(" Exit App"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
