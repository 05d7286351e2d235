use crate::models::{AppState, Focus, ItemId, Question};
use crate::session::QuizSession;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Terminal-side state wrapped around a [`QuizSession`]: which screen is up,
/// where the cursor sits on the page, and how far the page is scrolled.
#[derive(Debug)]
pub struct App {
    pub session: QuizSession,
    pub app_state: AppState,
    pub focus: Focus,
    /// Highlighted row in the test selection panel.
    pub panel_cursor: usize,
    pub scroll_y: u16,
    pub should_quit: bool,
}

impl App {
    pub fn new(session: QuizSession) -> Self {
        Self {
            session,
            app_state: AppState::Quiz,
            focus: Focus::default(),
            panel_cursor: 0,
            scroll_y: 0,
            should_quit: false,
        }
    }

    pub fn focused_question(&self) -> Option<&Question> {
        self.session.current_page_questions().get(self.focus.question)
    }

    fn reset_view(&mut self) {
        self.focus = Focus::default();
        self.scroll_y = 0;
        self.focus_selected_option();
    }

    // Put the option cursor on the recorded answer, if any.
    fn focus_selected_option(&mut self) {
        let index = self.focused_question().and_then(|q| {
            let selected = self.session.selected_option(&q.id)?;
            q.options.iter().position(|o| &o.id == selected)
        });
        self.focus.option = index.unwrap_or(0);
    }

    fn move_question(&mut self, down: bool) {
        let count = self.session.current_page_questions().len();
        let last = count.saturating_sub(1);
        let next = if down {
            (self.focus.question + 1).min(last)
        } else {
            self.focus.question.saturating_sub(1)
        };
        if next != self.focus.question {
            self.focus.question = next;
            self.focus_selected_option();
        }
    }

    fn move_option(&mut self, right: bool) {
        let count = self.focused_question().map_or(0, |q| q.options.len());
        let last = count.saturating_sub(1);
        self.focus.option = if right {
            (self.focus.option + 1).min(last)
        } else {
            self.focus.option.saturating_sub(1)
        };
    }

    fn select_option_at(&mut self, index: usize) {
        let Some((question_id, option_id)) = self.focused_question().and_then(|q| {
            q.options
                .get(index)
                .map(|o| (q.id.clone(), o.id.clone()))
        }) else {
            return;
        };
        if self.session.select_answer(&question_id, &option_id) {
            self.focus.option = index;
        }
    }

    fn open_panel(&mut self) {
        self.panel_cursor = self
            .session
            .catalog()
            .position(self.session.state().active_test())
            .unwrap_or(0);
        self.session.toggle_selection_panel();
    }

    fn view_key(&self) -> (usize, ItemId) {
        (
            self.session.current_page(),
            self.session.state().active_test().clone(),
        )
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match app.app_state {
        AppState::QuitConfirm => handle_quit_confirm_input(app, key),
        AppState::Quiz if app.session.is_selection_open() => handle_panel_input(app, key),
        AppState::Quiz => {
            let before = app.view_key();
            handle_quiz_input(app, key);
            if app.view_key() != before {
                app.reset_view();
            }
        }
    }
}

fn handle_quit_confirm_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') => app.should_quit = true,
        KeyCode::Char('n') | KeyCode::Esc => app.app_state = AppState::Quiz,
        _ => {}
    }
}

fn handle_panel_input(app: &mut App, key: KeyEvent) {
    let test_count = app.session.catalog().len();
    match key.code {
        KeyCode::Up => app.panel_cursor = app.panel_cursor.saturating_sub(1),
        KeyCode::Down => {
            if app.panel_cursor < test_count.saturating_sub(1) {
                app.panel_cursor += 1;
            }
        }
        KeyCode::Enter => {
            let Some(test_id) = app
                .session
                .catalog()
                .tests
                .get(app.panel_cursor)
                .map(|t| t.id.clone())
            else {
                return;
            };
            if app.session.select_test(&test_id).is_ok() {
                app.reset_view();
            }
        }
        KeyCode::Char('t') | KeyCode::Esc => app.session.close_selection_panel(),
        _ => {}
    }
}

fn handle_quiz_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.app_state = AppState::QuitConfirm,
        KeyCode::Up => app.move_question(false),
        KeyCode::Down => app.move_question(true),
        KeyCode::Left => app.move_option(false),
        KeyCode::Right => app.move_option(true),
        KeyCode::Enter | KeyCode::Char(' ') => app.select_option_at(app.focus.option),
        KeyCode::Char(c @ '1'..='9') => app.select_option_at(c as usize - '1' as usize),
        KeyCode::PageDown | KeyCode::Char('n') => app.session.next_page(),
        KeyCode::PageUp | KeyCode::Char('p') => app.session.previous_page(),
        KeyCode::Char('s') => {
            if !app.session.is_submitted() {
                app.session.submit();
            }
        }
        KeyCode::Char('r') => {
            if app.session.is_submitted() {
                app.session.reset();
            }
        }
        KeyCode::Char('t') => app.open_panel(),
        _ => {}
    }
}
