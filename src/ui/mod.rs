pub mod layout;
mod quiz;
mod selection;

use crate::app::App;
use crate::models::AppState;
use ratatui::Frame;

pub use layout::{calculate_quiz_chunks, selection_panel_area, QuizLayout};
pub use quiz::{build_page_lines, draw_quit_confirmation, draw_quiz, follow_scroll};
pub use selection::draw_selection_panel;

pub fn draw(f: &mut Frame, app: &mut App) {
    match app.app_state {
        AppState::Quiz => draw_quiz(f, app),
        AppState::QuitConfirm => draw_quit_confirmation(f),
    }
}
