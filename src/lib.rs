pub mod app;
pub mod catalog;
pub mod config;
pub mod logger;
pub mod models;
pub mod session;
pub mod ui;
pub mod utils;

// Re-exports for convenience
pub use app::{handle_key, App};
pub use catalog::{load_catalog, parse_catalog, CatalogError};
pub use config::{Config, ConfigError};
pub use models::{AnswerRecord, AppState, Catalog, Focus, ItemId, Question, QuizOption, Test};
pub use session::{
    reduce, Action, OptionMark, QuizError, QuizSession, Score, SessionState, PAGE_SIZE,
};
pub use ui::{draw, draw_quit_confirmation, draw_quiz, draw_selection_panel};
pub use utils::{truncate_string, wrap_text};
