use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use paged_quiz::{handle_key, load_catalog, logger, ui, App, Config, QuizSession};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::error::Error;
use std::io;
use std::sync::Arc;

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::from_env_and_args()?;
    if let Some(log_path) = &config.log_path {
        logger::init(log_path);
    }

    // Fail before touching the terminal so the error stays readable.
    let catalog = load_catalog(&config.catalog_path)?;
    let session = QuizSession::new(Arc::new(catalog))?;
    let mut app = App::new(session);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        logger::log(&format!("Terminal loop failed: {}", e));
    }
    result?;
    Ok(())
}

fn run<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    logger::log("Quiz started");
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            handle_key(app, key);
        }

        if app.should_quit {
            logger::log("Quiz closed");
            return Ok(());
        }
    }
}
