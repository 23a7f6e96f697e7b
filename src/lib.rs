//! # mindfield
//!
//! A terminal trivia game. Questions come from a jService-compatible API one
//! at a time; a wrong answer ends the game and the best score is kept on disk.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mindfield::{Config, Quiz, QuizError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     let quiz = Quiz::from_config(&Config::default())?;
//!     quiz.run().await
//! }
//! ```

mod answer;
mod app;
mod config;
mod data;
mod error;
mod logging;
mod models;
mod session;
pub mod terminal;
mod ui;
pub mod view;

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::info;

pub use answer::{AnswerOutcome, Scoreboard, check_answer, normalize_answer};
pub use app::{App, Screen};
pub use config::{Config, DEFAULT_SCORE_FILE, DEFAULT_TIMEOUT_SECS};
pub use data::{
    DEFAULT_API_URL, FileStore, JServiceClient, MemorySource, MemoryStore, ScoreStore,
    TriviaSource,
};
pub use error::{FetchError, QuizError, SelectionError, StoreError};
pub use models::{Category, CategoryRecord, Clue, Question, strip_html};
pub use session::{DEFAULT_MAX_ATTEMPTS, Session};

const INPUT_POLL: Duration = Duration::from_millis(50);

/// A quiz that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Wrap an already configured app.
    pub fn new(app: App) -> Self {
        Self { app }
    }

    /// Build a quiz against the HTTP API with a file-backed best score.
    ///
    /// Also installs the log file named in `config`, if any.
    pub fn from_config(config: &Config) -> Result<Self, QuizError> {
        logging::init(config.log_file.as_deref())?;

        let source = JServiceClient::new(config.api_url.clone(), config.request_timeout)?;
        let store = FileStore::new(&config.score_file);
        info!(api = %config.api_url, score_file = %config.score_file.display(), "quiz configured");

        let mut app = App::new(Box::new(source), Box::new(store), config.max_attempts);
        if let Some(seed) = config.seed {
            app = app.with_seed(seed);
        }
        Ok(Self::new(app))
    }

    /// Run the quiz in the terminal until the player quits.
    pub async fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app).await;
        terminal::restore(&mut term)?;
        result
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

async fn run_event_loop(
    terminal: &mut terminal::AppTerminal,
    app: &mut App,
) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, &view::render(app)))?;

        // The loading screen is on display while the fetch runs.
        if app.is_loading() {
            app.advance().await;
            continue;
        }

        if !event::poll(INPUT_POLL)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
pub fn handle_input(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match app.screen() {
        Screen::Home { .. } => handle_home_input(app, key.code),
        Screen::Loading => false,
        Screen::Playing { .. } => handle_playing_input(app, key.code),
        Screen::Correct => handle_correct_input(app, key.code),
        Screen::GameOver { .. } => handle_game_over_input(app, key.code),
        Screen::FetchFailed { .. } => handle_fetch_failed_input(app, key.code),
    }
}

fn handle_home_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => {
            app.start_game();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_playing_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char(c) => app.push_char(c),
        KeyCode::Backspace => app.pop_char(),
        KeyCode::Enter => {
            app.submit_answer();
        }
        KeyCode::Esc => app.go_home(),
        _ => {}
    }
    false
}

fn handle_correct_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter | KeyCode::Char('n') | KeyCode::Char('N') => {
            app.next_question();
            false
        }
        KeyCode::Char('e') | KeyCode::Char('E') | KeyCode::Esc => {
            app.go_home();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_game_over_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => {
            app.go_home();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_fetch_failed_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => {
            app.retry();
            false
        }
        KeyCode::Esc => {
            app.go_home();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}
