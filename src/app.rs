use tracing::{info, warn};

use crate::answer::{AnswerOutcome, check_answer};
use crate::data::{ScoreStore, TriviaSource};
use crate::models::Question;
use crate::session::Session;

/// The screen currently shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Title screen. `notice` explains why a game was cut short.
    Home { notice: Option<String> },
    /// Waiting for the next question to be acquired.
    Loading,
    /// A question is on screen and `input` holds the typed answer.
    Playing { question: Question, input: String },
    Correct,
    GameOver { score: u32, answer: String },
    /// The trivia service could not be reached; the acquisition can be retried.
    FetchFailed { message: String },
}

pub struct App {
    screen: Screen,
    session: Session,
    source: Box<dyn TriviaSource>,
    store: Box<dyn ScoreStore>,
}

impl App {
    /// Create the app, reading the best score from `store`.
    pub fn new(
        source: Box<dyn TriviaSource>,
        store: Box<dyn ScoreStore>,
        max_attempts: u32,
    ) -> Self {
        let best = store.load().unwrap_or_else(|err| {
            warn!(error = %err, "could not read best score, starting from 0");
            0
        });

        Self {
            screen: Screen::Home { notice: None },
            session: Session::new(best, max_attempts),
            source,
            store,
        }
    }

    /// Fix the random seed used to pick questions.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.session = self.session.with_seed(seed);
        self
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn score(&self) -> u32 {
        self.session.scoreboard().current()
    }

    pub fn best_score(&self) -> u32 {
        self.session.scoreboard().best()
    }

    pub fn is_loading(&self) -> bool {
        self.screen == Screen::Loading
    }

    /// Whether keystrokes go into the answer field.
    pub fn is_typing(&self) -> bool {
        matches!(self.screen, Screen::Playing { .. })
    }

    /// Begin a new game from the home screen.
    pub fn start_game(&mut self) {
        if matches!(self.screen, Screen::Home { .. }) {
            info!(best = self.best_score(), "game started");
            self.session.start_game();
            self.screen = Screen::Loading;
        }
    }

    /// Move on after a correct answer.
    pub fn next_question(&mut self) {
        if self.screen == Screen::Correct {
            self.screen = Screen::Loading;
        }
    }

    /// Repeat the acquisition that failed.
    pub fn retry(&mut self) {
        if matches!(self.screen, Screen::FetchFailed { .. }) {
            self.screen = Screen::Loading;
        }
    }

    /// Return to the home screen, dropping the running score.
    pub fn go_home(&mut self) {
        self.show_home(None);
    }

    fn show_home(&mut self, notice: Option<String>) {
        self.session.scoreboard_mut().reset();
        self.screen = Screen::Home { notice };
    }

    /// Resolve the loading screen: take the next unseen question, fetching a
    /// new category when the current one is used up.
    pub async fn advance(&mut self) {
        if !self.is_loading() {
            return;
        }

        if !self.session.has_remaining() {
            if let Err(err) = self.session.acquire_category(self.source.as_ref()).await {
                if err.is_retryable() {
                    warn!(error = %err, "question acquisition failed");
                    self.screen = Screen::FetchFailed {
                        message: err.to_string(),
                    };
                } else {
                    warn!(error = %err, "giving up on this draw");
                    self.show_home(Some(format!("{}. Please start a new game.", err)));
                }
                return;
            }
        }

        self.screen = match self.session.draw_question() {
            Some(question) => Screen::Playing {
                question,
                input: String::new(),
            },
            None => Screen::FetchFailed {
                message: "no questions left to draw".to_string(),
            },
        };
    }

    pub fn push_char(&mut self, ch: char) {
        if let Screen::Playing { input, .. } = &mut self.screen {
            input.push(ch);
        }
    }

    pub fn pop_char(&mut self) {
        if let Screen::Playing { input, .. } = &mut self.screen {
            input.pop();
        }
    }

    /// Check the typed answer. Blank input is ignored and returns `None`.
    pub fn submit_answer(&mut self) -> Option<AnswerOutcome> {
        let Screen::Playing { question, input } = &self.screen else {
            return None;
        };
        if input.trim().is_empty() {
            return None;
        }

        let outcome = check_answer(input, question, self.session.scoreboard_mut());
        let expected = question.answer.clone();

        if outcome.new_best {
            if let Err(err) = self.store.save(outcome.best) {
                warn!(error = %err, "could not save best score");
            }
        }

        self.screen = if outcome.correct {
            Screen::Correct
        } else {
            info!(score = outcome.score, "game over");
            Screen::GameOver {
                score: outcome.score,
                answer: expected,
            }
        };
        Some(outcome)
    }
}
