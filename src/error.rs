//! Error types shared across the quiz.

use std::io;

use thiserror::Error;

/// Failure talking to the trivia service. Always worth retrying.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    #[error("could not reach the trivia service: {0}")]
    Http(#[from] reqwest::Error),
    #[error("trivia service answered with status {0}")]
    Status(reqwest::StatusCode),
    #[error("trivia service sent a response that could not be read: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("trivia service sent no clues")]
    Empty,
}

/// Failure acquiring a category or its questions.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SelectionError {
    #[error("no fresh category found after {attempts} attempts")]
    Exhausted { attempts: u32 },
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl SelectionError {
    /// Transport problems can be retried; running out of fresh categories
    /// ends the current draw.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Fetch(_))
    }
}

/// Failure reading or writing the stored best score.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreError {
    #[error("score file error: {0}")]
    Io(#[from] io::Error),
    #[error("stored best score {value:?} is not a number")]
    Parse { value: String },
}

/// Error type for running the quiz.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    /// Terminal IO failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// The HTTP client could not be built.
    #[error("failed to set up the trivia client: {0}")]
    Client(#[from] reqwest::Error),
    /// The log subscriber could not be installed.
    #[error("failed to set up logging: {0}")]
    Logging(String),
}
