use std::path::PathBuf;
use std::time::Duration;

use crate::data::DEFAULT_API_URL;
use crate::session::DEFAULT_MAX_ATTEMPTS;

pub const DEFAULT_SCORE_FILE: &str = "mindfield_high_score";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Settings for a quiz run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the jService-compatible API.
    pub api_url: String,
    /// File holding the best score.
    pub score_file: PathBuf,
    /// Random draws allowed when looking for an unplayed category.
    pub max_attempts: u32,
    pub request_timeout: Duration,
    /// Where to write logs. The terminal is taken by the UI, so logging is
    /// off without one.
    pub log_file: Option<PathBuf>,
    /// Seed for question order.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            score_file: PathBuf::from(DEFAULT_SCORE_FILE),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_file: None,
            seed: None,
        }
    }
}
