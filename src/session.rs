//! Selection state for one play-through.
//!
//! Tracks which categories and questions have been shown and hands out
//! questions that have not been seen yet.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::answer::Scoreboard;
use crate::data::TriviaSource;
use crate::error::SelectionError;
use crate::models::{Category, Clue, Question};

pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

pub struct Session {
    /// Never cleared: a category is only played once per process.
    used_categories: HashSet<u64>,
    used_questions: HashSet<u64>,
    remaining: Vec<Clue>,
    active_category: Option<Category>,
    /// Accepted category whose clues could not be fetched yet.
    pending_category: Option<Category>,
    scoreboard: Scoreboard,
    max_attempts: u32,
    rng: StdRng,
}

impl Session {
    pub fn new(best: u32, max_attempts: u32) -> Self {
        Self {
            used_categories: HashSet::new(),
            used_questions: HashSet::new(),
            remaining: Vec::new(),
            active_category: None,
            pending_category: None,
            scoreboard: Scoreboard::new(best),
            max_attempts: max_attempts.max(1),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Use a fixed seed so question order is reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn scoreboard_mut(&mut self) -> &mut Scoreboard {
        &mut self.scoreboard
    }

    pub fn active_category(&self) -> Option<&Category> {
        self.active_category.as_ref()
    }

    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    pub fn has_remaining(&self) -> bool {
        !self.remaining.is_empty()
    }

    pub fn is_category_used(&self, category_id: u64) -> bool {
        self.used_categories.contains(&category_id)
    }

    pub fn is_question_used(&self, question_id: u64) -> bool {
        self.used_questions.contains(&question_id)
    }

    /// Reset the running score and forget the active category.
    pub fn start_game(&mut self) {
        self.scoreboard.reset();
        self.clear_category();
    }

    fn clear_category(&mut self) {
        self.remaining.clear();
        self.used_questions.clear();
        self.active_category = None;
    }

    /// Draw random categories until one that has not been played turns up.
    ///
    /// Gives up with `SelectionError::Exhausted` after `max_attempts` draws.
    pub async fn draw_category(
        &mut self,
        source: &dyn TriviaSource,
    ) -> Result<Category, SelectionError> {
        for attempt in 1..=self.max_attempts {
            let category = source.random_category().await?;
            if self.used_categories.contains(&category.id) {
                debug!(category = category.id, attempt, "category already played");
                continue;
            }

            info!(category = category.id, title = %category.title, "category drawn");
            self.used_categories.insert(category.id);
            self.clear_category();
            self.active_category = Some(category.clone());
            return Ok(category);
        }

        warn!(attempts = self.max_attempts, "no fresh category");
        Err(SelectionError::Exhausted {
            attempts: self.max_attempts,
        })
    }

    /// Fetch the clues of `category_id` and make the playable ones the
    /// remaining questions. Returns how many were installed.
    pub async fn load_questions(
        &mut self,
        source: &dyn TriviaSource,
        category_id: u64,
    ) -> Result<usize, SelectionError> {
        let clues = source.clues_for_category(category_id).await?;
        let fetched = clues.len();

        self.remaining = clues
            .into_iter()
            .filter(|clue| clue.is_playable() && !self.used_questions.contains(&clue.id))
            .collect();

        debug!(
            category = category_id,
            fetched,
            playable = self.remaining.len(),
            "questions loaded"
        );
        Ok(self.remaining.len())
    }

    /// Draw a fresh category and load its questions, skipping categories
    /// with nothing playable in them.
    ///
    /// When loading the questions fails, the category is kept and the next
    /// call loads it again instead of drawing another one.
    pub async fn acquire_category(
        &mut self,
        source: &dyn TriviaSource,
    ) -> Result<Category, SelectionError> {
        for _ in 0..self.max_attempts {
            let category = match self.pending_category.take() {
                Some(category) => category,
                None => self.draw_category(source).await?,
            };

            match self.load_questions(source, category.id).await {
                Ok(0) => warn!(category = category.id, "category has no playable questions"),
                Ok(_) => {
                    self.active_category = Some(category.clone());
                    return Ok(category);
                }
                Err(err) => {
                    self.pending_category = Some(category);
                    return Err(err);
                }
            }
        }

        Err(SelectionError::Exhausted {
            attempts: self.max_attempts,
        })
    }

    /// Take a random unseen question out of the remaining list.
    ///
    /// Every index, including the last, is equally likely. Returns `None`
    /// once the list is empty; the caller then needs a new category.
    pub fn draw_question(&mut self) -> Option<Question> {
        while !self.remaining.is_empty() {
            let index = self.rng.random_range(0..self.remaining.len());
            let clue = self.remaining.remove(index);

            if !self.used_questions.insert(clue.id) {
                debug!(question = clue.id, "skipping repeated question");
                continue;
            }
            return Some(Question::from(clue));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MemorySource;
    use crate::models::CategoryRecord;

    fn clue(id: u64) -> Clue {
        Clue {
            id,
            question: Some(format!("question {}", id)),
            answer: Some(format!("answer {}", id)),
            value: None,
            category: Some(CategoryRecord {
                id: 1,
                title: Some("numbers".to_string()),
                clues_count: None,
            }),
        }
    }

    fn category(id: u64) -> Category {
        Category {
            id,
            title: "numbers".to_string(),
            clue_count: 0,
        }
    }

    #[test]
    fn test_draw_question_never_repeats() {
        let mut session = Session::new(0, 3).with_seed(7);
        session.remaining = (1..=20).map(clue).collect();

        let mut seen = HashSet::new();
        while let Some(question) = session.draw_question() {
            assert!(seen.insert(question.id));
        }
        assert_eq!(seen.len(), 20);
        assert!(!session.has_remaining());
        assert!(session.draw_question().is_none());
    }

    #[test]
    fn test_single_question_is_drawn() {
        let mut session = Session::new(0, 3).with_seed(1);
        session.remaining = vec![clue(42)];

        assert_eq!(session.draw_question().map(|q| q.id), Some(42));
        assert!(session.draw_question().is_none());
    }

    #[test]
    fn test_last_index_is_reachable() {
        let mut hits_last = false;
        for seed in 0..64 {
            let mut session = Session::new(0, 3).with_seed(seed);
            session.remaining = vec![clue(1), clue(2)];
            if session.draw_question().map(|q| q.id) == Some(2) {
                hits_last = true;
                break;
            }
        }
        assert!(hits_last);
    }

    #[test]
    fn test_duplicate_ids_in_list_are_skipped() {
        let mut session = Session::new(0, 3).with_seed(3);
        session.remaining = vec![clue(5), clue(5), clue(5)];

        assert_eq!(session.draw_question().map(|q| q.id), Some(5));
        assert!(session.draw_question().is_none());
        assert!(session.is_question_used(5));
    }

    #[tokio::test]
    async fn test_draw_category_skips_used_ids() {
        let source = MemorySource::new()
            .with_category(1, "first", &["a"])
            .with_category(2, "second", &["b"])
            .with_random_sequence([1, 1, 2]);
        let mut session = Session::new(0, 5);

        assert_eq!(session.draw_category(&source).await.unwrap().id, 1);
        assert_eq!(session.draw_category(&source).await.unwrap().id, 2);
        assert_eq!(source.random_calls(), 3);
        assert!(session.is_category_used(1));
        assert!(session.is_category_used(2));
    }

    #[tokio::test]
    async fn test_draw_category_is_bounded() {
        let source = MemorySource::new()
            .with_category(1, "only", &["a"])
            .with_random_sequence([1, 1, 1, 1, 1, 1]);
        let mut session = Session::new(0, 3);
        session.used_categories.insert(1);

        let err = session.draw_category(&source).await.unwrap_err();
        assert!(matches!(err, SelectionError::Exhausted { attempts: 3 }));
        assert!(!err.is_retryable());
        assert_eq!(source.random_calls(), 3);
    }

    #[tokio::test]
    async fn test_fetch_failure_is_retryable() {
        let source = MemorySource::new().with_random_failure();
        let mut session = Session::new(0, 3);

        let err = session.draw_category(&source).await.unwrap_err();
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_acquire_skips_empty_categories() {
        let blank = Clue {
            answer: None,
            ..clue(10)
        };
        let source = MemorySource::new()
            .with_clues(category(1), vec![blank])
            .with_category(2, "second", &["b", "c"])
            .with_random_sequence([1, 2]);
        let mut session = Session::new(0, 5);

        let category = session.acquire_category(&source).await.unwrap();
        assert_eq!(category.id, 2);
        assert_eq!(session.remaining(), 2);
        assert_eq!(session.active_category().map(|c| c.id), Some(2));
        assert_eq!(source.random_calls(), 2);
        assert_eq!(source.clue_calls(), 2);
    }

    #[tokio::test]
    async fn test_failed_load_is_retried_for_same_category() {
        let source = MemorySource::new()
            .with_category(1, "first", &["a", "b"])
            .with_category(2, "second", &["c"])
            .with_random_sequence([1, 2])
            .with_clue_failure();
        let mut session = Session::new(0, 5);

        let err = session.acquire_category(&source).await.unwrap_err();
        assert!(err.is_retryable());
        assert!(!session.has_remaining());

        let category = session.acquire_category(&source).await.unwrap();
        assert_eq!(category.id, 1);
        assert_eq!(session.remaining(), 2);
        assert_eq!(source.random_calls(), 1);
        assert_eq!(source.clue_calls(), 2);
    }

    #[tokio::test]
    async fn test_new_category_clears_question_state() {
        let source = MemorySource::new()
            .with_category(1, "first", &["a"])
            .with_category(2, "second", &["b"])
            .with_random_sequence([1, 2]);
        let mut session = Session::new(0, 5);

        session.acquire_category(&source).await.unwrap();
        let first = session.draw_question().unwrap();
        assert!(session.is_question_used(first.id));

        session.acquire_category(&source).await.unwrap();
        assert!(!session.is_question_used(first.id));
        assert_eq!(session.remaining(), 1);
    }
}
