//! Answer checking and scorekeeping.

use tracing::{debug, info};

use crate::models::{Question, strip_html};

/// Running score for the current game and the best score ever reached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    current: u32,
    best: u32,
}

impl Scoreboard {
    pub fn new(best: u32) -> Self {
        Self { current: 0, best }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }

    /// Count a correct answer. Returns true when it set a new best.
    pub fn record_correct(&mut self) -> bool {
        self.current += 1;
        if self.current > self.best {
            self.best = self.current;
            return true;
        }
        false
    }
}

/// What happened when an answer was checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub score: u32,
    pub best: u32,
    /// The best score went up and should be persisted.
    pub new_best: bool,
}

/// Reduce an answer to the form answers are compared in.
pub fn normalize_answer(text: &str) -> String {
    strip_html(text).trim().to_lowercase()
}

/// Compare `submitted` with the expected answer and update `scoreboard`.
///
/// Matching is exact apart from case, surrounding whitespace and markup.
pub fn check_answer(
    submitted: &str,
    expected: &Question,
    scoreboard: &mut Scoreboard,
) -> AnswerOutcome {
    let correct = normalize_answer(submitted) == expected.answer.trim().to_lowercase();
    let new_best = correct && scoreboard.record_correct();

    debug!(question = expected.id, correct, "answer checked");
    if new_best {
        info!(best = scoreboard.best(), "new best score");
    }

    AnswerOutcome {
        correct,
        score: scoreboard.current(),
        best: scoreboard.best(),
        new_best,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(answer: &str) -> Question {
        Question {
            id: 1,
            prompt: "Capital of France".to_string(),
            answer: answer.to_string(),
            category_title: "capitals".to_string(),
            value: None,
        }
    }

    #[test]
    fn test_case_insensitive_match() {
        let mut scoreboard = Scoreboard::default();
        let outcome = check_answer("PARIS", &question("Paris"), &mut scoreboard);
        assert!(outcome.correct);
        assert_eq!(outcome.score, 1);
    }

    #[test]
    fn test_trailing_whitespace_is_trimmed() {
        let mut scoreboard = Scoreboard::default();
        assert!(check_answer("paris ", &question("Paris"), &mut scoreboard).correct);
        assert!(check_answer("paris\n", &question("Paris"), &mut scoreboard).correct);
    }

    #[test]
    fn test_partial_answer_is_wrong() {
        let mut scoreboard = Scoreboard::new(4);
        let outcome = check_answer("pari", &question("Paris"), &mut scoreboard);
        assert!(!outcome.correct);
        assert_eq!(outcome.score, 0);
        assert_eq!(outcome.best, 4);
        assert!(!outcome.new_best);
    }

    #[test]
    fn test_markup_in_submission_is_ignored() {
        let mut scoreboard = Scoreboard::default();
        let outcome = check_answer(
            "<b>Tom &amp; Jerry</b>",
            &question("Tom & Jerry"),
            &mut scoreboard,
        );
        assert!(outcome.correct);
    }

    #[test]
    fn test_less_than_sign_must_match_exactly() {
        let mut scoreboard = Scoreboard::default();
        assert!(!check_answer("1", &question("1 < 2"), &mut scoreboard).correct);
        assert!(check_answer("1 < 2", &question("1 < 2"), &mut scoreboard).correct);
        assert_eq!(scoreboard.current(), 1);
    }

    #[test]
    fn test_best_only_moves_up() {
        let mut scoreboard = Scoreboard::new(2);
        assert!(!scoreboard.record_correct());
        assert!(!scoreboard.record_correct());
        assert!(scoreboard.record_correct());
        assert_eq!(scoreboard.best(), 3);

        scoreboard.reset();
        assert_eq!(scoreboard.current(), 0);
        assert_eq!(scoreboard.best(), 3);
        assert!(!scoreboard.record_correct());
    }
}
