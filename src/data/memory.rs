//! Scripted trivia source used to drive the game without a network.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;

use super::TriviaSource;
use crate::error::FetchError;
use crate::models::{Category, CategoryRecord, Clue};

/// Serves random categories from a script and clues from a fixed table.
///
/// A scripted `None` replies with a 503, and an exhausted script replies with
/// an empty body, so failure paths can be driven deterministically.
#[derive(Default)]
pub struct MemorySource {
    randoms: Mutex<VecDeque<Option<u64>>>,
    categories: HashMap<u64, (Category, Vec<Clue>)>,
    random_calls: Mutex<u32>,
    clue_calls: Mutex<u32>,
    clue_failures: Mutex<u32>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a category and its clues. Each answer becomes one clue with
    /// an id derived from the category id.
    pub fn with_category(mut self, id: u64, title: &str, answers: &[&str]) -> Self {
        let category = Category {
            id,
            title: title.to_string(),
            clue_count: answers.len() as u32,
        };
        let clues = answers
            .iter()
            .enumerate()
            .map(|(index, answer)| Clue {
                id: id * 1000 + index as u64,
                question: Some(format!("{} question {}", title, index + 1)),
                answer: Some((*answer).to_string()),
                value: Some(100 * (index as u32 + 1)),
                category: Some(CategoryRecord {
                    id,
                    title: Some(title.to_string()),
                    clues_count: Some(answers.len() as u32),
                }),
            })
            .collect();
        self.categories.insert(id, (category, clues));
        self
    }

    /// Register raw clue records for a category.
    pub fn with_clues(mut self, category: Category, clues: Vec<Clue>) -> Self {
        self.categories.insert(category.id, (category, clues));
        self
    }

    /// Queue the ids returned by successive random draws.
    pub fn with_random_sequence(self, ids: impl IntoIterator<Item = u64>) -> Self {
        self.randoms
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .extend(ids.into_iter().map(Some));
        self
    }

    /// Queue a failing random draw.
    pub fn with_random_failure(self) -> Self {
        self.randoms
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push_back(None);
        self
    }

    /// Make the next clue fetch fail with a 503.
    pub fn with_clue_failure(self) -> Self {
        *self
            .clue_failures
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) += 1;
        self
    }

    pub fn random_calls(&self) -> u32 {
        *self
            .random_calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn clue_calls(&self) -> u32 {
        *self
            .clue_calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl TriviaSource for MemorySource {
    async fn random_category(&self) -> Result<Category, FetchError> {
        *self
            .random_calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) += 1;

        let next = self
            .randoms
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .pop_front();

        match next {
            Some(Some(id)) => self
                .categories
                .get(&id)
                .map(|(category, _)| category.clone())
                .ok_or(FetchError::Empty),
            Some(None) => Err(FetchError::Status(StatusCode::SERVICE_UNAVAILABLE)),
            None => Err(FetchError::Empty),
        }
    }

    async fn clues_for_category(&self, category_id: u64) -> Result<Vec<Clue>, FetchError> {
        *self
            .clue_calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) += 1;

        {
            let mut failures = self
                .clue_failures
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            if *failures > 0 {
                *failures -= 1;
                return Err(FetchError::Status(StatusCode::SERVICE_UNAVAILABLE));
            }
        }

        Ok(self
            .categories
            .get(&category_id)
            .map(|(_, clues)| clues.clone())
            .unwrap_or_default())
    }
}
