//! Records as served by the trivia API.

use serde::Deserialize;

/// The category block embedded in every clue record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryRecord {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub clues_count: Option<u32>,
}

/// A single question/answer record.
///
/// The API leaves `question` and `answer` null or empty on some records, so
/// both are optional here and filtered out before play.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Clue {
    pub id: u64,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub value: Option<u32>,
    #[serde(default)]
    pub category: Option<CategoryRecord>,
}

impl Clue {
    /// Whether the clue has both a prompt and an answer worth showing.
    pub fn is_playable(&self) -> bool {
        let filled = |field: &Option<String>| {
            field
                .as_deref()
                .is_some_and(|text| !text.trim().is_empty())
        };
        filled(&self.question) && filled(&self.answer)
    }
}

/// A category of clues, derived from the first record of a random draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: u64,
    pub title: String,
    pub clue_count: u32,
}

impl Category {
    /// Build a category from a clue array. Returns `None` when the array is
    /// empty or its first record carries no category.
    pub fn from_clues(clues: &[Clue]) -> Option<Self> {
        let record = clues.first()?.category.as_ref()?;
        Some(Self {
            id: record.id,
            title: record.title.clone().unwrap_or_default(),
            clue_count: record.clues_count.unwrap_or(0),
        })
    }
}
