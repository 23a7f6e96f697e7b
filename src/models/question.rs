use super::{Clue, strip_html};

/// A question ready to be shown to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: u64,
    pub prompt: String,
    /// Expected answer with markup already removed.
    pub answer: String,
    pub category_title: String,
    pub value: Option<u32>,
}

impl From<Clue> for Question {
    fn from(clue: Clue) -> Self {
        let category_title = clue
            .category
            .and_then(|category| category.title)
            .unwrap_or_default();

        Self {
            id: clue.id,
            prompt: clue.question.unwrap_or_default(),
            answer: strip_html(clue.answer.as_deref().unwrap_or_default()),
            category_title,
            value: clue.value,
        }
    }
}
