mod clue;
mod html;
mod question;

pub use clue::{Category, CategoryRecord, Clue};
pub use html::strip_html;
pub use question::Question;
