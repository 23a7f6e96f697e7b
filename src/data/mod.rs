mod client;
mod memory;
mod store;

pub use client::{JServiceClient, TriviaSource, DEFAULT_API_URL};
pub use memory::MemorySource;
pub use store::{FileStore, MemoryStore, ScoreStore};
