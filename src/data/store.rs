//! Persistence for the best score: one textual integer.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::error::StoreError;

pub trait ScoreStore: Send {
    /// Read the stored best score. A store with nothing in it yields 0.
    fn load(&self) -> Result<u32, StoreError>;

    fn save(&mut self, best: u32) -> Result<(), StoreError>;
}

fn parse_score(raw: &str) -> Result<u32, StoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed.parse().map_err(|_| StoreError::Parse {
        value: trimmed.to_string(),
    })
}

/// Keeps the best score in a plain text file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ScoreStore for FileStore {
    fn load(&self) -> Result<u32, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => parse_score(&raw),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(0),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&mut self, best: u32) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, best.to_string())?;
        Ok(())
    }
}

/// Store held in memory. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(raw: &str) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(raw.to_string()))),
        }
    }

    /// The stored text, if anything was written.
    pub fn raw(&self) -> Option<String> {
        self.slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl ScoreStore for MemoryStore {
    fn load(&self) -> Result<u32, StoreError> {
        self.raw().as_deref().map_or(Ok(0), parse_score)
    }

    fn save(&mut self, best: u32) -> Result<(), StoreError> {
        *self
            .slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(best.to_string());
        Ok(())
    }
}
