mod memory;
mod sqlite;

pub use memory::{MemoryStorage, read_export};
pub use sqlite::SqliteStorage;

use std::error::Error;
use std::fmt;

use crate::model::{RoundHole, RoundSummary, StoredBreakdown};

#[derive(Debug, Clone)]
pub struct StorageError {
    message: String,
}

impl StorageError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for StorageError {}

impl From<String> for StorageError {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for StorageError {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::new(format!("sqlite: {value}"))
    }
}

/// Where rounds and hole records come from.
///
/// The analytics functions never touch a store; callers fetch through this
/// trait and hand plain records to the engine.
pub trait Storage: Send + Sync {
    /// Up to `limit` rounds for `owner_id`, most recent first.
    ///
    /// # Errors
    /// Returns an error if the backing store cannot be read.
    fn recent_rounds(&self, owner_id: &str, limit: usize)
    -> Result<Vec<RoundSummary>, StorageError>;

    /// Every hole of the given rounds.
    ///
    /// # Errors
    /// Returns an error if the backing store cannot be read.
    fn holes_for_rounds(&self, round_ids: &[String]) -> Result<Vec<RoundHole>, StorageError>;

    /// Cache a computed breakdown on a hole row.
    ///
    /// # Errors
    /// Returns an error if the hole does not exist or the write fails.
    fn store_breakdown(&self, hole_id: &str, breakdown: &StoredBreakdown)
    -> Result<(), StorageError>;
}
