use ahash::AHashMap;
use std::path::Path;
use std::sync::Mutex;
use tracing::info;

use crate::error::InsightsError;
use crate::model::{RoundExport, RoundHole, RoundSummary, StoredBreakdown};
use crate::storage::{Storage, StorageError};

/// Read-mostly store over a JSON export. Breakdown write-backs are kept in
/// memory and applied to holes on the next fetch.
pub struct MemoryStorage {
    rounds: Vec<RoundSummary>,
    holes: Vec<RoundHole>,
    breakdowns: Mutex<AHashMap<String, StoredBreakdown>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn from_export(export: &RoundExport) -> Self {
        let rounds = export.rounds.iter().map(|r| r.summary()).collect();
        let holes = export.rounds.iter().flat_map(|r| r.round_holes()).collect();
        Self {
            rounds,
            holes,
            breakdowns: Mutex::new(AHashMap::new()),
        }
    }

    /// # Errors
    /// Returns an error if the file cannot be read or is not a valid export.
    pub fn from_json_file(path: &Path) -> Result<Self, InsightsError> {
        let export = read_export(path)?;
        let storage = Self::from_export(&export);
        info!(
            path = %path.display(),
            rounds = storage.rounds.len(),
            holes = storage.holes.len(),
            "loaded json export"
        );
        Ok(storage)
    }
}

/// Parse a JSON export file.
///
/// # Errors
/// Returns an error if the file cannot be read or does not parse.
pub fn read_export(path: &Path) -> Result<RoundExport, InsightsError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

impl Storage for MemoryStorage {
    fn recent_rounds(
        &self,
        owner_id: &str,
        limit: usize,
    ) -> Result<Vec<RoundSummary>, StorageError> {
        let mut rounds: Vec<RoundSummary> = self
            .rounds
            .iter()
            .filter(|r| r.owner_id == owner_id)
            .cloned()
            .collect();
        rounds.sort_by(|a, b| b.played_at.cmp(&a.played_at).then_with(|| a.id.cmp(&b.id)));
        rounds.truncate(limit);
        Ok(rounds)
    }

    fn holes_for_rounds(&self, round_ids: &[String]) -> Result<Vec<RoundHole>, StorageError> {
        let breakdowns = self
            .breakdowns
            .lock()
            .map_err(|_| StorageError::new("breakdown cache lock poisoned"))?;
        Ok(self
            .holes
            .iter()
            .filter(|h| round_ids.contains(&h.round_id))
            .map(|h| {
                let mut hole = h.clone();
                if let Some(stored) = breakdowns.get(&hole.id) {
                    hole.record.stored = Some(stored.clone());
                }
                hole
            })
            .collect())
    }

    fn store_breakdown(
        &self,
        hole_id: &str,
        breakdown: &StoredBreakdown,
    ) -> Result<(), StorageError> {
        if !self.holes.iter().any(|h| h.id == hole_id) {
            return Err(StorageError::new(format!("hole {hole_id} not found")));
        }
        self.breakdowns
            .lock()
            .map_err(|_| StorageError::new("breakdown cache lock poisoned"))?
            .insert(hole_id.to_string(), breakdown.clone());
        Ok(())
    }
}
