//! History repository for JSON storage
//!
//! Manages loading and saving calculation history to history.json, newest
//! entry first.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::HourlyBuysError;
use crate::models::{HistoryEntry, HistoryEntryId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct HistoryData {
    entries: Vec<HistoryEntry>,
}

/// Repository for history persistence
pub struct HistoryRepository {
    path: PathBuf,
    data: RwLock<Vec<HistoryEntry>>,
}

impl HistoryRepository {
    /// Create a new history repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Vec<HistoryEntry>>, HourlyBuysError> {
        self.data
            .read()
            .map_err(|e| HourlyBuysError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, Vec<HistoryEntry>>, HourlyBuysError> {
        self.data
            .write()
            .map_err(|e| HourlyBuysError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load history from disk
    pub fn load(&self) -> Result<(), HourlyBuysError> {
        let file_data: HistoryData = read_json(&self.path)?;
        let mut entries = file_data.entries;
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        *self.write()? = entries;
        Ok(())
    }

    /// Save history to disk
    pub fn save(&self) -> Result<(), HourlyBuysError> {
        let file_data = HistoryData {
            entries: self.read()?.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// All entries, newest first
    pub fn get_all(&self) -> Result<Vec<HistoryEntry>, HourlyBuysError> {
        Ok(self.read()?.clone())
    }

    /// Get an entry by ID
    pub fn get(&self, id: HistoryEntryId) -> Result<Option<HistoryEntry>, HourlyBuysError> {
        Ok(self.read()?.iter().find(|e| e.id == id).cloned())
    }

    /// Add an entry at the front
    pub fn prepend(&self, entry: HistoryEntry) -> Result<(), HourlyBuysError> {
        self.write()?.insert(0, entry);
        Ok(())
    }

    /// Delete exactly the entry with this ID
    pub fn delete(&self, id: HistoryEntryId) -> Result<Option<HistoryEntry>, HourlyBuysError> {
        let mut data = self.write()?;
        let index = data.iter().position(|e| e.id == id);
        Ok(index.map(|index| data.remove(index)))
    }

    /// Remove all entries, returning them
    pub fn clear(&self) -> Result<Vec<HistoryEntry>, HourlyBuysError> {
        Ok(std::mem::take(&mut *self.write()?))
    }

    /// Count entries
    pub fn count(&self) -> Result<usize, HourlyBuysError> {
        Ok(self.read()?.len())
    }
}
