//! History service
//!
//! Read access to past calculations plus single and bulk deletion.

use tracing::info;

use crate::audit::EntityType;
use crate::error::{HourlyBuysError, HourlyBuysResult};
use crate::models::{HistoryEntry, HistoryEntryId};
use crate::storage::Storage;

/// Service for the calculation history
pub struct HistoryService<'a> {
    storage: &'a Storage,
}

impl<'a> HistoryService<'a> {
    /// Create a new history service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// All entries, newest first
    pub fn list(&self) -> HourlyBuysResult<Vec<HistoryEntry>> {
        self.storage.history.get_all()
    }

    /// Get an entry by ID
    pub fn get(&self, id: HistoryEntryId) -> HourlyBuysResult<Option<HistoryEntry>> {
        self.storage.history.get(id)
    }

    /// Find an entry by full or short ID, or by 1-based position in the list
    pub fn find(&self, identifier: &str) -> HourlyBuysResult<HistoryEntry> {
        let entries = self.storage.history.get_all()?;

        if let Ok(position) = identifier.parse::<usize>() {
            if let Some(entry) = position.checked_sub(1).and_then(|i| entries.get(i)) {
                return Ok(entry.clone());
            }
        }

        entries
            .into_iter()
            .find(|e| e.id.matches(identifier))
            .ok_or_else(|| HourlyBuysError::history_entry_not_found(identifier))
    }

    /// Delete exactly one entry
    pub fn delete(&self, id: HistoryEntryId) -> HourlyBuysResult<HistoryEntry> {
        let entry = self
            .storage
            .history
            .delete(id)?
            .ok_or_else(|| HourlyBuysError::history_entry_not_found(id.to_string()))?;

        self.storage.history.save()?;
        self.storage
            .log_delete(EntityType::HistoryEntry, entry.id.to_string(), None, &entry)?;

        Ok(entry)
    }

    /// Remove every entry, returning how many were removed
    pub fn clear(&self) -> HourlyBuysResult<usize> {
        let removed = self.storage.history.clear()?;
        self.storage.history.save()?;

        if !removed.is_empty() {
            self.storage.log_delete_batch(
                EntityType::HistoryEntry,
                removed.iter().map(|e| (e.id.to_string(), e)),
            )?;
        }

        info!("Cleared {} history entries", removed.len());
        Ok(removed.len())
    }
}
