//! Storage layer for HourlyBuys
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation, plus the audit trail every mutation goes through.

pub mod document;
pub mod file_io;
pub mod history;
pub mod init;
pub mod products;

pub use document::DocumentRepository;
pub use file_io::{json_file_valid, read_json, write_json_atomic};
pub use history::HistoryRepository;
pub use init::initialize_storage;
pub use products::ProductRepository;

use serde::Serialize;

use crate::audit::{generate_diff, AuditEntry, AuditLogger, EntityType};
use crate::config::paths::HourlyBuysPaths;
use crate::error::HourlyBuysError;
use crate::models::{Session, UserProfile};

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: HourlyBuysPaths,
    audit: AuditLogger,
    pub products: ProductRepository,
    pub history: HistoryRepository,
    pub session: DocumentRepository<Session>,
    pub profile: DocumentRepository<UserProfile>,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: HourlyBuysPaths) -> Result<Self, HourlyBuysError> {
        paths.ensure_directories()?;

        Ok(Self {
            audit: AuditLogger::new(paths.audit_log()),
            products: ProductRepository::new(paths.products_file()),
            history: HistoryRepository::new(paths.history_file()),
            session: DocumentRepository::new(paths.session_file()),
            profile: DocumentRepository::new(paths.profile_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &HourlyBuysPaths {
        &self.paths
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), HourlyBuysError> {
        self.products.load()?;
        self.history.load()?;
        self.session.load()?;
        self.profile.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), HourlyBuysError> {
        self.products.save()?;
        self.history.save()?;
        self.session.save()?;
        self.profile.save()?;
        Ok(())
    }

    /// Record a creation in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), HourlyBuysError> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    /// Record an update in the audit log, with a field diff
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> Result<(), HourlyBuysError> {
        let diff = match (serde_json::to_value(before), serde_json::to_value(after)) {
            (Ok(b), Ok(a)) => generate_diff(&b, &a),
            _ => None,
        };
        self.audit.log(&AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff,
        ))
    }

    /// Record a deletion in the audit log
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), HourlyBuysError> {
        self.audit
            .log(&AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }

    /// Record several deletions with a single write
    pub fn log_delete_batch<'a, T, I>(
        &self,
        entity_type: EntityType,
        entities: I,
    ) -> Result<(), HourlyBuysError>
    where
        T: Serialize + 'a,
        I: IntoIterator<Item = (String, &'a T)>,
    {
        let entries: Vec<_> = entities
            .into_iter()
            .map(|(id, entity)| AuditEntry::delete(entity_type, id, None, entity))
            .collect();
        self.audit.log_batch(&entries)
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = HourlyBuysPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_storage_creation() {
        let (temp_dir, storage) = create_test_storage();
        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());
        assert_eq!(storage.products.count().unwrap(), 6);
        assert_eq!(storage.history.count().unwrap(), 0);
    }

    #[test]
    fn test_save_all_writes_every_file() {
        let (_temp_dir, storage) = create_test_storage();
        storage.save_all().unwrap();

        let paths = storage.paths();
        for file in [
            paths.products_file(),
            paths.history_file(),
            paths.session_file(),
            paths.profile_file(),
        ] {
            assert!(json_file_valid(&file), "{} should be valid JSON", file.display());
        }
    }

    #[test]
    fn test_log_update_records_diff() {
        let (_temp_dir, storage) = create_test_storage();
        let before = Session::default();
        let after = Session {
            hourly_wage: Some(42.0),
            location: None,
        };
        storage
            .log_update(EntityType::Session, "session", None, &before, &after)
            .unwrap();

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Update);
        assert_eq!(
            entries[0].diff_summary.as_deref(),
            Some("hourly_wage: null -> 42.0")
        );
    }
}
