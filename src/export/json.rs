//! JSON Export functionality
//!
//! Exports the calculation history, together with the current products,
//! session and profile, as a single versioned document.

use crate::error::{HourlyBuysError, HourlyBuysResult};
use crate::models::{HistoryEntry, Product, Session, UserProfile};
use crate::storage::Storage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Calculation history, newest first
    pub history: Vec<HistoryEntry>,

    /// Current product list
    pub products: Vec<Product>,

    pub session: Session,

    pub profile: UserProfile,
}

impl FullExport {
    /// Snapshot everything in storage
    pub fn from_storage(storage: &Storage) -> HourlyBuysResult<Self> {
        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            history: storage.history.get_all()?,
            products: storage.products.get_all()?,
            session: storage.session.get()?,
            profile: storage.profile.get()?,
        })
    }
}

/// Export everything as pretty-printed JSON
pub fn export_full_json<W: Write>(storage: &Storage, writer: &mut W) -> HourlyBuysResult<()> {
    let export = FullExport::from_storage(storage)?;

    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| HourlyBuysError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| HourlyBuysError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::HourlyBuysPaths;
    use crate::models::calculate;
    use tempfile::TempDir;

    #[test]
    fn test_export_full_json() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HourlyBuysPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        let mut products = Product::defaults();
        products[0].price = 0.0;
        let entry = HistoryEntry::new(
            50.0,
            products.clone(),
            calculate(50.0, &products),
            None,
            None,
        );
        storage.history.prepend(entry.clone()).unwrap();

        let mut output = Vec::new();
        export_full_json(&storage, &mut output).unwrap();

        let parsed: FullExport = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(parsed.products.len(), 6);
        assert_eq!(parsed.history, vec![entry]);
        assert!(parsed.history[0].results[0].is_unlimited());
    }
}
