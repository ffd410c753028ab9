//! Single-document repository
//!
//! Backs the store slots that hold exactly one value (the session and the
//! user profile). A missing file reads as the type's default.

use std::path::PathBuf;
use std::sync::RwLock;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::HourlyBuysError;

use super::file_io::{read_json, write_json_atomic};

/// Repository for one JSON document of type `T`
pub struct DocumentRepository<T> {
    path: PathBuf,
    data: RwLock<T>,
}

impl<T> DocumentRepository<T>
where
    T: Serialize + DeserializeOwned + Default + Clone,
{
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(T::default()),
        }
    }

    /// Load the document from disk
    pub fn load(&self) -> Result<(), HourlyBuysError> {
        let value: T = read_json(&self.path)?;
        self.set(value)
    }

    /// Save the document to disk
    pub fn save(&self) -> Result<(), HourlyBuysError> {
        write_json_atomic(&self.path, &self.get()?)
    }

    /// Current value
    pub fn get(&self) -> Result<T, HourlyBuysError> {
        self.data
            .read()
            .map(|data| data.clone())
            .map_err(|e| HourlyBuysError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    /// Replace the value wholesale
    pub fn set(&self, value: T) -> Result<(), HourlyBuysError> {
        let mut data = self.data.write().map_err(|e| {
            HourlyBuysError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = value;
        Ok(())
    }
}
