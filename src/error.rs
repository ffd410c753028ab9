//! Custom error types for HourlyBuys
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for HourlyBuys operations
#[derive(Error, Debug)]
pub enum HourlyBuysError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input and data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Attempt to remove one of the built-in products
    #[error("'{0}' is a default product and cannot be removed")]
    ProtectedProduct(String),

    /// The price-check service failed
    #[error("Price check failed: {0}")]
    PriceCheck(String),

    /// The price-check service is overloaded or down
    #[error("Price check service unavailable: {0}")]
    PriceCheckUnavailable(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl HourlyBuysError {
    /// Create a "not found" error for products
    pub fn product_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Product",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for history entries
    pub fn history_entry_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "History entry",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this came from the price-check service
    pub fn is_price_check(&self) -> bool {
        matches!(self, Self::PriceCheck(_) | Self::PriceCheckUnavailable(_))
    }
}

impl From<std::io::Error> for HourlyBuysError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for HourlyBuysError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for HourlyBuys operations
pub type HourlyBuysResult<T> = Result<T, HourlyBuysError>;
