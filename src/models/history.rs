//! History entry model
//!
//! A snapshot of one completed calculation: the wage, the products and
//! results at that moment, the anomalies flagged by the price check, and the
//! location the user had set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::calculation::CalculationResult;
use super::ids::HistoryEntryId;
use super::product::Product;

/// A price flagged as anomalous by the price-check service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceAnomaly {
    pub product_name: String,
    pub suggested_price: f64,
    pub reason: String,
}

/// One entry in the calculation history. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: HistoryEntryId,

    /// When the calculation was made (UTC)
    pub timestamp: DateTime<Utc>,

    pub hourly_wage: f64,

    /// Products as they were priced at calculation time
    pub products: Vec<Product>,

    pub results: Vec<CalculationResult>,

    /// Anomalies reported by the price check, if it ran
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anomalies: Option<Vec<PriceAnomaly>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl HistoryEntry {
    /// Record a new calculation, stamped with the current time
    pub fn new(
        hourly_wage: f64,
        products: Vec<Product>,
        results: Vec<CalculationResult>,
        anomalies: Option<Vec<PriceAnomaly>>,
        location: Option<String>,
    ) -> Self {
        Self {
            id: HistoryEntryId::new(),
            timestamp: Utc::now(),
            hourly_wage,
            products,
            results,
            anomalies,
            location,
        }
    }

    /// Anomalies as a slice (empty if the check did not run)
    pub fn anomalies(&self) -> &[PriceAnomaly] {
        self.anomalies.as_deref().unwrap_or_default()
    }
}
