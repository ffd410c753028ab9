//! Price sanity check
//!
//! Sends the user's product prices to an external checker (an LLM behind an
//! OpenAI-compatible API) and gets back the prices it considers anomalous,
//! each with a suggested replacement and a reason.

mod llm;
mod prompt;

pub use llm::LlmPriceChecker;
pub use prompt::{build_prompt, parse_anomalies};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::HourlyBuysResult;
use crate::models::{PriceAnomaly, Product};

/// One product as sent to the price checker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceCheckItem {
    pub product_name: String,
    pub unit: String,
    pub current_price: f64,
}

impl From<&Product> for PriceCheckItem {
    fn from(product: &Product) -> Self {
        Self {
            product_name: product.name.clone(),
            unit: product.unit.to_string(),
            current_price: product.price,
        }
    }
}

/// Something that can judge whether prices look wrong
#[async_trait]
pub trait PriceChecker: Send + Sync {
    /// Return the anomalous prices among `items`; an empty list means all fine
    async fn check(&self, items: &[PriceCheckItem]) -> HourlyBuysResult<Vec<PriceAnomaly>>;
}
