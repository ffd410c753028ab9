//! Calculation service
//!
//! Runs a purchasing-power calculation end to end: optional price check,
//! optional adoption of suggested prices, result computation and the history
//! record. A failing price check never blocks the calculation.

use tracing::{info, warn};

use crate::audit::EntityType;
use crate::error::{HourlyBuysError, HourlyBuysResult};
use crate::models::{
    best_value, calculate, CalculationResult, HistoryEntry, PriceAnomaly, Product,
};
use crate::pricecheck::{PriceCheckItem, PriceChecker};
use crate::storage::Storage;

use super::product::ProductService;

/// Per-run switches for a calculation
#[derive(Debug, Clone, Copy)]
pub struct CalculationOptions {
    /// Ask the price checker about the current prices first
    pub check_prices: bool,
    /// Replace flagged prices with the suggested ones before computing
    pub apply_suggestions: bool,
}

impl Default for CalculationOptions {
    fn default() -> Self {
        Self {
            check_prices: true,
            apply_suggestions: false,
        }
    }
}

/// What a calculation produced
#[derive(Debug, Clone)]
pub struct CalculationOutcome {
    /// The history entry that was recorded
    pub entry: HistoryEntry,
    /// Message for the user when the price check could not run
    pub notice: Option<String>,
    /// Products whose price was replaced by a suggestion
    pub applied: Vec<Product>,
}

impl CalculationOutcome {
    /// The result with the largest quantity
    pub fn best_value(&self) -> Option<&CalculationResult> {
        best_value(&self.entry.results)
    }
}

/// User-facing notice for a failed price check
pub fn failure_notice(error: &HourlyBuysError) -> String {
    match error {
        HourlyBuysError::PriceCheckUnavailable(_) => "The AI price checker is temporarily \
            unavailable (it might be overloaded). You can try again in a few moments, or \
            proceed without this check for now."
            .to_string(),
        _ => format!(
            "Failed to perform price sanity check ({}). Proceeding without it.",
            error
        ),
    }
}

/// Service for running calculations
pub struct CalculationService<'a> {
    storage: &'a Storage,
    checker: Option<&'a dyn PriceChecker>,
}

impl<'a> CalculationService<'a> {
    /// Create a calculation service; without a checker, price checks are skipped
    pub fn new(storage: &'a Storage, checker: Option<&'a dyn PriceChecker>) -> Self {
        Self { storage, checker }
    }

    /// Ask the price checker about the current product prices
    pub async fn check_prices(&self) -> HourlyBuysResult<Vec<PriceAnomaly>> {
        let checker = self
            .checker
            .ok_or_else(|| HourlyBuysError::PriceCheck("Price check is not configured".into()))?;

        let items: Vec<PriceCheckItem> = self
            .storage
            .products
            .get_all()?
            .iter()
            .map(PriceCheckItem::from)
            .collect();

        checker.check(&items).await
    }

    /// Run a full calculation and record it in history
    pub async fn run(&self, options: CalculationOptions) -> HourlyBuysResult<CalculationOutcome> {
        let session = self.storage.session.get()?;
        let wage = match session.hourly_wage {
            Some(wage) if self.storage.products.count()? > 0 => wage,
            _ => {
                return Err(HourlyBuysError::Validation(
                    "Hourly wage or product list is not set".into(),
                ));
            }
        };

        let mut notice = None;
        let mut anomalies = None;

        if options.check_prices && self.checker.is_some() {
            match self.check_prices().await {
                Ok(found) => anomalies = Some(found),
                Err(e) => {
                    warn!("Price check failed, continuing without it: {}", e);
                    notice = Some(failure_notice(&e));
                }
            }
        }

        let mut applied = Vec::new();
        if options.apply_suggestions {
            let products = ProductService::new(self.storage);
            for anomaly in anomalies.iter().flatten() {
                if let Some(product) = products.apply_suggestion(anomaly)? {
                    applied.push(product);
                }
            }
        }

        let products = self.storage.products.get_all()?;
        let results = calculate(wage, &products);
        let entry = HistoryEntry::new(wage, products, results, anomalies, session.location);

        self.storage.history.prepend(entry.clone())?;
        self.storage.history.save()?;
        self.storage.log_create(
            EntityType::HistoryEntry,
            entry.id.to_string(),
            None,
            &entry,
        )?;

        info!(
            "Recorded calculation {} for wage {} over {} products",
            entry.id,
            wage,
            entry.products.len()
        );

        Ok(CalculationOutcome {
            entry,
            notice,
            applied,
        })
    }
}
