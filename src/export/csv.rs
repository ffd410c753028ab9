//! CSV Export functionality
//!
//! Flattens the history into one row per entry and product result.

use crate::error::{HourlyBuysError, HourlyBuysResult};
use crate::storage::Storage;
use std::io::Write;

const HEADER: [&str; 10] = [
    "Entry ID",
    "Timestamp",
    "Hourly Wage",
    "Location",
    "Product",
    "Unit",
    "Price",
    "Quantity",
    "Custom",
    "Flagged",
];

/// Export the calculation history to CSV
pub fn export_history_csv<W: Write>(storage: &Storage, writer: W) -> HourlyBuysResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let to_export_error = |e: csv::Error| HourlyBuysError::Export(e.to_string());

    csv_writer.write_record(HEADER).map_err(to_export_error)?;

    for entry in storage.history.get_all()? {
        let timestamp = entry.timestamp.to_rfc3339();
        let wage = format!("{:.2}", entry.hourly_wage);
        let location = entry.location.clone().unwrap_or_default();

        for result in &entry.results {
            let product = &result.product;
            let quantity = if result.is_unlimited() {
                "inf".to_string()
            } else {
                format!("{:.4}", result.quantity_purchasable)
            };
            let flagged = entry
                .anomalies()
                .iter()
                .any(|a| product.matches_name(&a.product_name));

            csv_writer
                .write_record([
                    entry.id.as_uuid().to_string(),
                    timestamp.clone(),
                    wage.clone(),
                    location.clone(),
                    product.name.clone(),
                    product.unit.to_string(),
                    format!("{:.2}", product.price),
                    quantity,
                    product.is_custom.to_string(),
                    flagged.to_string(),
                ])
                .map_err(to_export_error)?;
        }
    }

    csv_writer
        .flush()
        .map_err(|e| HourlyBuysError::Export(e.to_string()))?;

    Ok(())
}
