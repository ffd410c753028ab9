//! Calculation result display
//!
//! Renders results as a table (with `tabled`, which handles the wide glyphs
//! in product icons), the best-value line, and price-check anomalies.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::{best_value, CalculationResult, PriceAnomaly};

#[derive(Tabled)]
struct ResultRow {
    #[tabled(rename = "")]
    icon: &'static str,
    #[tabled(rename = "Product")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Per hour of work")]
    quantity: String,
}

/// Format results as a table
pub fn format_results_table(results: &[CalculationResult], settings: &Settings) -> String {
    let rows = results.iter().map(|r| ResultRow {
        icon: r.product.icon.glyph(),
        name: r.product.name.clone(),
        price: format!(
            "{}/{}",
            settings.format_amount(r.product.price),
            r.product.unit.measure()
        )
        .trim_end_matches('/')
        .to_string(),
        quantity: r.quantity_label(),
    });

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    table.to_string()
}

/// Format the full calculation result: wage line, table, best value
pub fn format_results(wage: f64, results: &[CalculationResult], settings: &Settings) -> String {
    if results.is_empty() {
        return "No results.".to_string();
    }

    let mut output = format!(
        "With {} per hour you can buy:\n",
        settings.format_amount(wage)
    );
    output.push_str(&format_results_table(results, settings));
    output.push('\n');

    if let Some(best) = best_value(results) {
        output.push_str(&format!(
            "\nBest value: {} {} ({})\n",
            best.product.icon.glyph(),
            best.product.name,
            best.quantity_label()
        ));
    }

    output
}

/// Format the anomalies reported by a price check
pub fn format_anomalies(anomalies: &[PriceAnomaly], settings: &Settings) -> String {
    if anomalies.is_empty() {
        return "All prices look reasonable.".to_string();
    }

    let mut output = format!("{} price(s) look unusual:\n", anomalies.len());
    for anomaly in anomalies {
        output.push_str(&format!(
            "  - {}: suggested {}\n    {}\n",
            anomaly.product_name,
            settings.format_amount(anomaly.suggested_price),
            anomaly.reason
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{calculate, Product};

    #[test]
    fn test_format_results() {
        let mut products = Product::defaults();
        products[5].price = 0.0;
        let results = calculate(50.0, &products);

        let output = format_results(50.0, &results, &Settings::default());
        assert!(output.starts_with("With ¥50.00 per hour"));
        assert!(output.contains("20.00 jin"));
        assert!(output.contains("∞ (Free!)"));
        assert!(output.contains("Best value: 🌿 Rice (20.00 jin)"));
    }

    #[test]
    fn test_format_anomalies() {
        let settings = Settings::default();
        assert_eq!(format_anomalies(&[], &settings), "All prices look reasonable.");

        let output = format_anomalies(
            &[PriceAnomaly {
                product_name: "Pork".into(),
                suggested_price: 15.0,
                reason: "Ten times the market price".into(),
            }],
            &settings,
        );
        assert!(output.contains("Pork: suggested ¥15.00"));
        assert!(output.contains("Ten times the market price"));
    }
}
