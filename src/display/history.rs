//! History display formatting

use chrono::Local;

use crate::config::Settings;
use crate::models::{best_value, HistoryEntry};

use super::calculation::{format_anomalies, format_results_table};

fn format_timestamp(entry: &HistoryEntry, settings: &Settings) -> String {
    entry
        .timestamp
        .with_timezone(&Local)
        .format(&settings.date_format)
        .to_string()
}

/// Format the history as a numbered list, newest first
pub fn format_history_list(entries: &[HistoryEntry], settings: &Settings) -> String {
    if entries.is_empty() {
        return "No calculations yet. Run `hourlybuys calc` to make one.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>3}  {:<12}  {:<16}  {:>10}  {:>8}  {:<20}  {}\n",
        "#", "ID", "When", "Wage", "Products", "Best value", "Location"
    ));
    output.push_str(&format!(
        "{:->3}  {:-<12}  {:-<16}  {:->10}  {:->8}  {:-<20}  {:-<8}\n",
        "", "", "", "", "", "", ""
    ));

    for (index, entry) in entries.iter().enumerate() {
        let best = best_value(&entry.results)
            .map(|r| r.product.name.clone())
            .unwrap_or_default();
        let flag = if entry.anomalies().is_empty() { "" } else { " !" };

        output.push_str(&format!(
            "{:>3}  {:<12}  {:<16}  {:>10}  {:>8}  {:<20}  {}{}\n",
            index + 1,
            entry.id.to_string(),
            format_timestamp(entry, settings),
            settings.format_amount(entry.hourly_wage),
            entry.products.len(),
            best,
            entry.location.as_deref().unwrap_or("-"),
            flag,
        ));
    }

    output
}

/// Format one history entry in full
pub fn format_history_details(entry: &HistoryEntry, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Calculation {}\n", entry.id));
    output.push_str(&format!("  When:      {}\n", format_timestamp(entry, settings)));
    output.push_str(&format!(
        "  Wage:      {} / hour\n",
        settings.format_amount(entry.hourly_wage)
    ));
    if let Some(location) = &entry.location {
        output.push_str(&format!("  Location:  {}\n", location));
    }
    output.push_str(&format!("  Products:  {}\n", entry.products.len()));

    if entry.anomalies.is_some() {
        output.push('\n');
        output.push_str(&format_anomalies(entry.anomalies(), settings));
        output.push('\n');
    }

    output.push('\n');
    output.push_str(&format_results_table(&entry.results, settings));
    output.push('\n');

    output
}
