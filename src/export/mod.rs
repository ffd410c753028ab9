//! Export module for HourlyBuys
//!
//! - CSV: one row per history entry and product (spreadsheet-compatible)
//! - JSON: full versioned export of history, products, session and profile
//! - YAML: the same document, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_history_csv;
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
