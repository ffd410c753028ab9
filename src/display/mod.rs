//! Display formatting for terminal output
//!
//! Provides utilities for formatting products, calculation results, history
//! and the profile for terminal display.

pub mod calculation;
pub mod history;
pub mod product;
pub mod profile;

pub use calculation::{format_anomalies, format_results, format_results_table};
pub use history::{format_history_details, format_history_list};
pub use product::{format_product_details, format_product_list};
pub use profile::format_profile;
