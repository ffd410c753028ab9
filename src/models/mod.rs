//! Core data models for HourlyBuys
//!
//! This module contains the data structures of the purchasing-power domain:
//! products, calculation results, history entries, the user profile and the
//! current session.

pub mod calculation;
pub mod history;
pub mod ids;
pub mod product;
pub mod profile;
pub mod session;

pub use calculation::{
    best_value, calculate, quantity_purchasable, share_summary, CalculationResult,
};
pub use history::{HistoryEntry, PriceAnomaly};
pub use ids::{HistoryEntryId, ProductId};
pub use product::{Product, ProductIcon, Unit};
pub use profile::{ProfileUpdate, UserProfile};
pub use session::Session;
