//! Configuration module for HourlyBuys
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence
//! - Price-check service configuration

pub mod paths;
pub mod settings;

pub use paths::HourlyBuysPaths;
pub use settings::{PriceCheckSettings, Settings};
