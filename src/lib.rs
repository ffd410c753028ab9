//! HourlyBuys - purchasing power in units of everyday products
//!
//! This library provides the core functionality for the HourlyBuys
//! command-line application. Given an hourly wage and a list of product
//! prices, it computes how many units of each product one hour of work buys,
//! keeps a history of calculations, and can ask an LLM to flag prices that
//! look wrong.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (products, results, history, profile)
//! - `storage`: JSON file storage layer
//! - `audit`: Audit logging system
//! - `pricecheck`: LLM-backed price sanity check
//! - `services`: Business logic layer
//! - `export`: CSV, JSON and YAML export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use hourlybuys::config::{HourlyBuysPaths, Settings};
//!
//! let paths = HourlyBuysPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod pricecheck;
pub mod services;
pub mod storage;

pub use error::HourlyBuysError;
