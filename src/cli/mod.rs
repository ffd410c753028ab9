//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod calc;
pub mod export;
pub mod history;
pub mod log;
pub mod product;
pub mod profile;
pub mod session;

pub use calc::{handle_calc_command, handle_check_command, CalcArgs, CheckArgs};
pub use export::{handle_export_command, ExportFormat};
pub use history::{handle_history_command, HistoryCommands};
pub use log::{handle_log_command, handle_reset_command};
pub use product::{handle_product_command, ProductCommands};
pub use profile::{handle_profile_command, ProfileCommands};
pub use session::{handle_location_command, handle_wage_command, LocationCommands, WageCommands};
