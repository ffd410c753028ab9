//! Service layer for HourlyBuys
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, the price check, and audit logging of every change.

pub mod calculation;
pub mod history;
pub mod product;
pub mod profile;
pub mod reset;
pub mod session;

pub use calculation::{failure_notice, CalculationOptions, CalculationOutcome, CalculationService};
pub use history::HistoryService;
pub use product::{parse_price, ProductService};
pub use profile::ProfileService;
pub use reset::reset_app;
pub use session::{parse_wage, SessionService};
