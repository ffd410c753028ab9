//! Audit logging system for HourlyBuys
//!
//! Records every create, update and delete of products, history entries,
//! the profile and the session in an append-only JSONL log, with before/after
//! values and a short diff for updates.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
