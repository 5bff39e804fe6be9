//! Audit logging
//!
//! Every mutation of the budget (item create/update/delete, income and month
//! changes, imports and resets) is appended to `audit.log` with before and
//! after snapshots.
//!
//! - `AuditEntry`: one entry with timestamp, operation, entity and snapshots
//! - `AuditLogger`: JSONL writer/reader for the log file
//! - `generate_diff`: top-level field diff used as the entry summary

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
