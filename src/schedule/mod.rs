//! Recurrence expansion and monthly aggregation
//!
//! - `occurrences`: the dates within a month on which one item falls due
//! - `MonthSummary`: totals per type and category plus the month's agenda
//!
//! Both are pure functions of the items and the target month. Nothing here
//! reads the clock; callers pass `today` where it matters.

mod occurrence;
mod summary;

pub use occurrence::occurrences;
pub use summary::{AgendaEvent, CategoryShare, MonthBalance, MonthSummary};
