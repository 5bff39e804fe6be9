//! Service layer for the budget planner
//!
//! Business logic on top of the storage layer: validation, persistence after
//! every change and audit logging.

pub mod budget;
pub mod item;
pub mod transfer;

pub use budget::{BudgetService, MonthReport};
pub use item::{ItemChanges, ItemFilter, ItemService, NewItem};
pub use transfer::{ImportSummary, TransferService};
