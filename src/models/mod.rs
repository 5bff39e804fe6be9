//! Core data models for the budget planner
//!
//! This module contains the data structures of the budgeting domain: the
//! budget document, its items, money amounts and calendar months.

pub mod budget;
pub mod ids;
pub mod item;
pub mod money;
pub mod month;

pub use budget::{Budget, DocumentError};
pub use ids::ItemId;
pub use item::{BudgetItem, Frequency, ItemType, DEFAULT_CATEGORY, DEFAULT_NAME};
pub use money::{Money, MoneyFormat, MoneyParseError};
pub use month::{MonthParseError, YearMonth};
