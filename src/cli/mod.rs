//! CLI command handlers
//!
//! Bridges the clap argument parsing with the service layer. Handlers print
//! to stdout; errors propagate to `main`.

pub mod history;
pub mod income;
pub mod item;
pub mod month;
pub mod report;
pub mod reset;
pub mod transfer;

pub use history::handle_history_command;
pub use income::{handle_income_command, IncomeCommands};
pub use item::{handle_item_command, ItemCommands};
pub use month::{handle_month_command, MonthCommands};
pub use report::{handle_agenda_command, handle_breakdown_command, handle_summary_command};
pub use reset::handle_reset_command;
pub use transfer::{handle_export_command, handle_import_command, ExportFormat};

use chrono::NaiveDate;

use crate::error::{PlannerError, PlannerResult};
use crate::models::{Frequency, ItemType, Money, YearMonth};

/// Amount typed by the user; anything that isn't a number counts as zero
pub(crate) fn parse_amount(input: &str) -> Money {
    Money::parse(input).unwrap_or_else(|e| {
        tracing::warn!(input, error = %e, "amount is not a number, using 0");
        Money::zero()
    })
}

pub(crate) fn parse_date(input: &str) -> PlannerResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        PlannerError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD", input))
    })
}

pub(crate) fn parse_month(input: &str) -> PlannerResult<YearMonth> {
    YearMonth::parse(input).map_err(|e| PlannerError::Validation(e.to_string()))
}

pub(crate) fn parse_optional_month(input: Option<&str>) -> PlannerResult<Option<YearMonth>> {
    input.map(parse_month).transpose()
}

pub(crate) fn parse_item_type(input: &str) -> PlannerResult<ItemType> {
    ItemType::parse(input).ok_or_else(|| {
        PlannerError::Validation(format!(
            "Invalid type: '{}'. Valid types: fixed, optional, debt, savings",
            input
        ))
    })
}

pub(crate) fn parse_frequency(input: &str) -> PlannerResult<Frequency> {
    Frequency::parse(input).ok_or_else(|| {
        PlannerError::Validation(format!(
            "Invalid frequency: '{}'. Valid frequencies: monthly, weekly, yearly, once",
            input
        ))
    })
}
