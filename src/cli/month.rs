//! Month cursor CLI commands

use clap::Subcommand;

use super::parse_month;
use crate::error::PlannerResult;
use crate::services::BudgetService;
use crate::storage::Storage;

/// Month subcommands
#[derive(Subcommand)]
pub enum MonthCommands {
    /// Show the selected month
    Show,
    /// Go to the next month
    Next,
    /// Go to the previous month
    Prev,
    /// Select a month
    Set {
        /// Month as YYYY-MM
        month: String,
    },
    /// Go back to the current month
    Today,
}

/// Handle a month command
pub fn handle_month_command(storage: &Storage, cmd: MonthCommands) -> PlannerResult<()> {
    let service = BudgetService::new(storage);

    let month = match cmd {
        MonthCommands::Show => service.month_cursor()?,
        MonthCommands::Next => service.next_month()?,
        MonthCommands::Prev => service.prev_month()?,
        MonthCommands::Set { month } => service.set_month(parse_month(&month)?)?,
        MonthCommands::Today => service.current_month(chrono::Local::now().date_naive())?,
    };

    println!("Selected month: {} ({})", month.long_name(), month);
    Ok(())
}
