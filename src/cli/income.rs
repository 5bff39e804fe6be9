//! Income CLI commands

use clap::Subcommand;

use super::parse_amount;
use crate::config::settings::Settings;
use crate::error::PlannerResult;
use crate::services::BudgetService;
use crate::storage::Storage;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Set the monthly income
    Set {
        /// Amount (e.g. "2500" or "2.500,50")
        amount: String,
    },
    /// Show the monthly income and what is left this month
    Show,
}

/// Handle an income command
pub fn handle_income_command(
    storage: &Storage,
    settings: &Settings,
    cmd: IncomeCommands,
) -> PlannerResult<()> {
    let service = BudgetService::new(storage);
    let money = settings.money_format();

    match cmd {
        IncomeCommands::Set { amount } => {
            let income = service.set_income(parse_amount(&amount))?;
            println!("Monthly income set to {}", money.format(income));
        }
        IncomeCommands::Show => {
            let report = service.report(None)?;
            println!("Monthly income: {}", money.format(report.income));
            println!(
                "Left over in {}: {}",
                report.summary.month.long_name(),
                money.format(report.balance.leftover)
            );
        }
    }

    Ok(())
}
