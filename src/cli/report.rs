//! Month report commands: dashboard, agenda and category breakdown
//!
//! Each takes an optional `YYYY-MM`; without it the selected month is used.

use super::parse_optional_month;
use crate::config::settings::Settings;
use crate::display::{format_agenda, format_breakdown, format_dashboard};
use crate::error::PlannerResult;
use crate::services::BudgetService;
use crate::storage::Storage;

pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    month: Option<&str>,
) -> PlannerResult<()> {
    let report = BudgetService::new(storage).report(parse_optional_month(month)?)?;
    print!(
        "{}",
        format_dashboard(
            &report,
            chrono::Local::now().date_naive(),
            settings.upcoming_count,
            &settings.money_format(),
        )
    );
    Ok(())
}

pub fn handle_agenda_command(
    storage: &Storage,
    settings: &Settings,
    month: Option<&str>,
) -> PlannerResult<()> {
    let report = BudgetService::new(storage).report(parse_optional_month(month)?)?;
    print!("{}", format_agenda(&report.summary, &settings.money_format()));
    Ok(())
}

pub fn handle_breakdown_command(
    storage: &Storage,
    settings: &Settings,
    month: Option<&str>,
) -> PlannerResult<()> {
    let report = BudgetService::new(storage).report(parse_optional_month(month)?)?;
    print!(
        "{}",
        format_breakdown(&report.summary, &settings.money_format())
    );
    Ok(())
}
