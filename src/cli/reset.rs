//! Reset command

use std::io::{self, BufRead, Write};

use crate::error::PlannerResult;
use crate::services::BudgetService;
use crate::storage::Storage;

/// Clear income and items after confirmation (skipped with `--yes`)
pub fn handle_reset_command(storage: &Storage, yes: bool) -> PlannerResult<()> {
    if !yes && !confirm("This removes all items and the income. Type 'yes' to continue: ")? {
        println!("Reset cancelled.");
        return Ok(());
    }

    let fresh = BudgetService::new(storage).reset(chrono::Local::now().date_naive())?;
    println!(
        "Budget reset. Selected month: {}",
        fresh.month_cursor.long_name()
    );
    Ok(())
}

fn confirm(prompt: &str) -> PlannerResult<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("yes"))
}
