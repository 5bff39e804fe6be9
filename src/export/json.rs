//! JSON export of the budget document

use std::io::Write;

use serde_json::Value;

use crate::error::{PlannerError, PlannerResult};
use crate::models::Budget;

/// Write the budget as JSON, in the same shape as the stored document
pub fn export_budget_json<W: Write>(
    budget: &Budget,
    writer: &mut W,
    pretty: bool,
) -> PlannerResult<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, budget)
    } else {
        serde_json::to_writer(&mut *writer, budget)
    }
    .map_err(|e| PlannerError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| PlannerError::Export(e.to_string()))?;
    Ok(())
}

/// Parse JSON text for import
pub fn parse_json_document(content: &str) -> PlannerResult<Value> {
    serde_json::from_str(content).map_err(|e| PlannerError::Import(format!("Invalid JSON: {}", e)))
}
