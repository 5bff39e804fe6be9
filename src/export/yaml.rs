//! YAML export of the budget document

use std::io::Write;

use serde_json::Value;

use crate::error::{PlannerError, PlannerResult};
use crate::models::Budget;

/// Write the budget as YAML, preceded by a short comment header
pub fn export_budget_yaml<W: Write>(budget: &Budget, writer: &mut W) -> PlannerResult<()> {
    let header = format!(
        "# Budget planner export\n# Generated: {}\n# Import again with: planner import <file>\n\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M")
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| PlannerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, budget).map_err(|e| PlannerError::Export(e.to_string()))?;

    Ok(())
}

/// Parse YAML text for import
pub fn parse_yaml_document(content: &str) -> PlannerResult<Value> {
    serde_yaml::from_str(content).map_err(|e| PlannerError::Import(format!("Invalid YAML: {}", e)))
}
