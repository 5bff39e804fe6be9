//! Export and import commands

use std::path::Path;

use clap::ValueEnum;

use super::parse_optional_month;
use crate::config::settings::Settings;
use crate::error::PlannerResult;
use crate::export::DocumentFormat;
use crate::services::TransferService;
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// The whole budget as JSON
    Json,
    /// The whole budget as YAML
    Yaml,
    /// One month's agenda as CSV
    Csv,
}

impl ExportFormat {
    /// Format implied by a file name when none is given
    fn from_path(path: &Path) -> Self {
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if is_csv {
            return Self::Csv;
        }
        match DocumentFormat::from_path(path) {
            DocumentFormat::Json => Self::Json,
            DocumentFormat::Yaml => Self::Yaml,
        }
    }
}

/// Handle the export command
pub fn handle_export_command(
    storage: &Storage,
    output: &Path,
    format: Option<ExportFormat>,
    month: Option<&str>,
) -> PlannerResult<()> {
    let service = TransferService::new(storage);
    let format = format.unwrap_or_else(|| ExportFormat::from_path(output));

    match format {
        ExportFormat::Json => {
            service.export_to_file(output, DocumentFormat::Json)?;
            println!("Budget exported to: {}", output.display());
        }
        ExportFormat::Yaml => {
            service.export_to_file(output, DocumentFormat::Yaml)?;
            println!("Budget exported to: {}", output.display());
        }
        ExportFormat::Csv => {
            service.export_agenda_to_file(output, parse_optional_month(month)?)?;
            println!("Agenda exported to: {}", output.display());
        }
    }

    Ok(())
}

/// Handle the import command
///
/// Replaces the whole budget with the file's contents.
pub fn handle_import_command(
    storage: &Storage,
    settings: &Settings,
    file: &Path,
) -> PlannerResult<()> {
    let summary = TransferService::new(storage).import_file(file)?;

    println!("Imported {} items from {}", summary.item_count, file.display());
    println!(
        "  Income: {}",
        settings.money_format().format(summary.income)
    );
    println!("  Selected month: {}", summary.month_cursor.long_name());
    Ok(())
}
