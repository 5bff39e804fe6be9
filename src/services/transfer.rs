//! Import and export of whole budget documents

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::NaiveDate;

use crate::audit::{AuditEntry, EntityType};
use crate::error::{PlannerError, PlannerResult};
use crate::export::{self, DocumentFormat};
use crate::models::{Budget, Money, YearMonth};
use crate::storage::Storage;

/// What an import brought in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub item_count: usize,
    pub income: Money,
    pub month_cursor: YearMonth,
}

/// Service for moving budgets in and out of files
pub struct TransferService<'a> {
    storage: &'a Storage,
}

impl<'a> TransferService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Write the whole budget as JSON or YAML
    pub fn export_document<W: Write>(
        &self,
        format: DocumentFormat,
        writer: &mut W,
    ) -> PlannerResult<()> {
        let budget = self.storage.budget.get()?;
        match format {
            DocumentFormat::Json => export::export_budget_json(&budget, writer, true),
            DocumentFormat::Yaml => export::export_budget_yaml(&budget, writer),
        }
    }

    /// Write the agenda of `month` (the cursor month when `None`) as CSV
    pub fn export_agenda<W: Write>(
        &self,
        month: Option<YearMonth>,
        writer: W,
    ) -> PlannerResult<()> {
        let report = super::BudgetService::new(self.storage).report(month)?;
        export::export_agenda_csv(&report.summary, writer)
    }

    /// Create `path` and export the document into it
    pub fn export_to_file(&self, path: &Path, format: DocumentFormat) -> PlannerResult<()> {
        let mut writer = create_file(path)?;
        self.export_document(format, &mut writer)?;
        writer
            .flush()
            .map_err(|e| PlannerError::Export(e.to_string()))
    }

    /// Create `path` and export a month's agenda into it
    pub fn export_agenda_to_file(
        &self,
        path: &Path,
        month: Option<YearMonth>,
    ) -> PlannerResult<()> {
        let mut writer = create_file(path)?;
        self.export_agenda(month, &mut writer)?;
        writer
            .flush()
            .map_err(|e| PlannerError::Export(e.to_string()))
    }

    /// Replace the budget with the document in `path`
    ///
    /// The format follows the file extension (`.yaml`/`.yml`, else JSON).
    pub fn import_file(&self, path: &Path) -> PlannerResult<ImportSummary> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PlannerError::Import(format!("Failed to read {}: {}", path.display(), e))
        })?;
        self.import_str(
            &content,
            DocumentFormat::from_path(path),
            chrono::Local::now().date_naive(),
        )
    }

    /// Replace the budget with a serialized document
    ///
    /// A document that isn't an object, or whose `items` isn't a list, is
    /// rejected and the current budget stays as it is. Anything else is
    /// coerced field by field.
    pub fn import_str(
        &self,
        content: &str,
        format: DocumentFormat,
        today: NaiveDate,
    ) -> PlannerResult<ImportSummary> {
        let document = format.parse(content)?;
        let imported = Budget::from_document(&document, today)
            .map_err(|e| PlannerError::Import(e.to_string()))?;

        let before = self.storage.budget.get()?;
        self.storage.budget.replace(imported.clone())?;
        self.storage.budget.save()?;

        let summary = ImportSummary {
            item_count: imported.items.len(),
            income: imported.income,
            month_cursor: imported.month_cursor,
        };

        let entry = AuditEntry::update(EntityType::Budget, "budget", None, &before, &imported)
            .with_summary(format!("imported {} items", summary.item_count));
        self.storage.log_entry(&entry)?;

        tracing::info!(items = summary.item_count, "budget imported");
        Ok(summary)
    }
}

fn create_file(path: &Path) -> PlannerResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        PlannerError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}
