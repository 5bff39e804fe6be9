//! Storage layer for the budget planner
//!
//! One JSON document (`data/budget.json`) with atomic writes and lenient
//! loading, plus the audit log that records every change to it.

pub mod budget;
pub mod file_io;
pub mod init;

pub use budget::{BudgetRepository, LoadOutcome};
pub use file_io::{read_json_value, write_json_atomic};
pub use init::initialize_storage;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::PlannerPaths;
use crate::error::PlannerResult;

/// Storage coordinator: the budget repository and the audit log
pub struct Storage {
    paths: PlannerPaths,
    pub budget: BudgetRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: PlannerPaths) -> PlannerResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            budget: BudgetRepository::new(paths.budget_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    pub fn paths(&self) -> &PlannerPaths {
        &self.paths
    }

    /// Load the budget document
    pub fn load(&self, seed_examples: bool) -> PlannerResult<LoadOutcome> {
        self.budget.load(seed_examples)
    }

    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> PlannerResult<()> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> PlannerResult<()> {
        self.audit.log(&AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
        ))
    }

    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> PlannerResult<()> {
        self.audit
            .log(&AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }

    /// Log a prepared entry (used when the summary is written by hand)
    pub fn log_entry(&self, entry: &AuditEntry) -> PlannerResult<()> {
        self.audit.log(entry)
    }
}
