//! Budget document repository
//!
//! Holds the single `Budget` record and persists it to budget.json.

use std::path::PathBuf;
use std::sync::RwLock;

use chrono::NaiveDate;

use crate::error::{PlannerError, PlannerResult};
use crate::models::{Budget, YearMonth};

use super::file_io::{read_json_value, write_json_atomic};

/// How the in-memory budget came to be after a load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A stored document was read and normalized
    Loaded,
    /// No document existed; a fresh budget was created
    Fresh,
    /// The stored document was unreadable; an empty budget replaced it
    Recovered,
}

/// Repository for the budget document
pub struct BudgetRepository {
    path: PathBuf,
    budget: RwLock<Budget>,
}

impl BudgetRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            budget: RwLock::new(Budget::empty(YearMonth::current())),
        }
    }

    /// Load the document from disk, using the local date as "today"
    pub fn load(&self, seed_examples: bool) -> PlannerResult<LoadOutcome> {
        self.load_as_of(seed_examples, chrono::Local::now().date_naive())
    }

    /// Load the document from disk
    ///
    /// A missing file gives a fresh budget (with example items when
    /// `seed_examples` is set). A file that can't be read as a budget gives
    /// an empty budget and a warning; it is overwritten on the next save.
    pub fn load_as_of(&self, seed_examples: bool, today: NaiveDate) -> PlannerResult<LoadOutcome> {
        let (budget, outcome) = match read_json_value(&self.path) {
            Ok(None) if seed_examples => (Budget::with_examples(today), LoadOutcome::Fresh),
            Ok(None) => (Budget::empty(YearMonth::from_date(today)), LoadOutcome::Fresh),
            Ok(Some(document)) => match Budget::from_document(&document, today) {
                Ok(budget) => (budget, LoadOutcome::Loaded),
                Err(e) => {
                    tracing::warn!(
                        path = %self.path.display(),
                        error = %e,
                        "stored budget is malformed, starting empty"
                    );
                    (Budget::empty(YearMonth::from_date(today)), LoadOutcome::Recovered)
                }
            },
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "stored budget is unreadable, starting empty"
                );
                (Budget::empty(YearMonth::from_date(today)), LoadOutcome::Recovered)
            }
        };

        tracing::debug!(items = budget.items.len(), ?outcome, "budget loaded");

        *self.write_lock()? = budget;
        Ok(outcome)
    }

    /// Write the current budget to disk
    pub fn save(&self) -> PlannerResult<()> {
        let budget = self.read_lock()?;
        write_json_atomic(&self.path, &*budget)
    }

    /// A snapshot of the current budget
    pub fn get(&self) -> PlannerResult<Budget> {
        Ok(self.read_lock()?.clone())
    }

    /// Apply a change to the budget
    ///
    /// The closure works on a copy; the stored budget is only replaced when
    /// it returns `Ok`, so a failed change leaves everything as it was.
    pub fn update<F, R>(&self, change: F) -> PlannerResult<R>
    where
        F: FnOnce(&mut Budget) -> PlannerResult<R>,
    {
        let mut guard = self.write_lock()?;
        let mut working = guard.clone();
        let result = change(&mut working)?;
        *guard = working;
        Ok(result)
    }

    /// Replace the whole budget
    pub fn replace(&self, budget: Budget) -> PlannerResult<()> {
        *self.write_lock()? = budget;
        Ok(())
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn read_lock(&self) -> PlannerResult<std::sync::RwLockReadGuard<'_, Budget>> {
        self.budget
            .read()
            .map_err(|e| PlannerError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_lock(&self) -> PlannerResult<std::sync::RwLockWriteGuard<'_, Budget>> {
        self.budget
            .write()
            .map_err(|e| PlannerError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}
