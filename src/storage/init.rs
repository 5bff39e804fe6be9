//! Storage initialization
//!
//! First-run setup: directories and a starting budget document.

use chrono::NaiveDate;

use crate::config::paths::PlannerPaths;
use crate::error::PlannerResult;
use crate::models::{Budget, YearMonth};

use super::file_io::write_json_atomic;

/// Initialize storage for a fresh installation
///
/// Writes a starting budget (with example items when `seed_examples` is set)
/// unless one already exists. Returns whether a new document was written.
pub fn initialize_storage(paths: &PlannerPaths, seed_examples: bool) -> PlannerResult<bool> {
    initialize_storage_as_of(paths, seed_examples, chrono::Local::now().date_naive())
}

fn initialize_storage_as_of(
    paths: &PlannerPaths,
    seed_examples: bool,
    today: NaiveDate,
) -> PlannerResult<bool> {
    paths.ensure_directories()?;

    if paths.budget_file().exists() {
        return Ok(false);
    }

    let budget = if seed_examples {
        Budget::with_examples(today)
    } else {
        Budget::empty(YearMonth::from_date(today))
    };
    write_json_atomic(paths.budget_file(), &budget)?;
    tracing::info!(path = %paths.budget_file().display(), "created budget document");

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::storage::read_json_value;
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_initialize_storage() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(!paths.is_initialized());
        assert!(initialize_storage_as_of(&paths, true, today()).unwrap());
        assert!(paths.is_initialized());

        let document = read_json_value(paths.budget_file()).unwrap().unwrap();
        let budget = Budget::from_document(&document, today()).unwrap();
        assert_eq!(budget.items.len(), 4);
        assert_eq!(document["monthCursor"], "2024-03");
    }

    #[test]
    fn test_initialize_without_examples() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_storage_as_of(&paths, false, today()).unwrap();

        let document = read_json_value(paths.budget_file()).unwrap().unwrap();
        assert_eq!(document["items"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_doesnt_overwrite_existing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut custom = Budget::empty(YearMonth::new(2023, 7).unwrap());
        custom.income = Money::from_major(1234);
        write_json_atomic(paths.budget_file(), &custom).unwrap();

        assert!(!initialize_storage_as_of(&paths, true, today()).unwrap());

        let document = read_json_value(paths.budget_file()).unwrap().unwrap();
        assert_eq!(document["income"], 1234);
        assert_eq!(document["monthCursor"], "2023-07");
    }
}
