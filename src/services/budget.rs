//! Budget service
//!
//! Income, the month cursor, resets and the month report.

use chrono::NaiveDate;

use crate::audit::{AuditEntry, EntityType};
use crate::error::{PlannerError, PlannerResult};
use crate::models::{Budget, Money, YearMonth};
use crate::schedule::{MonthBalance, MonthSummary};
use crate::storage::Storage;

/// Everything shown for one month
#[derive(Debug, Clone)]
pub struct MonthReport {
    pub income: Money,
    pub summary: MonthSummary,
    pub balance: MonthBalance,
}

/// Service for budget-wide state
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn income(&self) -> PlannerResult<Money> {
        Ok(self.storage.budget.get()?.income)
    }

    /// Set the monthly income
    pub fn set_income(&self, amount: Money) -> PlannerResult<Money> {
        if amount.is_negative() {
            return Err(PlannerError::Validation(format!(
                "Income cannot be negative: {}",
                amount
            )));
        }

        let before = self.storage.budget.update(|budget| {
            let before = budget.income;
            budget.income = amount;
            Ok(before)
        })?;
        self.storage.budget.save()?;

        self.storage
            .log_update(EntityType::Income, "income", None, &before, &amount)?;

        Ok(amount)
    }

    pub fn month_cursor(&self) -> PlannerResult<YearMonth> {
        Ok(self.storage.budget.get()?.month_cursor)
    }

    /// Point the cursor at `month`
    pub fn set_month(&self, month: YearMonth) -> PlannerResult<YearMonth> {
        let before = self.storage.budget.update(|budget| {
            let before = budget.month_cursor;
            budget.month_cursor = month;
            Ok(before)
        })?;
        self.storage.budget.save()?;

        if before != month {
            self.storage.log_update(
                EntityType::MonthCursor,
                "monthCursor",
                Some(month.long_name()),
                &before,
                &month,
            )?;
        }

        Ok(month)
    }

    pub fn next_month(&self) -> PlannerResult<YearMonth> {
        self.set_month(self.month_cursor()?.next())
    }

    pub fn prev_month(&self) -> PlannerResult<YearMonth> {
        self.set_month(self.month_cursor()?.prev())
    }

    /// Move the cursor to the month containing `today`
    pub fn current_month(&self, today: NaiveDate) -> PlannerResult<YearMonth> {
        self.set_month(YearMonth::from_date(today))
    }

    /// Clear income and items and move the cursor to the month of `today`
    pub fn reset(&self, today: NaiveDate) -> PlannerResult<Budget> {
        let fresh = Budget::empty(YearMonth::from_date(today));
        let before = self.storage.budget.get()?;

        self.storage.budget.replace(fresh.clone())?;
        self.storage.budget.save()?;

        let entry = AuditEntry::update(EntityType::Budget, "budget", None, &before, &fresh)
            .with_summary(format!("reset ({} items removed)", before.items.len()));
        self.storage.log_entry(&entry)?;

        tracing::info!(removed = before.items.len(), "budget reset");
        Ok(fresh)
    }

    /// Aggregate the given month, or the cursor month when `None`
    pub fn report(&self, month: Option<YearMonth>) -> PlannerResult<MonthReport> {
        let budget = self.storage.budget.get()?;
        let month = month.unwrap_or(budget.month_cursor);

        let summary = MonthSummary::aggregate(&budget.items, month);
        let balance = summary.balance(budget.income);

        Ok(MonthReport {
            income: budget.income,
            summary,
            balance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::PlannerPaths;
    use crate::models::{BudgetItem, Frequency, ItemType};
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn month(y: i32, m: u32) -> YearMonth {
        YearMonth::new(y, m).unwrap()
    }

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.budget.load_as_of(false, date(2024, 2, 10)).unwrap();
        (temp_dir, storage)
    }

    fn add_item(storage: &Storage, item: BudgetItem) {
        storage
            .budget
            .update(|b| {
                b.items.push(item);
                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_set_income() {
        let (_temp, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        service.set_income(Money::from_major(2500)).unwrap();
        assert_eq!(service.income().unwrap(), Money::from_major(2500));

        let log = storage.audit().read_all().unwrap();
        assert_eq!(log[0].diff_summary.as_deref(), Some("0 -> 2500"));
    }

    #[test]
    fn test_negative_income_rejected() {
        let (_temp, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        assert!(service
            .set_income(Money::from_major(-1))
            .unwrap_err()
            .is_validation());
        assert_eq!(service.income().unwrap(), Money::zero());
    }

    #[test]
    fn test_month_navigation() {
        let (_temp, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        assert_eq!(service.month_cursor().unwrap(), month(2024, 2));
        assert_eq!(service.next_month().unwrap(), month(2024, 3));
        assert_eq!(service.prev_month().unwrap(), month(2024, 2));
        assert_eq!(service.prev_month().unwrap(), month(2024, 1));
        assert_eq!(service.prev_month().unwrap(), month(2023, 12));
        assert_eq!(service.set_month(month(2025, 6)).unwrap(), month(2025, 6));
        assert_eq!(
            service.current_month(date(2024, 2, 10)).unwrap(),
            month(2024, 2)
        );
    }

    #[test]
    fn test_cursor_is_persisted() {
        let (temp, storage) = create_test_storage();
        BudgetService::new(&storage).set_month(month(2030, 1)).unwrap();

        let reopened =
            Storage::new(PlannerPaths::with_base_dir(temp.path().to_path_buf())).unwrap();
        reopened.budget.load_as_of(true, date(2024, 2, 10)).unwrap();
        assert_eq!(reopened.budget.get().unwrap().month_cursor, month(2030, 1));
    }

    #[test]
    fn test_report_uses_cursor_by_default() {
        let (_temp, storage) = create_test_storage();
        add_item(
            &storage,
            BudgetItem::new(
                "Huur",
                ItemType::Fixed,
                Money::from_major(900),
                Frequency::Monthly,
                date(2024, 1, 1),
            ),
        );
        add_item(
            &storage,
            BudgetItem::new(
                "Vakantie",
                ItemType::Savings,
                Money::from_major(900),
                Frequency::Once,
                date(2024, 7, 1),
            ),
        );
        let service = BudgetService::new(&storage);
        service.set_income(Money::from_major(2000)).unwrap();

        let report = service.report(None).unwrap();
        assert_eq!(report.summary.month, month(2024, 2));
        assert_eq!(report.summary.total(ItemType::Fixed), Money::from_major(900));
        assert_eq!(report.balance.leftover, Money::from_major(1100));

        let july = service.report(Some(month(2024, 7))).unwrap();
        assert_eq!(july.balance.expenses, Money::from_major(1800));
        assert_eq!(july.balance.leftover, Money::from_major(200));
        assert!(july.balance.is_non_negative());
    }

    #[test]
    fn test_reset_clears_everything() {
        let (_temp, storage) = create_test_storage();
        let service = BudgetService::new(&storage);
        service.set_income(Money::from_major(2000)).unwrap();
        service.set_month(month(2026, 1)).unwrap();
        add_item(
            &storage,
            BudgetItem::new(
                "Huur",
                ItemType::Fixed,
                Money::from_major(900),
                Frequency::Monthly,
                date(2024, 1, 1),
            ),
        );

        let fresh = service.reset(date(2024, 5, 20)).unwrap();

        assert_eq!(fresh, storage.budget.get().unwrap());
        assert!(fresh.items.is_empty());
        assert_eq!(fresh.income, Money::zero());
        assert_eq!(fresh.month_cursor, month(2024, 5));

        let last = storage.audit().read_recent(1).unwrap().remove(0);
        assert_eq!(last.entity_type, EntityType::Budget);
        assert_eq!(last.diff_summary.as_deref(), Some("reset (1 items removed)"));
    }
}
