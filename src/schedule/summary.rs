//! Month aggregation
//!
//! Expands every item for one month, sums amounts per type and per
//! (type, category), and builds the date-ordered agenda.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::occurrence::occurrences;
use crate::models::{BudgetItem, ItemId, ItemType, Money, YearMonth};

/// One concrete occurrence of an item, as shown in the agenda
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgendaEvent {
    pub item_id: ItemId,
    pub name: String,
    pub item_type: ItemType,
    pub category: String,
    pub amount: Money,
    pub note: String,
    pub date: NaiveDate,
}

impl AgendaEvent {
    fn from_item(item: &BudgetItem, date: NaiveDate) -> Self {
        Self {
            item_id: item.id.clone(),
            name: item.name.clone(),
            item_type: item.item_type,
            category: item.category_or_default().to_string(),
            amount: item.amount,
            note: item.note.clone(),
            date,
        }
    }
}

/// Date first, then name case-insensitively, then item ID
///
/// Names equal up to case put lowercase first (`alpha` before `Alpha`),
/// the way a locale-aware collation orders them.
fn agenda_order(a: &AgendaEvent, b: &AgendaEvent) -> Ordering {
    a.date
        .cmp(&b.date)
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| b.name.cmp(&a.name))
        .then_with(|| a.item_id.cmp(&b.item_id))
}

/// A category's share of its type total
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub amount: Money,
    /// Percentage of the type total (0-100)
    pub percentage: f64,
}

/// Income against the month's expenses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthBalance {
    pub income: Money,
    pub expenses: Money,
    pub leftover: Money,
}

impl MonthBalance {
    pub fn is_non_negative(&self) -> bool {
        !self.leftover.is_negative()
    }
}

/// Totals and agenda for one month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthSummary {
    pub month: YearMonth,
    /// Sum per type; all four types are always present
    pub totals: BTreeMap<ItemType, Money>,
    /// Sum per type, then per category
    pub category_totals: BTreeMap<ItemType, BTreeMap<String, Money>>,
    /// One entry per occurrence, in agenda order
    pub events: Vec<AgendaEvent>,
}

impl MonthSummary {
    /// Aggregate `items` for `month`
    ///
    /// Pure: the same items and month always give the same totals and the
    /// same event order, whatever order the items come in.
    pub fn aggregate(items: &[BudgetItem], month: YearMonth) -> Self {
        let mut totals: BTreeMap<ItemType, Money> =
            ItemType::ALL.iter().map(|t| (*t, Money::zero())).collect();
        let mut category_totals: BTreeMap<ItemType, BTreeMap<String, Money>> = BTreeMap::new();
        let mut events = Vec::new();

        for item in items {
            for date in occurrences(item, month) {
                *totals.entry(item.item_type).or_default() += item.amount;
                *category_totals
                    .entry(item.item_type)
                    .or_default()
                    .entry(item.category_or_default().to_string())
                    .or_default() += item.amount;
                events.push(AgendaEvent::from_item(item, date));
            }
        }

        events.sort_by(agenda_order);

        Self {
            month,
            totals,
            category_totals,
            events,
        }
    }

    /// Total for one type
    pub fn total(&self, item_type: ItemType) -> Money {
        self.totals.get(&item_type).copied().unwrap_or_default()
    }

    /// Total for one (type, category) pair
    pub fn category_total(&self, item_type: ItemType, category: &str) -> Money {
        self.category_totals
            .get(&item_type)
            .and_then(|cats| cats.get(category))
            .copied()
            .unwrap_or_default()
    }

    /// Sum of all four type totals
    pub fn total_expenses(&self) -> Money {
        self.totals.values().copied().sum()
    }

    pub fn balance(&self, income: Money) -> MonthBalance {
        let expenses = self.total_expenses();
        MonthBalance {
            income,
            expenses,
            leftover: income - expenses,
        }
    }

    /// Events on or after `today`, at most `limit` of them
    pub fn upcoming(&self, today: NaiveDate, limit: usize) -> Vec<&AgendaEvent> {
        self.events
            .iter()
            .filter(|e| e.date >= today)
            .take(limit)
            .collect()
    }

    /// Categories of one type with their share of that type's total,
    /// largest first
    pub fn category_breakdown(&self, item_type: ItemType) -> Vec<CategoryShare> {
        let type_total = self.total(item_type);
        let mut shares: Vec<CategoryShare> = self
            .category_totals
            .get(&item_type)
            .map(|cats| {
                cats.iter()
                    .map(|(category, amount)| CategoryShare {
                        category: category.clone(),
                        amount: *amount,
                        percentage: if type_total.is_zero() {
                            0.0
                        } else {
                            amount.cents() as f64 / type_total.cents() as f64 * 100.0
                        },
                    })
                    .collect()
            })
            .unwrap_or_default();

        shares.sort_by(|a, b| {
            b.amount
                .cmp(&a.amount)
                .then_with(|| a.category.cmp(&b.category))
        });
        shares
    }
}
