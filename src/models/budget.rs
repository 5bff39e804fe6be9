//! The budget document
//!
//! `Budget` is the aggregate root: monthly income, the item list and the
//! month currently being viewed. It is persisted as one JSON object with the
//! fields `income`, `items` and `monthCursor`.
//!
//! Documents from disk or from an import are untrusted; `Budget::from_document`
//! coerces every field to a valid value instead of rejecting the whole thing.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ids::ItemId;
use super::item::{BudgetItem, Frequency, ItemType};
use super::money::Money;
use super::month::YearMonth;

/// The persisted budget record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub income: Money,
    pub items: Vec<BudgetItem>,
    pub month_cursor: YearMonth,
}

/// Reasons a document cannot be read as a budget at all
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    NotAnObject,
    ItemsNotAnArray,
}

impl std::fmt::Display for DocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAnObject => write!(f, "document is not an object"),
            Self::ItemsNotAnArray => write!(f, "'items' is missing or not a list"),
        }
    }
}

impl std::error::Error for DocumentError {}

impl Budget {
    /// An empty budget: no income, no items, cursor on `month`
    pub fn empty(month: YearMonth) -> Self {
        Self {
            income: Money::zero(),
            items: Vec::new(),
            month_cursor: month,
        }
    }

    /// A first-run budget with a handful of example items anchored on `today`
    pub fn with_examples(today: NaiveDate) -> Self {
        let mut budget = Self::empty(YearMonth::from_date(today));
        budget.items = vec![
            BudgetItem::new(
                "Huur",
                ItemType::Fixed,
                Money::from_major(900),
                Frequency::Monthly,
                today,
            )
            .with_category("Wonen")
            .with_note("Rond de 1e"),
            BudgetItem::new(
                "Zorgverzekering",
                ItemType::Fixed,
                Money::from_major(140),
                Frequency::Monthly,
                today,
            )
            .with_category("Verzekeringen"),
            BudgetItem::new(
                "Sparen",
                ItemType::Savings,
                Money::from_major(200),
                Frequency::Monthly,
                today,
            )
            .with_category("Spaargeld"),
            BudgetItem::new(
                "Boodschappen",
                ItemType::Optional,
                Money::from_major(75),
                Frequency::Weekly,
                today,
            )
            .with_category("Eten"),
        ];
        budget
    }

    /// Find an item by exact ID
    pub fn item(&self, id: &ItemId) -> Option<&BudgetItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Find an item by exact ID for mutation
    pub fn item_mut(&mut self, id: &ItemId) -> Option<&mut BudgetItem> {
        self.items.iter_mut().find(|i| &i.id == id)
    }

    /// Build a budget from an untrusted JSON document
    ///
    /// Rejects only when the document is not an object or `items` is not an
    /// array. Everything else is coerced: unknown `type`/`frequency` become
    /// `fixed`/`monthly`, missing ids are generated (as are duplicates),
    /// missing or unreadable dates become `today`, `active` is true unless
    /// explicitly `false`, and amounts that do not parse become zero.
    /// Entries of `items` that are not objects are skipped.
    pub fn from_document(value: &Value, today: NaiveDate) -> Result<Self, DocumentError> {
        let obj = value.as_object().ok_or(DocumentError::NotAnObject)?;
        let raw_items = obj
            .get("items")
            .and_then(Value::as_array)
            .ok_or(DocumentError::ItemsNotAnArray)?;

        let income = obj
            .get("income")
            .map(coerce_money)
            .unwrap_or_default()
            .non_negative();

        let month_cursor = obj
            .get("monthCursor")
            .and_then(Value::as_str)
            .and_then(|s| YearMonth::parse(s).ok())
            .unwrap_or_else(|| YearMonth::from_date(today));

        let mut seen = HashSet::new();
        let items = raw_items
            .iter()
            .filter_map(Value::as_object)
            .map(|raw| {
                let mut item = coerce_item(raw, today);
                if !seen.insert(item.id.clone()) {
                    item.id = ItemId::new();
                    seen.insert(item.id.clone());
                }
                item
            })
            .collect();

        Ok(Self {
            income,
            items,
            month_cursor,
        })
    }
}

fn coerce_item(raw: &Map<String, Value>, today: NaiveDate) -> BudgetItem {
    let text = |key: &str| -> String {
        match raw.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        }
    };

    let id = text("id");
    let id = if id.trim().is_empty() {
        ItemId::new()
    } else {
        ItemId::from_string(id)
    };

    let item_type = raw
        .get("type")
        .and_then(Value::as_str)
        .and_then(ItemType::parse)
        .unwrap_or(ItemType::Fixed);

    let frequency = raw
        .get("frequency")
        .and_then(Value::as_str)
        .and_then(Frequency::parse)
        .unwrap_or(Frequency::Monthly);

    let date = raw
        .get("date")
        .and_then(Value::as_str)
        .and_then(parse_anchor_date)
        .unwrap_or(today);

    let active = !matches!(raw.get("active"), Some(Value::Bool(false)));

    let mut item = BudgetItem {
        id,
        name: text("name"),
        item_type,
        category: text("category"),
        amount: raw.get("amount").map(coerce_money).unwrap_or_default(),
        frequency,
        date,
        note: text("note"),
        active,
    };
    item.normalize();
    item
}

/// Read `YYYY-MM-DD`, also accepting a full ISO timestamp
fn parse_anchor_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    let head = s.get(..10).unwrap_or(s);
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

/// Numbers and numeric strings become money; anything else is zero
pub fn coerce_money(value: &Value) -> Money {
    match value {
        Value::Number(n) => n.as_f64().map(Money::from_major_f64).unwrap_or_default(),
        Value::String(s) => Money::parse_or_zero(s),
        _ => Money::zero(),
    }
}
