//! Budget item model
//!
//! A budget item is a single recurring or one-off cost, debt payment or
//! savings contribution, anchored on a calendar date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ItemId;
use super::money::Money;

/// Category used when an item has none
pub const DEFAULT_CATEGORY: &str = "Overig";

/// Name used when an item is saved without one
pub const DEFAULT_NAME: &str = "Naamloos";

/// Kind of budget item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    #[default]
    Fixed,
    Optional,
    Debt,
    Savings,
}

impl ItemType {
    pub const ALL: [ItemType; 4] = [
        ItemType::Fixed,
        ItemType::Optional,
        ItemType::Debt,
        ItemType::Savings,
    ];

    /// Wire name, as stored in the budget document
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Optional => "optional",
            Self::Debt => "debt",
            Self::Savings => "savings",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fixed => "Vaste lasten",
            Self::Optional => "Optioneel",
            Self::Debt => "Schulden",
            Self::Savings => "Spaargeld",
        }
    }

    /// Parse a wire name or English alias (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "fixed" => Some(Self::Fixed),
            "optional" => Some(Self::Optional),
            "debt" => Some(Self::Debt),
            "savings" | "saving" => Some(Self::Savings),
            _ => None,
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How often an item recurs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Monthly,
    Weekly,
    Yearly,
    Once,
}

impl Frequency {
    pub const ALL: [Frequency; 4] = [
        Frequency::Monthly,
        Frequency::Weekly,
        Frequency::Yearly,
        Frequency::Once,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Weekly => "weekly",
            Self::Yearly => "yearly",
            Self::Once => "once",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Monthly => "Maandelijks",
            Self::Weekly => "Wekelijks",
            Self::Yearly => "Jaarlijks",
            Self::Once => "Eenmalig",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "monthly" => Some(Self::Monthly),
            "weekly" => Some(Self::Weekly),
            "yearly" | "annual" => Some(Self::Yearly),
            "once" | "one-time" => Some(Self::Once),
            _ => None,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A budget item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetItem {
    pub id: ItemId,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub category: String,
    pub amount: Money,
    pub frequency: Frequency,
    /// Anchor date: the reference occurrence recurrence is computed from
    pub date: NaiveDate,
    #[serde(default)]
    pub note: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl BudgetItem {
    /// Create a new active item with a fresh ID
    pub fn new(
        name: impl Into<String>,
        item_type: ItemType,
        amount: Money,
        frequency: Frequency,
        date: NaiveDate,
    ) -> Self {
        let mut item = Self {
            id: ItemId::new(),
            name: name.into(),
            item_type,
            category: String::new(),
            amount,
            frequency,
            date,
            note: String::new(),
            active: true,
        };
        item.normalize();
        item
    }

    /// Builder-style category setter
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self.normalize();
        self
    }

    /// Builder-style note setter
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Apply the save-time fallbacks: trimmed non-empty name and category,
    /// non-negative amount
    pub fn normalize(&mut self) {
        let name = self.name.trim();
        self.name = if name.is_empty() {
            DEFAULT_NAME.to_string()
        } else {
            name.to_string()
        };

        let category = self.category.trim();
        self.category = if category.is_empty() {
            DEFAULT_CATEGORY.to_string()
        } else {
            category.to_string()
        };

        self.note = self.note.trim().to_string();
        self.amount = self.amount.non_negative();
    }

    /// Category as used for aggregation (blank counts as the default)
    pub fn category_or_default(&self) -> &str {
        let category = self.category.trim();
        if category.is_empty() {
            DEFAULT_CATEGORY
        } else {
            category
        }
    }

    /// Case-insensitive match on name, category or note
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query)
            || self.category.to_lowercase().contains(&query)
            || self.note.to_lowercase().contains(&query)
    }
}

impl fmt::Display for BudgetItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {} {})",
            self.name, self.item_type, self.frequency, self.amount
        )
    }
}
