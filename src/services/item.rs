//! Item service
//!
//! Create, edit, toggle and remove budget items. Every change is normalized,
//! persisted and written to the audit log.

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::{PlannerError, PlannerResult};
use crate::models::{Budget, BudgetItem, Frequency, ItemId, ItemType, Money};
use crate::storage::Storage;

/// Input for a new item
#[derive(Debug, Clone)]
pub struct NewItem {
    pub name: String,
    pub item_type: ItemType,
    pub category: String,
    pub amount: Money,
    pub frequency: Frequency,
    pub date: NaiveDate,
    pub note: String,
}

/// Fields to change on an existing item; `None` leaves a field as it is
#[derive(Debug, Clone, Default)]
pub struct ItemChanges {
    pub name: Option<String>,
    pub item_type: Option<ItemType>,
    pub category: Option<String>,
    pub amount: Option<Money>,
    pub frequency: Option<Frequency>,
    pub date: Option<NaiveDate>,
    pub note: Option<String>,
    pub active: Option<bool>,
}

impl ItemChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.item_type.is_none()
            && self.category.is_none()
            && self.amount.is_none()
            && self.frequency.is_none()
            && self.date.is_none()
            && self.note.is_none()
            && self.active.is_none()
    }

    fn apply(self, item: &mut BudgetItem) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(item_type) = self.item_type {
            item.item_type = item_type;
        }
        if let Some(category) = self.category {
            item.category = category;
        }
        if let Some(amount) = self.amount {
            item.amount = amount;
        }
        if let Some(frequency) = self.frequency {
            item.frequency = frequency;
        }
        if let Some(date) = self.date {
            item.date = date;
        }
        if let Some(note) = self.note {
            item.note = note;
        }
        if let Some(active) = self.active {
            item.active = active;
        }
        item.normalize();
    }
}

/// Filter for listing items
#[derive(Debug, Clone, Default)]
pub struct ItemFilter {
    /// Case-insensitive text matched against name, category and note
    pub query: Option<String>,
    pub item_type: Option<ItemType>,
    pub include_inactive: bool,
}

impl ItemFilter {
    fn accepts(&self, item: &BudgetItem) -> bool {
        (self.include_inactive || item.active)
            && self.item_type.map_or(true, |t| item.item_type == t)
            && self.query.as_deref().map_or(true, |q| item.matches_query(q))
    }
}

/// Service for budget item management
pub struct ItemService<'a> {
    storage: &'a Storage,
}

impl<'a> ItemService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new item; it goes to the front of the list
    pub fn create(&self, input: NewItem) -> PlannerResult<BudgetItem> {
        validate_amount(input.amount)?;

        let item = BudgetItem::new(
            input.name,
            input.item_type,
            input.amount,
            input.frequency,
            input.date,
        )
        .with_category(input.category)
        .with_note(input.note);

        self.storage.budget.update(|budget| {
            budget.items.insert(0, item.clone());
            Ok(())
        })?;
        self.storage.budget.save()?;

        self.storage.log_create(
            EntityType::Item,
            item.id.as_str(),
            Some(item.name.clone()),
            &item,
        )?;

        tracing::debug!(id = %item.id, name = %item.name, "item created");
        Ok(item)
    }

    /// Find an item by full ID, short ID or exact name (case-insensitive)
    pub fn find(&self, identifier: &str) -> PlannerResult<BudgetItem> {
        let budget = self.storage.budget.get()?;
        let id = resolve(&budget, identifier)?;
        budget
            .item(&id)
            .cloned()
            .ok_or_else(|| PlannerError::item_not_found(identifier))
    }

    /// Items matching `filter`, in stored order
    pub fn list(&self, filter: &ItemFilter) -> PlannerResult<Vec<BudgetItem>> {
        let budget = self.storage.budget.get()?;
        Ok(budget
            .items
            .into_iter()
            .filter(|item| filter.accepts(item))
            .collect())
    }

    /// Apply `changes` to the item named by `identifier`
    pub fn update(&self, identifier: &str, changes: ItemChanges) -> PlannerResult<BudgetItem> {
        if changes.is_empty() {
            return Err(PlannerError::Validation("No changes given".into()));
        }
        if let Some(amount) = changes.amount {
            validate_amount(amount)?;
        }

        let (before, after) = self.storage.budget.update(|budget| {
            let id = resolve(budget, identifier)?;
            let item = budget
                .item_mut(&id)
                .ok_or_else(|| PlannerError::item_not_found(identifier))?;
            let before = item.clone();
            changes.apply(item);
            Ok((before, item.clone()))
        })?;
        self.storage.budget.save()?;

        self.storage.log_update(
            EntityType::Item,
            after.id.as_str(),
            Some(after.name.clone()),
            &before,
            &after,
        )?;

        Ok(after)
    }

    /// Flip an item between active and inactive
    pub fn toggle(&self, identifier: &str) -> PlannerResult<BudgetItem> {
        let current = self.find(identifier)?;
        self.update(
            current.id.as_str(),
            ItemChanges {
                active: Some(!current.active),
                ..ItemChanges::default()
            },
        )
    }

    /// Remove an item
    pub fn delete(&self, identifier: &str) -> PlannerResult<BudgetItem> {
        let removed = self.storage.budget.update(|budget| {
            let id = resolve(budget, identifier)?;
            let index = budget
                .items
                .iter()
                .position(|item| item.id == id)
                .ok_or_else(|| PlannerError::item_not_found(identifier))?;
            Ok(budget.items.remove(index))
        })?;
        self.storage.budget.save()?;

        self.storage.log_delete(
            EntityType::Item,
            removed.id.as_str(),
            Some(removed.name.clone()),
            &removed,
        )?;

        Ok(removed)
    }
}

fn validate_amount(amount: Money) -> PlannerResult<()> {
    if amount.is_negative() {
        return Err(PlannerError::Validation(format!(
            "Amount cannot be negative: {}",
            amount
        )));
    }
    Ok(())
}

/// Resolve an identifier to exactly one item ID
fn resolve(budget: &Budget, identifier: &str) -> PlannerResult<ItemId> {
    let identifier = identifier.trim();

    if let Some(item) = budget.items.iter().find(|i| i.id.as_str() == identifier) {
        return Ok(item.id.clone());
    }

    let by_id: Vec<&BudgetItem> = budget
        .items
        .iter()
        .filter(|i| i.id.matches(identifier))
        .collect();
    let candidates = if by_id.is_empty() {
        let wanted = identifier.to_lowercase();
        budget
            .items
            .iter()
            .filter(|i| i.name.to_lowercase() == wanted)
            .collect()
    } else {
        by_id
    };

    match candidates.as_slice() {
        [item] => Ok(item.id.clone()),
        [] => Err(PlannerError::item_not_found(identifier)),
        _ => Err(PlannerError::Ambiguous {
            entity_type: "item",
            identifier: identifier.to_string(),
        }),
    }
}
