//! Item display formatting

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::format::truncate;
use crate::models::{BudgetItem, MoneyFormat};

#[derive(Tabled)]
struct ItemRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    item_type: &'static str,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Frequency")]
    frequency: &'static str,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Active")]
    active: &'static str,
}

impl ItemRow {
    fn new(item: &BudgetItem, money: &MoneyFormat) -> Self {
        Self {
            id: item.id.short(),
            name: truncate(&item.name, 24),
            item_type: item.item_type.label(),
            category: truncate(&item.category, 18),
            amount: money.format(item.amount),
            frequency: item.frequency.label(),
            date: item.date.format("%Y-%m-%d").to_string(),
            active: if item.active { "yes" } else { "no" },
        }
    }
}

/// Format items as a table
pub fn format_item_list(items: &[BudgetItem], money: &MoneyFormat) -> String {
    if items.is_empty() {
        return "No items found.\n\nRun 'planner item add' to create one.".to_string();
    }

    let rows: Vec<ItemRow> = items.iter().map(|i| ItemRow::new(i, money)).collect();

    Table::new(rows)
        .with(Style::sharp())
        .with(Modify::new(Columns::single(4)).with(Alignment::right()))
        .to_string()
}

/// Format a single item
pub fn format_item_details(item: &BudgetItem, money: &MoneyFormat) -> String {
    let mut output = String::new();

    output.push_str(&format!("Item: {}\n", item.name));
    output.push_str(&format!("  ID:        {}\n", item.id.as_str()));
    output.push_str(&format!(
        "  Type:      {} ({})\n",
        item.item_type.label(),
        item.item_type.as_str()
    ));
    output.push_str(&format!("  Category:  {}\n", item.category_or_default()));
    output.push_str(&format!("  Amount:    {}\n", money.format(item.amount)));
    output.push_str(&format!("  Frequency: {}\n", item.frequency.label()));
    output.push_str(&format!("  Date:      {}\n", item.date.format("%Y-%m-%d")));
    output.push_str(&format!(
        "  Active:    {}\n",
        if item.active { "Yes" } else { "No" }
    ));

    if !item.note.is_empty() {
        output.push_str(&format!("  Note:      {}\n", item.note));
    }

    output
}
