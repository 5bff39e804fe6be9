//! Agenda view: every occurrence in a month, by date

use super::format::{column_width, double_separator, truncate};
use crate::models::MoneyFormat;
use crate::schedule::MonthSummary;

const NOTE_CHARS: usize = 30;

/// Format the agenda of a month
pub fn format_agenda(summary: &MonthSummary, money: &MoneyFormat) -> String {
    let mut output = format!("Agenda {}\n", summary.month.long_name());

    if summary.events.is_empty() {
        output.push_str("Nothing scheduled this month.\n");
        return output;
    }

    let name_width = column_width(summary.events.iter().map(|e| e.name.as_str()), 4);
    let type_width = column_width(summary.events.iter().map(|e| e.item_type.label()), 4);
    let category_width = column_width(summary.events.iter().map(|e| e.category.as_str()), 8);
    let amounts: Vec<String> = summary.events.iter().map(|e| money.format(e.amount)).collect();
    let amount_width = column_width(amounts.iter().map(String::as_str), 6);

    output.push_str(&double_separator(
        12 + name_width + type_width + category_width + amount_width,
    ));
    output.push('\n');

    for (event, amount) in summary.events.iter().zip(&amounts) {
        let line = format!(
            "{}  {:<name_width$}  {:<type_width$}  {:<category_width$}  {:>amount_width$}",
            event.date.format("%d-%m"),
            event.name,
            event.item_type.label(),
            event.category,
            amount,
        );
        output.push_str(line.trim_end());
        if !event.note.is_empty() {
            output.push_str("  ");
            output.push_str(&truncate(&event.note, NOTE_CHARS));
        }
        output.push('\n');
    }

    output.push_str(&format!(
        "\n{} payments, {} in total\n",
        summary.events.len(),
        money.format(summary.total_expenses())
    ));

    output
}
