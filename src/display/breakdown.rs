//! Category breakdown: per type, each category's share as a bar

use super::format::{column_width, format_bar, format_percentage};
use crate::models::{ItemType, MoneyFormat};
use crate::schedule::MonthSummary;

const BAR_WIDTH: usize = 20;

/// Format the per-category breakdown of a month
///
/// Types without any amount this month are left out.
pub fn format_breakdown(summary: &MonthSummary, money: &MoneyFormat) -> String {
    let mut output = format!("Categories {}\n", summary.month.long_name());

    let sections: Vec<(ItemType, _)> = ItemType::ALL
        .into_iter()
        .filter(|t| !summary.total(*t).is_zero())
        .map(|t| (t, summary.category_breakdown(t)))
        .collect();

    if sections.is_empty() {
        output.push_str("No amounts this month.\n");
        return output;
    }

    let name_width = column_width(
        sections
            .iter()
            .flat_map(|(_, shares)| shares.iter().map(|s| s.category.as_str())),
        8,
    );

    for (item_type, shares) in sections {
        output.push('\n');
        output.push_str(&format!(
            "{}  {}\n",
            item_type.label(),
            money.format(summary.total(item_type))
        ));

        for share in shares {
            output.push_str(&format!(
                "  {:<name_width$}  {:>14}  {}  {:>5}\n",
                share.category,
                money.format(share.amount),
                format_bar(share.percentage, BAR_WIDTH),
                format_percentage(share.percentage),
            ));
        }
    }

    output
}
