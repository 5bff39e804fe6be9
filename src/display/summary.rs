//! Month dashboard: income, totals per type, leftover and what's coming up

use chrono::NaiveDate;

use super::format::{double_separator, separator};
use crate::models::{ItemType, MoneyFormat};
use crate::services::MonthReport;

const WIDTH: usize = 44;
const LABEL_WIDTH: usize = 26;

/// Format the dashboard for one month
pub fn format_dashboard(
    report: &MonthReport,
    today: NaiveDate,
    upcoming_count: usize,
    money: &MoneyFormat,
) -> String {
    let summary = &report.summary;
    let balance = &report.balance;
    let mut output = String::new();

    output.push_str(&format!("Budget {}\n", summary.month.long_name()));
    output.push_str(&double_separator(WIDTH));
    output.push('\n');

    push_row(&mut output, "Income", &money.format(balance.income));
    for item_type in ItemType::ALL {
        push_row(
            &mut output,
            &format!("  {}", item_type.label()),
            &money.format(summary.total(item_type)),
        );
    }

    output.push_str(&separator(WIDTH));
    output.push('\n');
    push_row(&mut output, "Expenses", &money.format(balance.expenses));
    push_row(&mut output, "Left over", &money.format(balance.leftover));

    if !balance.is_non_negative() {
        output.push_str("  Expenses exceed income this month.\n");
    }

    output.push('\n');
    output.push_str("Upcoming\n");

    let upcoming = summary.upcoming(today, upcoming_count);
    if upcoming.is_empty() {
        output.push_str("  Nothing upcoming this month.\n");
    } else {
        let name_width = super::format::column_width(upcoming.iter().map(|e| e.name.as_str()), 4);
        for event in upcoming {
            output.push_str(&format!(
                "  {}  {:<name_width$}  {:>14}\n",
                event.date.format("%d-%m"),
                event.name,
                money.format(event.amount),
                name_width = name_width
            ));
        }
    }

    output
}

fn push_row(output: &mut String, label: &str, value: &str) {
    output.push_str(&format!(
        "{:<label$}{:>value$}\n",
        label,
        value,
        label = LABEL_WIDTH,
        value = WIDTH - LABEL_WIDTH
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetItem, Frequency, Money, YearMonth};
    use crate::schedule::MonthSummary;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn report(income: i64) -> MonthReport {
        let items = vec![
            BudgetItem::new(
                "Huur",
                ItemType::Fixed,
                Money::from_major(900),
                Frequency::Monthly,
                date(2024, 1, 1),
            ),
            BudgetItem::new(
                "Boodschappen",
                ItemType::Optional,
                Money::from_major(75),
                Frequency::Weekly,
                date(2024, 1, 1),
            ),
        ];
        let summary = MonthSummary::aggregate(&items, YearMonth::new(2024, 2).unwrap());
        let balance = summary.balance(Money::from_major(income));
        MonthReport {
            income: Money::from_major(income),
            summary,
            balance,
        }
    }

    #[test]
    fn test_dashboard_totals() {
        let text = format_dashboard(&report(2000), date(2024, 2, 10), 5, &MoneyFormat::default());

        assert!(text.starts_with("Budget februari 2024\n"));
        assert!(text.contains("€ 2.000,00"));
        assert!(text.contains("Vaste lasten"));
        assert!(text.contains("€ 1.200,00"));
        assert!(text.contains("€ 800,00"));
        assert!(!text.contains("exceed"));
    }

    #[test]
    fn test_dashboard_flags_overspending() {
        let text = format_dashboard(&report(1000), date(2024, 2, 10), 5, &MoneyFormat::default());
        assert!(text.contains("€ -200,00"));
        assert!(text.contains("Expenses exceed income"));
    }

    #[test]
    fn test_upcoming_respects_today_and_limit() {
        let text = format_dashboard(&report(2000), date(2024, 2, 10), 2, &MoneyFormat::default());
        assert!(text.contains("12-02  Boodschappen"));
        assert!(text.contains("19-02  Boodschappen"));
        assert!(!text.contains("26-02"));
        assert!(!text.contains("01-02"));

        let later = format_dashboard(&report(2000), date(2024, 3, 1), 5, &MoneyFormat::default());
        assert!(later.contains("Nothing upcoming"));
    }
}
