//! CSV export of a month's agenda

use std::io::Write;

use crate::error::{PlannerError, PlannerResult};
use crate::schedule::MonthSummary;

/// Write one row per occurrence: `date,name,type,category,amount,note`
///
/// Amounts use a decimal point regardless of display settings so the file
/// stays machine-readable.
pub fn export_agenda_csv<W: Write>(summary: &MonthSummary, writer: W) -> PlannerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["date", "name", "type", "category", "amount", "note"])
        .map_err(|e| PlannerError::Export(e.to_string()))?;

    for event in &summary.events {
        let amount = format!(
            "{}{}.{:02}",
            if event.amount.is_negative() { "-" } else { "" },
            event.amount.major().abs(),
            event.amount.cents_part()
        );
        csv_writer
            .write_record([
                event.date.format("%Y-%m-%d").to_string(),
                event.name.clone(),
                event.item_type.as_str().to_string(),
                event.category.clone(),
                amount,
                event.note.clone(),
            ])
            .map_err(|e| PlannerError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| PlannerError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetItem, Frequency, ItemType, Money, YearMonth};
    use chrono::NaiveDate;

    #[test]
    fn test_agenda_rows() {
        let anchor = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let items = vec![
            BudgetItem::new(
                "Huur",
                ItemType::Fixed,
                Money::from_major(900),
                Frequency::Monthly,
                anchor,
            )
            .with_category("Wonen")
            .with_note("Rond de 1e, per bank"),
            BudgetItem::new(
                "Boodschappen",
                ItemType::Optional,
                Money::from_cents(7550),
                Frequency::Weekly,
                anchor,
            ),
        ];
        let summary = MonthSummary::aggregate(&items, YearMonth::new(2024, 2).unwrap());

        let mut out = Vec::new();
        export_agenda_csv(&summary, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "date,name,type,category,amount,note");
        assert_eq!(lines[1], "2024-02-01,Huur,fixed,Wonen,900.00,\"Rond de 1e, per bank\"");
        assert_eq!(lines[2], "2024-02-05,Boodschappen,optional,Overig,75.50,");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_empty_month_has_header_only() {
        let summary = MonthSummary::aggregate(&[], YearMonth::new(2024, 2).unwrap());
        let mut out = Vec::new();
        export_agenda_csv(&summary, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
    }
}
