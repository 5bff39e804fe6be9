//! Occurrence expansion
//!
//! Turns one budget item and a target month into the concrete dates on which
//! the item falls due inside that month. Month bounds are half-open
//! `[first day, first day of next month)` and everything is day-granular.

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::{BudgetItem, Frequency, YearMonth};

/// Dates within `month` on which `item` recurs, in ascending order
///
/// Inactive items never occur. Monthly and yearly items clamp the anchor's
/// day-of-month to the target month's length (the 31st becomes the 30th in
/// a 30-day month).
pub fn occurrences(item: &BudgetItem, month: YearMonth) -> Vec<NaiveDate> {
    if !item.active {
        return Vec::new();
    }

    match item.frequency {
        Frequency::Monthly => monthly(item.date, month).into_iter().collect(),
        Frequency::Yearly => yearly(item.date, month).into_iter().collect(),
        Frequency::Once => once(item.date, month).into_iter().collect(),
        Frequency::Weekly => weekly(item.date, month),
    }
}

fn monthly(anchor: NaiveDate, month: YearMonth) -> Option<NaiveDate> {
    month
        .clamped_day(anchor.day())
        .filter(|date| month.contains(*date))
}

fn yearly(anchor: NaiveDate, month: YearMonth) -> Option<NaiveDate> {
    if anchor.month() != month.month() {
        return None;
    }
    monthly(anchor, month)
}

fn once(anchor: NaiveDate, month: YearMonth) -> Option<NaiveDate> {
    Some(anchor).filter(|date| month.contains(*date))
}

/// Every 7-day step from the anchor, in either direction, that lands in
/// the month
///
/// The first step on or after the month start is found from the day offset
/// directly, so anchors far from the month cost nothing extra.
fn weekly(anchor: NaiveDate, month: YearMonth) -> Vec<NaiveDate> {
    let start = month.start_date();
    let end = month.end_date_exclusive();

    let offset = (start - anchor).num_days();
    // ceil(offset / 7) for either sign
    let steps = offset.div_euclid(7) + i64::from(offset.rem_euclid(7) != 0);

    let mut dates = Vec::with_capacity(5);
    let mut current = match anchor.checked_add_signed(Duration::days(steps * 7)) {
        Some(date) => date,
        None => return dates,
    };

    while current < end {
        dates.push(current);
        current = match current.checked_add_signed(Duration::days(7)) {
            Some(next) => next,
            None => break,
        };
    }

    dates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ItemType, Money};
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ym(y: i32, m: u32) -> YearMonth {
        YearMonth::new(y, m).unwrap()
    }

    fn item(frequency: Frequency, anchor: NaiveDate) -> BudgetItem {
        BudgetItem::new(
            "Test",
            ItemType::Fixed,
            Money::from_major(10),
            frequency,
            anchor,
        )
    }

    #[test]
    fn test_inactive_item_never_occurs() {
        let mut it = item(Frequency::Weekly, date(2024, 1, 1));
        it.active = false;
        assert!(occurrences(&it, ym(2024, 2)).is_empty());

        let mut it = item(Frequency::Once, date(2024, 2, 10));
        it.active = false;
        assert!(occurrences(&it, ym(2024, 2)).is_empty());
    }

    #[test]
    fn test_monthly_next_month() {
        let it = item(Frequency::Monthly, date(2024, 1, 1));
        assert_eq!(occurrences(&it, ym(2024, 2)), vec![date(2024, 2, 1)]);
    }

    #[test]
    fn test_monthly_clamps_to_month_length() {
        let it = item(Frequency::Monthly, date(2024, 1, 31));
        assert_eq!(occurrences(&it, ym(2024, 4)), vec![date(2024, 4, 30)]);
        assert_eq!(occurrences(&it, ym(2024, 2)), vec![date(2024, 2, 29)]);
        assert_eq!(occurrences(&it, ym(2025, 2)), vec![date(2025, 2, 28)]);
    }

    #[test]
    fn test_monthly_day_is_min_of_anchor_and_month_length() {
        for anchor_day in [1, 15, 28, 29, 30, 31] {
            let it = item(Frequency::Monthly, date(2023, 1, anchor_day));
            let mut month = ym(2023, 1);
            for _ in 0..36 {
                let dates = occurrences(&it, month);
                assert_eq!(dates.len(), 1);
                assert_eq!(dates[0].day(), anchor_day.min(month.days_in_month()));
                assert!(month.contains(dates[0]));
                month = month.next();
            }
        }
    }

    #[test]
    fn test_monthly_also_occurs_before_anchor() {
        let it = item(Frequency::Monthly, date(2024, 6, 10));
        assert_eq!(occurrences(&it, ym(2024, 1)), vec![date(2024, 1, 10)]);
    }

    #[test]
    fn test_yearly_leap_day_clamps() {
        let it = item(Frequency::Yearly, date(2024, 2, 29));
        assert_eq!(occurrences(&it, ym(2025, 2)), vec![date(2025, 2, 28)]);
        assert!(occurrences(&it, ym(2025, 3)).is_empty());
        assert_eq!(occurrences(&it, ym(2028, 2)), vec![date(2028, 2, 29)]);
    }

    #[test]
    fn test_yearly_only_in_anchor_month() {
        let it = item(Frequency::Yearly, date(2020, 9, 5));
        let mut month = ym(2024, 1);
        let mut hits = Vec::new();
        for _ in 0..12 {
            hits.extend(occurrences(&it, month));
            month = month.next();
        }
        assert_eq!(hits, vec![date(2024, 9, 5)]);
    }

    #[test]
    fn test_once_occurs_exactly_once() {
        let it = item(Frequency::Once, date(2025, 7, 31));
        let mut month = ym(2022, 1);
        let mut hits = 0;
        for _ in 0..(6 * 12) {
            if !occurrences(&it, month).is_empty() {
                hits += 1;
                assert_eq!(month, ym(2025, 7));
            }
            month = month.next();
        }
        assert_eq!(hits, 1);
    }

    #[test]
    fn test_weekly_leap_february() {
        let it = item(Frequency::Weekly, date(2024, 1, 1));
        assert_eq!(
            occurrences(&it, ym(2024, 2)),
            vec![
                date(2024, 2, 5),
                date(2024, 2, 12),
                date(2024, 2, 19),
                date(2024, 2, 26)
            ]
        );
    }

    #[test]
    fn test_weekly_anchor_after_month() {
        // Monday 2024-03-04 steps backward into February
        let it = item(Frequency::Weekly, date(2024, 3, 4));
        assert_eq!(
            occurrences(&it, ym(2024, 2)),
            vec![
                date(2024, 2, 5),
                date(2024, 2, 12),
                date(2024, 2, 19),
                date(2024, 2, 26)
            ]
        );
    }

    #[test]
    fn test_weekly_anchor_on_month_start() {
        let it = item(Frequency::Weekly, date(2024, 2, 1));
        let dates = occurrences(&it, ym(2024, 2));
        assert_eq!(dates.first(), Some(&date(2024, 2, 1)));
        assert_eq!(dates.last(), Some(&date(2024, 2, 29)));
        assert_eq!(dates.len(), 5);
    }

    #[test]
    fn test_weekly_same_weekday_seven_days_apart() {
        let it = item(Frequency::Weekly, date(2023, 11, 8));
        assert_eq!(it.date.weekday(), Weekday::Wed);

        let mut month = ym(2022, 6);
        for _ in 0..30 {
            let dates = occurrences(&it, month);
            assert!((4..=5).contains(&dates.len()));
            for d in &dates {
                assert_eq!(d.weekday(), Weekday::Wed);
                assert!(month.contains(*d));
            }
            for pair in dates.windows(2) {
                assert_eq!((pair[1] - pair[0]).num_days(), 7);
            }
            month = month.next();
        }
    }

    #[test]
    fn test_weekly_distant_anchor() {
        let it = item(Frequency::Weekly, date(1900, 1, 1));
        let dates = occurrences(&it, ym(2200, 1));
        assert!(!dates.is_empty());
        assert!(dates
            .iter()
            .all(|d| d.weekday() == date(1900, 1, 1).weekday()));
    }
}
