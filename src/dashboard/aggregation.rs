//! Calendar-month aggregation of financial events for trend charts.
//!
//! One function serves every event stream on the dashboard (expenses,
//! incomes and asset additions alike), parameterized by a closure that
//! extracts the date and amount from each item.

use std::collections::BTreeMap;

use time::Date;

use crate::month::MonthKey;

/// The trailing window the dashboard trend charts show by default.
pub const DEFAULT_WINDOW_MONTHS: u32 = 6;

/// Sum events into calendar-month buckets over a trailing window.
///
/// Returns exactly `window_months` entries in chronological order, ending
/// at `anchor`'s month. Months without events are present with a zero
/// total, and events dated outside the window are ignored. Bucketing is
/// by calendar month: an event on the last day of a month lands in that
/// month, one on the first day of the next month lands in the next.
pub fn bucket_by_month<T, F>(
    items: &[T],
    window_months: u32,
    anchor: Date,
    event: F,
) -> BTreeMap<MonthKey, f64>
where
    F: Fn(&T) -> (Date, f64),
{
    let mut buckets = BTreeMap::new();
    let mut month = MonthKey::from_date(anchor);
    for _ in 0..window_months {
        buckets.insert(month, 0.0);
        month = month.previous();
    }

    for item in items {
        let (date, amount) = event(item);
        if let Some(total) = buckets.get_mut(&MonthKey::from_date(date)) {
            *total += amount;
        }
    }

    buckets
}
