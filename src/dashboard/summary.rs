//! Summary computations for the dashboard's cards.

use std::collections::HashMap;

use serde::Serialize;
use time::Date;

use crate::{
    deposit::{Deposit, DepositType},
    month::MonthKey,
};

/// A category's share of a month's spending.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    /// The category label, e.g. "Groceries".
    pub category: String,
    /// The summed spending in the category.
    pub total: f64,
    /// The category's share of the month's total, as a rounded percentage.
    pub percent: i64,
}

/// The biggest spending categories of `anchor`'s calendar month.
///
/// Filters `items` to the anchor month, sums amounts per category, works
/// out each category's share of the month total and returns the top
/// `limit` categories, largest first. Equal totals are ordered by
/// category name so the ranking is deterministic.
pub fn top_expense_categories<T, C, F>(
    items: &[T],
    anchor: Date,
    limit: usize,
    category: C,
    event: F,
) -> Vec<CategoryTotal>
where
    C: Fn(&T) -> &str,
    F: Fn(&T) -> (Date, f64),
{
    let anchor_month = MonthKey::from_date(anchor);

    let mut totals: HashMap<&str, f64> = HashMap::new();
    for item in items {
        let (date, amount) = event(item);
        if MonthKey::from_date(date) == anchor_month {
            *totals.entry(category(item)).or_insert(0.0) += amount;
        }
    }

    let month_total: f64 = totals.values().sum();

    let mut ranked: Vec<CategoryTotal> = totals
        .into_iter()
        .map(|(category, total)| CategoryTotal {
            category: category.to_owned(),
            total,
            percent: percent_of(total, month_total),
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.category.cmp(&b.category))
    });
    ranked.truncate(limit);

    ranked
}

fn percent_of(value: f64, total: f64) -> i64 {
    if total == 0.0 {
        0
    } else {
        ((value / total) * 100.0).round() as i64
    }
}

/// The asset-addition events a set of deposits contributes to the savings
/// trend chart.
///
/// A recurring deposit adds one installment-sized event per month from its
/// start month through `today` or maturity, whichever comes first; a fixed
/// deposit adds a single principal-sized event on its effective start.
/// The output feeds [crate::dashboard::bucket_by_month] alongside the
/// other asset streams.
pub fn deposit_addition_events(deposits: &[Deposit], today: Date) -> Vec<(Date, f64)> {
    let mut events = Vec::new();

    for deposit in deposits {
        match deposit.deposit_type {
            DepositType::Recurring => {
                let end = deposit.maturity_date.min(today);
                let mut month = MonthKey::from_date(deposit.start());
                while month.first_day() <= end {
                    events.push((month.first_day(), deposit.amount));
                    month = month.next();
                }
            }
            DepositType::Fixed => events.push((deposit.start(), deposit.amount)),
        }
    }

    events
}
