//! Installment schedules for recurring deposits.

use time::Date;

use crate::{
    Error,
    deposit::{Deposit, DepositType, Installment, InstallmentStatus},
    month::MonthKey,
};

/// The monthly installment schedule for a recurring deposit.
///
/// One installment per calendar month, starting at the month of the
/// deposit's effective start and stepping while the month's first day is
/// before the maturity date. An installment is [InstallmentStatus::Paid]
/// once the first day of its month is on or before `today`.
///
/// Fixed deposits have no installments, and a deposit that matures on or
/// before its start has an empty schedule; neither is an error.
///
/// # Errors
/// This function will return a [Error::NonPositiveAmount] or
/// [Error::NegativeInterestRate] for a malformed deposit record.
pub fn installment_schedule(deposit: &Deposit, today: Date) -> Result<Vec<Installment>, Error> {
    deposit.check_terms()?;

    if deposit.deposit_type == DepositType::Fixed {
        return Ok(Vec::new());
    }

    let mut schedule = Vec::new();
    let mut month = MonthKey::from_date(deposit.start());

    while month.first_day() < deposit.maturity_date {
        let status = if month.first_day() <= today {
            InstallmentStatus::Paid
        } else {
            InstallmentStatus::Pending
        };

        schedule.push(Installment {
            sequence_number: schedule.len() as u32 + 1,
            month,
            amount: deposit.amount,
            status,
        });

        month = month.next();
    }

    Ok(schedule)
}

/// How many monthly installments are waiting to be collected as of `today`.
///
/// Counts the calendar months from the one after `last_processed` (or the
/// deposit's start month, when nothing has been collected yet) through
/// `today`'s month, stopping at maturity. Zero for fixed deposits, for
/// fully processed deposits, and for deposits that have not started yet.
pub fn installments_due(deposit: &Deposit, last_processed: Option<Date>, today: Date) -> u32 {
    if deposit.deposit_type == DepositType::Fixed {
        return 0;
    }

    let from = match last_processed {
        Some(date) => MonthKey::from_date(date).next(),
        None => MonthKey::from_date(deposit.start()),
    };
    let until = MonthKey::from_date(deposit.maturity_date.min(today));

    if from > until {
        return 0;
    }

    (until.months_since(from) + 1) as u32
}

/// The share of the deposit's term that has elapsed, as a percentage
/// clamped to `[0, 100]`.
///
/// Drives the progress bar on the deposit cards. Measured in days, so a
/// deposit opened mid-month advances smoothly rather than in monthly
/// steps.
pub fn term_progress(deposit: &Deposit, today: Date) -> f64 {
    let total_days = ((deposit.maturity_date - deposit.start()).whole_days() as f64).max(1.0);
    let elapsed_days = ((today - deposit.start()).whole_days() as f64).max(0.0);

    ((elapsed_days / total_days) * 100.0).min(100.0)
}
