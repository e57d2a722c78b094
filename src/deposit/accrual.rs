//! Maturity projection and accrued-value computation for deposits.

use time::Date;

use crate::{
    Error,
    deposit::{Deposit, DepositType},
    month::MonthKey,
};

/// Days per year when converting a deposit term into fractional years.
const DAYS_PER_YEAR: f64 = 365.0;

/// Project the value of `deposit` at maturity.
///
/// A fixed deposit compounds annually over the (fractional) number of
/// years between its effective start and maturity. A recurring deposit
/// uses the standard bank formula: quarterly compounding over every
/// started quarter, with the monthly installments folded in through a
/// cube-root term.
///
/// A maturity date on or before the start is treated as a zero-length
/// term, not an error: the projection degenerates to the principal
/// (fixed) or zero (recurring).
///
/// # Errors
/// This function will return a:
/// - [Error::NonPositiveAmount] if the deposit amount is zero or negative,
/// - or [Error::NegativeInterestRate] if the rate is negative,
/// - or [Error::NonFiniteResult] if the projection overflows to a
///   non-finite value.
pub fn project_maturity(deposit: &Deposit) -> Result<f64, Error> {
    deposit.check_terms()?;

    let years = term_years(deposit);
    let maturity_amount = match deposit.deposit_type {
        DepositType::Fixed => {
            deposit.amount * (1.0 + deposit.interest_rate / 100.0).powf(years)
        }
        DepositType::Recurring => {
            recurring_maturity(deposit.amount, deposit.interest_rate, years)
        }
    };

    if !maturity_amount.is_finite() {
        tracing::error!(
            "projecting deposit {} produced a non-finite maturity amount",
            deposit.id
        );
        return Err(Error::NonFiniteResult("maturity projection"));
    }

    Ok(maturity_amount)
}

/// The amount actually sitting in `deposit` as of `today`.
///
/// A fixed deposit's principal is unchanged until maturity, so its accrued
/// value is simply the principal; interest is only realized at maturity. A
/// recurring deposit has received one installment per elapsed calendar
/// month, counting the start month and capped at the deposit's tenure.
///
/// # Errors
/// This function will return a [Error::NonPositiveAmount] or
/// [Error::NegativeInterestRate] for a malformed deposit record.
pub fn current_accrued(deposit: &Deposit, today: Date) -> Result<f64, Error> {
    deposit.check_terms()?;

    match deposit.deposit_type {
        DepositType::Fixed => Ok(deposit.amount),
        DepositType::Recurring => {
            Ok(deposit.amount * f64::from(installments_deposited(deposit, today)))
        }
    }
}

/// How many installments have gone into a recurring deposit as of `today`.
///
/// Whole elapsed calendar months counting the start month (never fewer
/// than one), capped at the total tenure in months.
pub fn installments_deposited(deposit: &Deposit, today: Date) -> u32 {
    let start = MonthKey::from_date(deposit.start());
    let months_elapsed = (MonthKey::from_date(today).months_since(start) + 1).max(1);
    let total_months = MonthKey::from_date(deposit.maturity_date)
        .months_since(start)
        .max(1);

    months_elapsed.min(total_months) as u32
}

fn term_years(deposit: &Deposit) -> f64 {
    let days = (deposit.maturity_date - deposit.start()).whole_days();
    (days as f64 / DAYS_PER_YEAR).max(0.0)
}

/// The standard recurring-deposit maturity formula.
///
/// `quarters` counts started quarters; the `-1/3` exponent spreads each
/// quarter's compounding across its three monthly installments.
fn recurring_maturity(installment: f64, annual_rate: f64, years: f64) -> f64 {
    let quarters = (years * 4.0).ceil();
    let quarterly_rate = annual_rate / 400.0;

    if quarterly_rate == 0.0 {
        // No interest: just the installments, three per quarter.
        return installment * quarters * 3.0;
    }

    let compound_factor = (1.0 + quarterly_rate).powf(quarters);
    let denominator = 1.0 - (1.0 + quarterly_rate).powf(-1.0 / 3.0);

    installment * (compound_factor - 1.0) / denominator
}
